//! Category Aggregator — reduces one category's assignments to a score in
//! [0, 1].

use crate::models::item::CategoryPolicy;
use crate::models::report::Assignment;

/// Aggregates one category's resolved assignments.
///
/// Exclusive categories score the mean credit per JD item: unmatched JD
/// items contribute 0, and negative per-pair cosine scores clamp to 0
/// before summing (a negative similarity is evidence of mismatch, not
/// negative credit). Singleton categories take the single assignment's
/// clamped score, or 0 when no assignment exists.
///
/// A JD that supplied no items in the category scores 1.0: absence of a
/// requirement cannot be scored as a failure. Callers wanting the opposite
/// behavior set that category's weight to 0.
pub fn aggregate_category(
    policy: CategoryPolicy,
    assignments: &[Assignment],
    jd_item_count: usize,
) -> f32 {
    if jd_item_count == 0 {
        return 1.0;
    }
    match policy {
        CategoryPolicy::Exclusive => {
            let credit: f32 = assignments.iter().map(|a| a.score.max(0.0)).sum();
            credit / jd_item_count as f32
        }
        CategoryPolicy::Singleton => assignments
            .first()
            .map(|a| a.score.max(0.0))
            .unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Category;

    fn assignment(jd_index: usize, cv_index: usize, score: f32) -> Assignment {
        Assignment {
            category: Category::Skills,
            jd_index,
            jd_item_text: format!("jd{jd_index}"),
            cv_index,
            cv_item_text: format!("cv{cv_index}"),
            score,
        }
    }

    #[test]
    fn test_exclusive_mean_credit_per_jd_item() {
        // One matched pair at 0.9 over two JD items: (0.9 + 0) / 2 = 0.45.
        let assignments = vec![assignment(0, 0, 0.9)];
        let score = aggregate_category(CategoryPolicy::Exclusive, &assignments, 2);
        assert!((score - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_exclusive_full_matching() {
        let assignments = vec![assignment(0, 0, 0.9), assignment(1, 1, 0.1)];
        let score = aggregate_category(CategoryPolicy::Exclusive, &assignments, 2);
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_scores_clamp_to_zero() {
        let assignments = vec![assignment(0, 0, 0.8), assignment(1, 1, -0.6)];
        let score = aggregate_category(CategoryPolicy::Exclusive, &assignments, 2);
        assert!((score - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_empty_jd_category_is_neutral() {
        // No requirement in the category: 1.0 regardless of CV content.
        assert_eq!(aggregate_category(CategoryPolicy::Exclusive, &[], 0), 1.0);
        assert_eq!(aggregate_category(CategoryPolicy::Singleton, &[], 0), 1.0);
    }

    #[test]
    fn test_jd_items_with_no_assignments_score_zero() {
        assert_eq!(aggregate_category(CategoryPolicy::Exclusive, &[], 3), 0.0);
        assert_eq!(aggregate_category(CategoryPolicy::Singleton, &[], 1), 0.0);
    }

    #[test]
    fn test_singleton_takes_clamped_score() {
        let positive = vec![assignment(0, 0, 0.73)];
        let score = aggregate_category(CategoryPolicy::Singleton, &positive, 1);
        assert!((score - 0.73).abs() < 1e-6);

        let negative = vec![assignment(0, 0, -0.4)];
        assert_eq!(aggregate_category(CategoryPolicy::Singleton, &negative, 1), 0.0);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let assignments = vec![assignment(0, 0, 1.0), assignment(1, 1, 1.0)];
        let score = aggregate_category(CategoryPolicy::Exclusive, &assignments, 2);
        assert!((0.0..=1.0).contains(&score));
        assert!((score - 1.0).abs() < 1e-6);
    }
}
