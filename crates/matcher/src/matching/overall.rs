//! Weighted Overall Scorer — combines category scores under normalized
//! weights into one overall score and a qualitative tier.

use std::collections::BTreeMap;

use crate::config::MatchWeights;
use crate::errors::MatchError;
use crate::models::item::Category;
use crate::models::report::MatchTier;

/// Combines the four category scores into the overall score and tier.
///
/// Weights are normalized internally (negatives floored to 0, then scaled
/// to sum to 1), so `{10,10,10,10}` and `{25,25,25,25}` score identically.
/// Fails with `ZeroWeightSum` when no weight is positive. A category
/// missing from `category_scores` contributes 0.
pub fn score_overall(
    category_scores: &BTreeMap<Category, f32>,
    weights: &MatchWeights,
) -> Result<(f32, MatchTier), MatchError> {
    let weights = weights.normalized()?;
    let overall: f32 = Category::ALL
        .iter()
        .map(|&c| weights.get(c) * category_scores.get(&c).copied().unwrap_or(0.0))
        .sum();
    // A convex combination of values in [0, 1]; the clamp only absorbs
    // float rounding at the boundaries.
    let overall = overall.clamp(0.0, 1.0);
    Ok((overall, MatchTier::from_score(overall)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(skills: f32, responsibilities: f32, job_title: f32, experience: f32) -> BTreeMap<Category, f32> {
        let mut m = BTreeMap::new();
        m.insert(Category::Skills, skills);
        m.insert(Category::Responsibilities, responsibilities);
        m.insert(Category::JobTitle, job_title);
        m.insert(Category::Experience, experience);
        m
    }

    #[test]
    fn test_weighted_combination() {
        // 0.8*0.9 + 0.15*0.6 + 0.025*1.0 + 0.025*0.5 = 0.8475 → good.
        let weights = MatchWeights {
            skills: 80.0,
            responsibilities: 15.0,
            job_title: 2.5,
            experience: 2.5,
        };
        let (overall, tier) = score_overall(&scores(0.9, 0.6, 1.0, 0.5), &weights).unwrap();
        assert!((overall - 0.8475).abs() < 1e-4, "overall was {overall}");
        assert_eq!(tier, MatchTier::Good);
    }

    #[test]
    fn test_weight_scale_does_not_matter() {
        let s = scores(0.9, 0.4, 0.7, 0.2);
        let tens = MatchWeights {
            skills: 10.0,
            responsibilities: 10.0,
            job_title: 10.0,
            experience: 10.0,
        };
        let quarters = MatchWeights {
            skills: 25.0,
            responsibilities: 25.0,
            job_title: 25.0,
            experience: 25.0,
        };
        let (a, _) = score_overall(&s, &tens).unwrap();
        let (b, _) = score_overall(&s, &quarters).unwrap();
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_all_zero_weights_fail() {
        let weights = MatchWeights {
            skills: 0.0,
            responsibilities: 0.0,
            job_title: 0.0,
            experience: 0.0,
        };
        let err = score_overall(&scores(1.0, 1.0, 1.0, 1.0), &weights).unwrap_err();
        assert_eq!(err, MatchError::ZeroWeightSum);
    }

    #[test]
    fn test_zero_weight_silences_a_category() {
        let weights = MatchWeights {
            skills: 1.0,
            responsibilities: 0.0,
            job_title: 0.0,
            experience: 0.0,
        };
        let (overall, _) = score_overall(&scores(0.6, 0.0, 0.0, 0.0), &weights).unwrap();
        assert!((overall - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_overall_stays_in_unit_interval() {
        let weights = MatchWeights::default();
        let (low, _) = score_overall(&scores(0.0, 0.0, 0.0, 0.0), &weights).unwrap();
        let (high, _) = score_overall(&scores(1.0, 1.0, 1.0, 1.0), &weights).unwrap();
        assert_eq!(low, 0.0);
        assert!((high - 1.0).abs() < 1e-6);
        assert!(high <= 1.0);
    }

    #[test]
    fn test_excellent_tier_at_threshold() {
        let weights = MatchWeights {
            skills: 1.0,
            responsibilities: 0.0,
            job_title: 0.0,
            experience: 0.0,
        };
        let (_, tier) = score_overall(&scores(0.85, 0.0, 0.0, 0.0), &weights).unwrap();
        assert_eq!(tier, MatchTier::Excellent);
    }
}
