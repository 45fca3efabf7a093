//! Alternatives Ranker — per-JD-item top-N CV candidates by similarity.
//!
//! A pure function of the similarity matrix, deliberately decoupled from
//! the assignment: the chosen assignment optimizes the whole category,
//! while the alternatives show what a human reviewer would see
//! item-by-item.

use std::cmp::Ordering;

use crate::matching::similarity::SimilarityMatrix;
use crate::models::item::{Category, Item};
use crate::models::report::{AlternativesEntry, RankedCandidate};

/// Ranks the top `top_n` CV candidates for every JD row. Rows with zero CV
/// columns get an empty ranked list. Sorted descending by score, ties
/// broken by ascending `cv_index`.
pub fn rank_alternatives(
    category: Category,
    matrix: &SimilarityMatrix,
    jd_items: &[Item],
    cv_items: &[Item],
    top_n: usize,
) -> Vec<AlternativesEntry> {
    jd_items
        .iter()
        .enumerate()
        .map(|(row, jd)| {
            let mut ranked: Vec<RankedCandidate> = cv_items
                .iter()
                .enumerate()
                .map(|(col, cv)| RankedCandidate {
                    cv_index: cv.index,
                    cv_item_text: cv.text.clone(),
                    score: matrix.at(row, col),
                })
                .collect();
            ranked.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.cv_index.cmp(&b.cv_index))
            });
            ranked.truncate(top_n);
            AlternativesEntry {
                category,
                jd_index: jd.index,
                ranked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Item> {
        (0..n).map(|i| Item::new(i, format!("item {i}"), vec![])).collect()
    }

    #[test]
    fn test_ranked_descending_with_index_tie_break() {
        let m = SimilarityMatrix::from_rows(vec![vec![0.2, 0.8, 0.8, 0.5]]);
        let out = rank_alternatives(Category::Skills, &m, &items(1), &items(4), 5);
        assert_eq!(out.len(), 1);
        let indices: Vec<usize> = out[0].ranked.iter().map(|r| r.cv_index).collect();
        // 0.8 tie between cv 1 and cv 2 resolves to the lower index first.
        assert_eq!(indices, vec![1, 2, 3, 0]);
        for pair in out[0].ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_truncates_to_top_n() {
        let m = SimilarityMatrix::from_rows(vec![vec![0.1, 0.9, 0.5, 0.7, 0.3]]);
        let out = rank_alternatives(Category::Skills, &m, &items(1), &items(5), 2);
        assert_eq!(out[0].ranked.len(), 2);
        assert_eq!(out[0].ranked[0].cv_index, 1);
        assert_eq!(out[0].ranked[1].cv_index, 3);
    }

    #[test]
    fn test_every_jd_row_gets_an_entry() {
        let m = SimilarityMatrix::from_rows(vec![vec![0.4], vec![0.6], vec![0.2]]);
        let out = rank_alternatives(Category::Responsibilities, &m, &items(3), &items(1), 5);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].jd_index, 1);
    }

    #[test]
    fn test_zero_cv_items_yield_empty_ranked_lists() {
        let m = SimilarityMatrix::from_rows(vec![vec![], vec![]]);
        let out = rank_alternatives(Category::Skills, &m, &items(2), &[], 5);
        assert_eq!(out.len(), 2);
        assert!(out[0].ranked.is_empty());
        assert!(out[1].ranked.is_empty());
    }

    #[test]
    fn test_independent_of_assignment() {
        // Every row ranks the same best column even though the exclusive
        // assignment can credit it to only one row.
        let m = SimilarityMatrix::from_rows(vec![vec![0.9, 0.1], vec![0.8, 0.1]]);
        let out = rank_alternatives(Category::Skills, &m, &items(2), &items(2), 1);
        assert_eq!(out[0].ranked[0].cv_index, 0);
        assert_eq!(out[1].ranked[0].cv_index, 0);
    }
}
