//! Similarity Matrix Builder — pairwise cosine similarity between JD and CV
//! items within one category.

use crate::errors::MatchError;
use crate::models::item::Item;

/// Pairwise similarity scores for one category: rows are JD items, columns
/// are CV items, cells are cosine similarities in [-1, 1]. Either dimension
/// may be zero; downstream components handle that without special-casing.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let cells = rows.into_iter().flatten().collect();
        Self {
            rows: nrows,
            cols: ncols,
            cells,
        }
    }
}

/// Builds the similarity matrix for one category.
///
/// All embeddings across both sides must share one fixed dimensionality;
/// the first differing vector fails the whole request with
/// `DimensionMismatch`. Zero-norm vectors score 0.0 against everything —
/// a defined edge case, not a division-by-zero fault.
pub fn build_similarity_matrix(
    jd_items: &[Item],
    cv_items: &[Item],
) -> Result<SimilarityMatrix, MatchError> {
    let expected = jd_items
        .iter()
        .chain(cv_items.iter())
        .map(|item| item.embedding.len())
        .next()
        .unwrap_or(0);
    for item in jd_items.iter().chain(cv_items.iter()) {
        if item.embedding.len() != expected {
            return Err(MatchError::DimensionMismatch {
                expected,
                found: item.embedding.len(),
            });
        }
    }

    let mut cells = Vec::with_capacity(jd_items.len() * cv_items.len());
    for jd in jd_items {
        for cv in cv_items {
            cells.push(cosine_similarity(&jd.embedding, &cv.embedding));
        }
    }

    Ok(SimilarityMatrix {
        rows: jd_items.len(),
        cols: cv_items.len(),
        cells,
    })
}

/// Cosine similarity `dot(a, b) / (‖a‖·‖b‖)` over equal-length slices.
/// Returns 0.0 when either vector has zero norm.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
