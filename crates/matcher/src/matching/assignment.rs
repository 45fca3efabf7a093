//! Assignment Resolver — pairs JD requirements with CV evidence.
//!
//! Exclusive categories are solved as a maximum-weight bipartite matching
//! (Kuhn–Munkres) so credit allocation is globally optimal, not greedy: a
//! greedy highest-score-first pick can strand an item with no good
//! remaining partner that the optimal solution would have avoided.
//! Singleton categories compare the two sides' single items directly.

use pathfinding::kuhn_munkres::{kuhn_munkres, Weights};

use crate::errors::MatchError;
use crate::matching::similarity::SimilarityMatrix;
use crate::models::item::{Category, CategoryPolicy, Item};
use crate::models::report::Assignment;

/// Integer scale for similarity scores handed to the solver. Score
/// differences below one micro-unit are treated as ties; emitted
/// assignments always carry the true f32 score from the matrix.
const SCORE_SCALE: f32 = 1_000_000.0;

/// Resolves the assignments for one category under its exclusivity policy.
///
/// `InvalidPolicy` when the policy does not match the category — a
/// programming-contract violation, fatal, never retried. Unmatched JD
/// items are simply absent from the output; the aggregator counts them as
/// zero-score contributions.
pub fn resolve_assignments(
    category: Category,
    matrix: &SimilarityMatrix,
    jd_items: &[Item],
    cv_items: &[Item],
    policy: CategoryPolicy,
) -> Result<Vec<Assignment>, MatchError> {
    if policy != category.policy() {
        return Err(MatchError::InvalidPolicy { category, policy });
    }
    match policy {
        CategoryPolicy::Singleton => Ok(resolve_singleton(category, matrix, jd_items, cv_items)),
        CategoryPolicy::Exclusive => Ok(resolve_exclusive(category, matrix, jd_items, cv_items)),
    }
}

fn resolve_singleton(
    category: Category,
    matrix: &SimilarityMatrix,
    jd_items: &[Item],
    cv_items: &[Item],
) -> Vec<Assignment> {
    if jd_items.is_empty() || cv_items.is_empty() {
        return Vec::new();
    }
    // Extraction guarantees at most one item per side; compare the heads.
    let jd = &jd_items[0];
    let cv = &cv_items[0];
    vec![Assignment {
        category,
        jd_index: jd.index,
        jd_item_text: jd.text.clone(),
        cv_index: cv.index,
        cv_item_text: cv.text.clone(),
        score: matrix.at(0, 0),
    }]
}

fn resolve_exclusive(
    category: Category,
    matrix: &SimilarityMatrix,
    jd_items: &[Item],
    cv_items: &[Item],
) -> Vec<Assignment> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    // Square-pad with zero-score virtual items so every row and column has
    // a counterpart; pairs landing on virtual items are the unmatched
    // originals and get discarded below.
    let n = rows.max(cols);
    let mut cells = vec![0i64; n * n];
    for r in 0..rows {
        for c in 0..cols {
            cells[r * n + c] = scaled(matrix, r, c);
        }
    }
    let (total, _) = kuhn_munkres(&PaddedScores {
        size: n,
        cells: cells.clone(),
    });

    // Secondary objective: among equal-total optima, the lexicographically
    // smallest (jd_index, cv_index) pairing. Fix rows in ascending order,
    // giving each row the smallest column whose forced selection still
    // admits a completion reaching the optimal total (verified by
    // re-solving the reduced matrix). Virtual columns sit past the real
    // ones, so a row goes unmatched only when no real column preserves
    // optimality.
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut chosen = Vec::with_capacity(n);
    let mut prefix = 0i64;
    for r in 0..n {
        let mut slot = 0;
        for (s, &c) in remaining.iter().enumerate() {
            let forced = prefix + cells[r * n + c];
            let rest: Vec<usize> = remaining.iter().copied().filter(|&x| x != c).collect();
            if forced + best_completion(&cells, n, r + 1, &rest) == total {
                slot = s;
                break;
            }
        }
        let c = remaining.remove(slot);
        prefix += cells[r * n + c];
        chosen.push(c);
    }

    chosen
        .into_iter()
        .enumerate()
        .filter(|&(r, c)| r < rows && c < cols)
        .map(|(r, c)| Assignment {
            category,
            jd_index: jd_items[r].index,
            jd_item_text: jd_items[r].text.clone(),
            cv_index: cv_items[c].index,
            cv_item_text: cv_items[c].text.clone(),
            score: matrix.at(r, c),
        })
        .collect()
}

fn scaled(matrix: &SimilarityMatrix, r: usize, c: usize) -> i64 {
    (matrix.at(r, c) * SCORE_SCALE).round() as i64
}

/// Optimal assignment total for rows `start..n` over the given columns of
/// the padded matrix. `cols` always has exactly `n - start` entries, so
/// the reduced matrix stays square.
fn best_completion(cells: &[i64], n: usize, start: usize, cols: &[usize]) -> i64 {
    let m = cols.len();
    debug_assert_eq!(m, n - start);
    if m == 0 {
        return 0;
    }
    let mut sub = vec![0i64; m * m];
    for (i, r) in (start..n).enumerate() {
        for (j, &c) in cols.iter().enumerate() {
            sub[i * m + j] = cells[r * n + c];
        }
    }
    let (best, _) = kuhn_munkres(&PaddedScores { size: m, cells: sub });
    best
}

/// Square score matrix fed to `kuhn_munkres`, in solver units.
struct PaddedScores {
    size: usize,
    cells: Vec<i64>,
}

impl Weights<i64> for PaddedScores {
    fn rows(&self) -> usize {
        self.size
    }

    fn columns(&self) -> usize {
        self.size
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }

    fn neg(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|&v| -v).collect(),
        }
    }
}
