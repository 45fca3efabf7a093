use thiserror::Error;

use crate::models::item::{Category, CategoryPolicy};

/// Engine-level error type.
///
/// Every variant is a whole-request failure: errors are detected before any
/// `MatchResult` field is produced, so callers never see a partially scored
/// result. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Two embedding vectors of differing length were compared. Not
    /// retryable without fixing upstream embedding generation.
    #[error("embedding dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A category was resolved under the wrong exclusivity policy. This is a
    /// programming-contract violation, never expected in correct integration.
    #[error("policy {policy} does not apply to category {category}")]
    InvalidPolicy {
        category: Category,
        policy: CategoryPolicy,
    },

    /// All supplied match weights are zero or negative. The caller must
    /// supply a corrected weight set and retry.
    #[error("match weights sum to zero: at least one category weight must be positive")]
    ZeroWeightSum,

    /// `top_n` for alternatives ranking must be a positive integer.
    #[error("top_n must be a positive integer")]
    InvalidTopN,
}
