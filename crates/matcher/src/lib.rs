//! JD ↔ CV matching and scoring engine.
//!
//! Given structured job-description and CV item lists per category (skills,
//! responsibilities, job title, experience) with precomputed embedding
//! vectors, the engine builds pairwise cosine-similarity matrices, resolves
//! an optimal assignment between JD requirements and CV evidence, ranks
//! per-requirement alternatives for transparency, and combines category
//! scores into a weighted overall score with a qualitative tier.
//!
//! The crate is a pure library: no I/O, no shared mutable state. Extraction,
//! embedding generation, persistence, and any HTTP surface are the caller's
//! concern; the engine is fed [`DocumentProfile`]s and returns one immutable
//! [`MatchResult`] per call.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;

pub use config::{MatchOptions, MatchWeights};
pub use errors::MatchError;
pub use matching::match_documents;
pub use models::item::{Category, CategoryPolicy, DocumentProfile, Item};
pub use models::report::{
    Assignment, AlternativesEntry, MatchResult, MatchTier, RankedCandidate,
};
