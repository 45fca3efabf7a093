//! Matching & scoring engine.
//! Pipeline per category: similarity matrix → assignment resolution →
//! alternatives ranking → category aggregation; then the weighted overall
//! score and tier. Pure computation — no I/O, no shared mutable state, safe
//! to run concurrently across requests.

pub mod aggregate;
pub mod alternatives;
pub mod assignment;
pub mod overall;
pub mod similarity;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::{MatchOptions, MatchWeights};
use crate::errors::MatchError;
use crate::models::item::{Category, DocumentProfile};
use crate::models::report::{build_recommendation, MatchResult};

/// Matches a JD against one CV and returns the full explainable report.
///
/// Configuration errors (`ZeroWeightSum`, `InvalidTopN`) and embedding
/// errors (`DimensionMismatch`) fail the whole request before any result
/// field is produced — there is no partial `MatchResult`.
pub fn match_documents(
    jd: &DocumentProfile,
    cv: &DocumentProfile,
    weights: &MatchWeights,
    options: &MatchOptions,
) -> Result<MatchResult, MatchError> {
    options.validate()?;
    weights.normalized()?;

    let mut category_scores = BTreeMap::new();
    let mut assignments = Vec::new();
    let mut alternatives = Vec::new();

    for category in Category::ALL {
        let jd_items = jd.items(category);
        let cv_items = cv.items(category);

        let matrix = similarity::build_similarity_matrix(jd_items, cv_items)?;
        let resolved = assignment::resolve_assignments(
            category,
            &matrix,
            jd_items,
            cv_items,
            category.policy(),
        )?;
        let ranked =
            alternatives::rank_alternatives(category, &matrix, jd_items, cv_items, options.top_n);
        let score = aggregate::aggregate_category(category.policy(), &resolved, jd_items.len());

        debug!(
            category = category.as_str(),
            jd_items = jd_items.len(),
            cv_items = cv_items.len(),
            matched = resolved.len(),
            score,
            "category scored"
        );

        category_scores.insert(category, score);
        assignments.extend(resolved);
        alternatives.extend(ranked);
    }

    let (overall_score, tier) = overall::score_overall(&category_scores, weights)?;
    let recommendation = build_recommendation(tier, &category_scores);
    info!(overall_score, tier = tier.as_str(), "match completed");

    Ok(MatchResult {
        overall_score,
        category_scores,
        assignments,
        alternatives,
        tier,
        recommendation,
    })
}
