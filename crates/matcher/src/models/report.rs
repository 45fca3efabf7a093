//! Output-side data model: the explainable match report.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::item::Category;

/// One resolved pairing between a JD requirement and a CV evidence item.
///
/// Within one category's exclusive resolution, every `jd_index` and every
/// `cv_index` appears in at most one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub category: Category,
    pub jd_index: usize,
    pub jd_item_text: String,
    pub cv_index: usize,
    pub cv_item_text: String,
    /// Cosine similarity of the pair, in [-1, 1].
    pub score: f32,
}

/// One CV candidate in a ranked alternatives list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub cv_index: usize,
    pub cv_item_text: String,
    pub score: f32,
}

/// Top-N CV candidates for one JD item, sorted descending by score, ties
/// broken by ascending `cv_index`. Independent of the chosen assignment:
/// the assignment optimizes the whole category, the alternatives show what
/// a human reviewer would see item-by-item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativesEntry {
    pub category: Category,
    pub jd_index: usize,
    pub ranked: Vec<RankedCandidate>,
}

/// Qualitative bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchTier {
    /// Fixed thresholds applied to the overall score in [0, 1].
    pub fn from_score(overall: f32) -> Self {
        if overall >= 0.85 {
            MatchTier::Excellent
        } else if overall >= 0.70 {
            MatchTier::Good
        } else if overall >= 0.50 {
            MatchTier::Fair
        } else {
            MatchTier::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
            MatchTier::Poor => "poor",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full match report for one JD/CV pair. Immutable; created once per
/// request and not persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted overall score in [0, 1].
    pub overall_score: f32,
    pub category_scores: BTreeMap<Category, f32>,
    pub assignments: Vec<Assignment>,
    pub alternatives: Vec<AlternativesEntry>,
    pub tier: MatchTier,
    pub recommendation: String,
}

impl MatchResult {
    /// Overall score on the 0–100 display scale. The engine scores on
    /// [0, 1] throughout; the percent form exists only for presentation.
    pub fn overall_percent(&self) -> u32 {
        (self.overall_score * 100.0).round() as u32
    }
}

/// Builds the human-readable recommendation line from the tier and the
/// weakest categories.
pub(crate) fn build_recommendation(
    tier: MatchTier,
    category_scores: &BTreeMap<Category, f32>,
) -> String {
    let mut weak: Vec<(Category, f32)> = category_scores
        .iter()
        .filter(|(_, score)| **score < 0.70)
        .map(|(c, s)| (*c, *s))
        .collect();
    weak.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let weakest: Vec<&str> = weak.iter().take(3).map(|(c, _)| c.as_str()).collect();

    match tier {
        MatchTier::Excellent => {
            "Excellent match. The CV covers the weighted job requirements across the board."
                .to_string()
        }
        MatchTier::Good => {
            if weakest.is_empty() {
                "Good match. Solid coverage of the job requirements.".to_string()
            } else {
                format!(
                    "Good match. Review coverage of: {}.",
                    weakest.join(", ")
                )
            }
        }
        MatchTier::Fair => format!(
            "Fair match. Noticeable gaps in: {}.",
            if weakest.is_empty() {
                "several categories".to_string()
            } else {
                weakest.join(", ")
            }
        ),
        MatchTier::Poor => format!(
            "Poor match. Major gaps in: {}.",
            if weakest.is_empty() {
                "most categories".to_string()
            } else {
                weakest.join(", ")
            }
        ),
    }
}
