use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::models::item::Category;

/// Per-category weights for the overall score.
///
/// Weights are non-negative and need not pre-sum to 1 or 100 — the scorer
/// normalizes them before use. Always passed in explicitly so concurrent
/// requests with different weight profiles never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f32,
    pub responsibilities: f32,
    pub job_title: f32,
    pub experience: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 80.0,
            responsibilities: 15.0,
            job_title: 2.5,
            experience: 2.5,
        }
    }
}

impl MatchWeights {
    pub fn get(&self, category: Category) -> f32 {
        match category {
            Category::Skills => self.skills,
            Category::Responsibilities => self.responsibilities,
            Category::JobTitle => self.job_title,
            Category::Experience => self.experience,
        }
    }

    /// Returns the normalized weight set: negatives floored to zero, then
    /// scaled to sum to 1. Fails with `ZeroWeightSum` when no category has a
    /// positive weight.
    pub fn normalized(&self) -> Result<MatchWeights, MatchError> {
        let skills = self.skills.max(0.0);
        let responsibilities = self.responsibilities.max(0.0);
        let job_title = self.job_title.max(0.0);
        let experience = self.experience.max(0.0);
        let sum = skills + responsibilities + job_title + experience;

        if sum <= 0.0 {
            return Err(MatchError::ZeroWeightSum);
        }

        Ok(MatchWeights {
            skills: skills / sum,
            responsibilities: responsibilities / sum,
            job_title: job_title / sum,
            experience: experience / sum,
        })
    }
}

/// Tunable knobs for one match request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchOptions {
    /// How many ranked CV candidates to keep per JD item in the
    /// alternatives listing. Must be positive.
    pub top_n: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

impl MatchOptions {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.top_n == 0 {
            return Err(MatchError::InvalidTopN);
        }
        Ok(())
    }
}
