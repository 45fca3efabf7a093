//! Input-side data model: extracted items and their categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One matching dimension. Declaration order is the fixed processing and
/// reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Responsibilities,
    JobTitle,
    Experience,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Skills,
        Category::Responsibilities,
        Category::JobTitle,
        Category::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Skills => "skills",
            Category::Responsibilities => "responsibilities",
            Category::JobTitle => "job_title",
            Category::Experience => "experience",
        }
    }

    /// Exclusivity policy of the category: list categories are credited
    /// one-to-one, singleton categories are compared directly.
    pub fn policy(&self) -> CategoryPolicy {
        match self {
            Category::Skills | Category::Responsibilities => CategoryPolicy::Exclusive,
            Category::JobTitle | Category::Experience => CategoryPolicy::Singleton,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How JD and CV items within a category may be paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPolicy {
    /// One CV item credited to at most one JD item and vice versa.
    Exclusive,
    /// At most one item per side, compared directly without an assignment
    /// step.
    Singleton,
}

impl fmt::Display for CategoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CategoryPolicy::Exclusive => "exclusive",
            CategoryPolicy::Singleton => "singleton",
        })
    }
}

/// A single extracted unit of meaning: one skill string, one responsibility
/// sentence, the job title, or an experience statement. Immutable once
/// created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Position within its source list, stable and zero-based.
    pub index: usize,
    pub text: String,
    /// Fixed-dimensionality embedding produced by a single consistent
    /// embedding model for the whole request.
    pub embedding: Vec<f32>,
}

impl Item {
    pub fn new(index: usize, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            index,
            text: text.into(),
            embedding,
        }
    }
}

/// One side's extracted items (JD or CV), grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentProfile {
    #[serde(default)]
    pub skills: Vec<Item>,
    #[serde(default)]
    pub responsibilities: Vec<Item>,
    #[serde(default)]
    pub job_title: Vec<Item>,
    #[serde(default)]
    pub experience: Vec<Item>,
}

impl DocumentProfile {
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Skills => &self.skills,
            Category::Responsibilities => &self.responsibilities,
            Category::JobTitle => &self.job_title,
            Category::Experience => &self.experience,
        }
    }
}
