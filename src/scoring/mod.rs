pub mod classify;
pub mod tally;

pub use classify::classify;
pub use tally::score;

use crate::models::Category;
use serde::Serialize;
use std::collections::BTreeMap;

// Separator between tied categories in a blended label.
pub const LABEL_SEPARATOR: &str = "-";

/// Per-category counts for one session. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    counts: BTreeMap<Category, u32>,
}

impl ScoreTally {
    pub fn zeroed() -> Self {
        Self {
            counts: Category::ALL.iter().map(|&c| (c, 0)).collect(),
        }
    }

    pub fn increment(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn get(&self, category: Category) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Counts in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl Default for ScoreTally {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// The winning categories of a tally and the label built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub winners: Vec<Category>,
    pub label: String,
}

impl Classification {
    pub fn is_blend(&self) -> bool {
        self.winners.len() > 1
    }
}
