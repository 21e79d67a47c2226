// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Problem-solving statistics, per user and organization-wide.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Ranking;

/// Well-known category names produced by the backend.
pub mod category {
    pub const LANGUAGES: &str = "languages";
    pub const TAGS: &str = "tags";
    pub const INDEXES: &str = "indexes";
    pub const RATINGS: &str = "ratings";
}

/// Breakdown of solved problems by label (tag, language, index, rating).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<String, u32>);

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: &str) -> u32 {
        self.0.get(label).copied().unwrap_or(0)
    }

    /// Add `count` solves under `label`, creating the label at 0 if unseen.
    pub fn add(&mut self, label: impl Into<String>, count: u32) {
        *self.0.entry(label.into()).or_insert(0) += count;
    }

    /// Sum every label of `other` into this map.
    pub fn merge_sum(&mut self, other: &CategoryMap) {
        for (label, count) in &other.0 {
            *self.0.entry(label.clone()).or_insert(0) += count;
        }
    }

    /// Label with the highest count, ties going to the label that sorts
    /// last. `None` for an empty map.
    pub fn argmax(&self) -> Option<&str> {
        // `max_by_key` keeps the last of equal maxima.
        self.0
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, u32)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (L, u32)>>(iter: I) -> Self {
        let mut map = CategoryMap::new();
        for (label, count) in iter {
            map.add(label, count);
        }
        map
    }
}

/// Category maps keyed by category name.
pub type Categories = BTreeMap<String, CategoryMap>;

/// One user's problem statistics for one period.
///
/// Every key besides `total_problems` is treated as a category map, so new
/// breakdowns need no code changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    #[serde(default)]
    pub total_problems: u32,
    #[serde(flatten)]
    pub categories: Categories,
}

impl ProblemRecord {
    /// A category map, if this record carries it.
    pub fn category(&self, name: &str) -> Option<&CategoryMap> {
        self.categories.get(name)
    }

    pub fn category_mut(&mut self, name: &str) -> &mut CategoryMap {
        self.categories.entry(name.to_string()).or_default()
    }
}

/// Organization-wide problem statistics for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverallProblemStatistics {
    pub total_problems: u32,
    #[serde(flatten)]
    pub categories: Categories,
    /// Users with the most problems solved, most first
    pub most_problems_solved: Ranking<u32>,
}

impl OverallProblemStatistics {
    pub fn category(&self, name: &str) -> Option<&CategoryMap> {
        self.categories.get(name)
    }
}
