// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flatten statistics into `label -> value` rows for summary tables.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::models::problem::category;
use crate::models::{CategoryMap, ContestTotals, OverallProblemStatistics, ProblemRecord, UserProfile};

/// Placeholder for values that do not exist, such as the favourite tag of
/// a user who solved nothing.
pub const NOT_AVAILABLE: &str = "N/A";

/// One line of a summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
}

impl DisplayRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Problem figures that can be summarized, per user or organization-wide.
pub trait ProblemSummary {
    fn solved_total(&self) -> u32;
    fn breakdown(&self, name: &str) -> Option<&CategoryMap>;
}

impl ProblemSummary for ProblemRecord {
    fn solved_total(&self) -> u32 {
        self.total_problems
    }

    fn breakdown(&self, name: &str) -> Option<&CategoryMap> {
        self.categories.get(name)
    }
}

impl ProblemSummary for OverallProblemStatistics {
    fn solved_total(&self) -> u32 {
        self.total_problems
    }

    fn breakdown(&self, name: &str) -> Option<&CategoryMap> {
        self.categories.get(name)
    }
}

/// Builds summary tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormatter {
    not_available: String,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self {
            not_available: NOT_AVAILABLE.to_string(),
        }
    }
}

impl TableFormatter {
    pub fn new(not_available: impl Into<String>) -> Self {
        Self {
            not_available: not_available.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.not_available.clone())
    }

    pub fn contests(&self, totals: &ContestTotals) -> Vec<DisplayRow> {
        vec![
            DisplayRow::new("Total Contests Participated", totals.total_contests.to_string()),
            DisplayRow::new("Best Rank", self.or_missing(totals.best_rank)),
            DisplayRow::new("Worst Rank", self.or_missing(totals.worst_rank)),
            DisplayRow::new(
                "Highest Rating Increase",
                totals.highest_rating_increase.to_string(),
            ),
            DisplayRow::new(
                "Highest Rating Decrease",
                totals.highest_rating_decrease.to_string(),
            ),
        ]
    }

    /// Each "most solved" entry is the argmax of its category; a missing or
    /// empty category shows the placeholder.
    pub fn problems(&self, summary: &impl ProblemSummary) -> Vec<DisplayRow> {
        let most_solved = |name: &str| {
            summary
                .breakdown(name)
                .and_then(CategoryMap::argmax)
                .unwrap_or(&self.not_available)
                .to_string()
        };

        vec![
            DisplayRow::new("Total Problems Solved", summary.solved_total().to_string()),
            DisplayRow::new("Preferred Language", most_solved(category::LANGUAGES)),
            DisplayRow::new("Rating Most Solved", most_solved(category::RATINGS)),
            DisplayRow::new("Tag Most Solved", most_solved(category::TAGS)),
            DisplayRow::new("Index Most Solved", most_solved(category::INDEXES)),
        ]
    }

    pub fn user_information(&self, user: &UserProfile) -> Vec<DisplayRow> {
        // "Monday, 1 Jan 2020 00:00:00.000000" -> "Monday, 1 Jan 2020"
        let user_since = user
            .creation_date
            .as_deref()
            .map(|date| date.split_whitespace().take(4).collect::<Vec<_>>().join(" "))
            .filter(|date| !date.is_empty());

        vec![
            DisplayRow::new("User Since", self.or_missing(user_since)),
            DisplayRow::new("Rank", user.rank.clone()),
            DisplayRow::new("Rating", user.rating.to_string()),
            DisplayRow::new("Maximum Rating", self.or_missing(user.max_rating)),
        ]
    }

    fn or_missing<T: ToString>(&self, value: Option<T>) -> String {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.not_available.clone())
    }
}

pub fn format_contests_for_display(totals: &ContestTotals) -> Vec<DisplayRow> {
    TableFormatter::default().contests(totals)
}

pub fn format_problems_for_display(summary: &impl ProblemSummary) -> Vec<DisplayRow> {
    TableFormatter::default().problems(summary)
}

pub fn format_user_information_for_display(user: &UserProfile) -> Vec<DisplayRow> {
    TableFormatter::default().user_information(user)
}
