// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contest statistics, per user and organization-wide.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Ranking, UserHandle};

/// Scalar contest figures shared by per-user and overall statistics.
///
/// A rank of `None` means no contests were given in the period; it is never
/// conflated with a numeric rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct ContestTotals {
    #[serde(default)]
    pub best_rank: Option<u32>,
    #[serde(default)]
    pub worst_rank: Option<u32>,
    /// Largest single-contest gain, never below 0
    #[serde(default)]
    pub highest_rating_increase: i32,
    /// Largest single-contest loss, never above 0
    #[serde(default)]
    pub highest_rating_decrease: i32,
    #[serde(default)]
    pub total_contests: u32,
}

impl Default for ContestTotals {
    fn default() -> Self {
        Self {
            best_rank: None,
            worst_rank: None,
            highest_rating_increase: 0,
            highest_rating_decrease: 0,
            total_contests: 0,
        }
    }
}

impl ContestTotals {
    /// Fold another set of figures into this one.
    ///
    /// Commutative and associative, so the fold order never changes the
    /// result.
    pub fn absorb(&mut self, other: &ContestTotals) {
        self.best_rank = min_rank(self.best_rank, other.best_rank);
        self.worst_rank = max_rank(self.worst_rank, other.worst_rank);
        self.highest_rating_increase = self
            .highest_rating_increase
            .max(other.highest_rating_increase)
            .max(0);
        self.highest_rating_decrease = self
            .highest_rating_decrease
            .min(other.highest_rating_decrease)
            .min(0);
        self.total_contests += other.total_contests;
    }

    /// Fold a single contest result (rank and rating delta) into the figures.
    pub fn record_contest(&mut self, rank: u32, rating_change: i32) {
        self.absorb(&ContestTotals {
            best_rank: Some(rank),
            worst_rank: Some(rank),
            highest_rating_increase: rating_change.max(0),
            highest_rating_decrease: rating_change.min(0),
            total_contests: 1,
        });
    }
}

fn min_rank(current: Option<u32>, candidate: Option<u32>) -> Option<u32> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_rank(current: Option<u32>, candidate: Option<u32>) -> Option<u32> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// Rating after a contest, for rating history charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct RatingPoint {
    /// Date of the rating update (YYYY-MM-DD)
    pub date: String,
    pub rating: i32,
}

/// One user's contest statistics for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestRecord {
    #[serde(flatten)]
    pub totals: ContestTotals,
    /// Chronological; display only, never aggregated
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_history: Vec<RatingPoint>,
}

impl From<ContestTotals> for ContestRecord {
    fn from(totals: ContestTotals) -> Self {
        Self {
            totals,
            rating_history: Vec::new(),
        }
    }
}

/// Organization-wide contest statistics for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverallContestStatistics {
    #[serde(flatten)]
    pub totals: ContestTotals,
    /// Users with the most contests, most first
    pub most_contests_participated: Ranking<u32>,
    /// Users with the best single-contest rank, best first
    pub best_contest_ranks: Ranking<u32>,
}

/// A user's result in a single contest, as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestParticipant {
    pub handle: UserHandle,
    /// Global standing in the contest
    pub rank: u32,
    pub old_rating: i32,
    pub new_rating: i32,
}

/// A row of the organization-only standings of a contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct ContestStanding {
    pub handle: UserHandle,
    pub global_rank: u32,
    /// 1-based position among organization members
    pub organization_rank: u32,
    pub old_rating: i32,
    pub new_rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_null_rank_never_wins() {
        let mut totals = ContestTotals {
            best_rank: Some(40),
            worst_rank: Some(900),
            total_contests: 2,
            ..Default::default()
        };
        totals.absorb(&ContestTotals::default());

        assert_eq!(totals.best_rank, Some(40));
        assert_eq!(totals.worst_rank, Some(900));
        assert_eq!(totals.total_contests, 2);
    }

    #[test]
    fn test_absorb_replaces_empty_accumulator() {
        let mut totals = ContestTotals::default();
        totals.absorb(&ContestTotals {
            best_rank: Some(7),
            worst_rank: Some(70),
            highest_rating_increase: 120,
            highest_rating_decrease: -45,
            total_contests: 3,
        });

        assert_eq!(totals.best_rank, Some(7));
        assert_eq!(totals.worst_rank, Some(70));
        assert_eq!(totals.highest_rating_increase, 120);
        assert_eq!(totals.highest_rating_decrease, -45);
    }

    #[test]
    fn test_record_contest_tracks_swings() {
        let mut totals = ContestTotals::default();
        totals.record_contest(120, 35);
        totals.record_contest(15, -60);
        totals.record_contest(300, 10);

        assert_eq!(totals.best_rank, Some(15));
        assert_eq!(totals.worst_rank, Some(300));
        assert_eq!(totals.highest_rating_increase, 35);
        assert_eq!(totals.highest_rating_decrease, -60);
        assert_eq!(totals.total_contests, 3);
    }

    #[test]
    fn test_record_deserializes_nulls_and_missing_fields() {
        let record: ContestRecord = serde_json::from_str(
            r#"{"best_rank": null, "worst_rank": null, "total_contests": 0}"#,
        )
        .unwrap();

        assert_eq!(record.totals, ContestTotals::default());
        assert!(record.rating_history.is_empty());
    }

    #[test]
    fn test_overall_serializes_flat() {
        let overall = OverallContestStatistics {
            totals: ContestTotals {
                best_rank: Some(1),
                total_contests: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&overall).unwrap();

        assert_eq!(value["best_rank"], 1);
        assert!(value["worst_rank"].is_null());
        assert_eq!(value["total_contests"], 1);
        assert_eq!(value["most_contests_participated"], serde_json::json!({}));
    }
}
