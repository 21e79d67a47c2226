// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard rows and the metrics they can be built from.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{Result, StatsError};
use crate::models::{ContestRecord, PeriodMap, ProblemRecord, UserHandle};

/// A per-user attribute a leaderboard can rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalContests,
    BestRank,
    WorstRank,
    HighestRatingIncrease,
    HighestRatingDecrease,
    TotalProblems,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::TotalContests,
        Metric::BestRank,
        Metric::WorstRank,
        Metric::HighestRatingIncrease,
        Metric::HighestRatingDecrease,
        Metric::TotalProblems,
    ];

    /// Attribute name as it appears in payloads and row records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::TotalContests => "total_contests",
            Metric::BestRank => "best_rank",
            Metric::WorstRank => "worst_rank",
            Metric::HighestRatingIncrease => "highest_rating_increase",
            Metric::HighestRatingDecrease => "highest_rating_decrease",
            Metric::TotalProblems => "total_problems",
        }
    }

    /// Column heading used by the leaderboard pages.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::TotalContests => "Contests Participated",
            Metric::BestRank => "Best Contest Rank",
            Metric::WorstRank => "Worst Contest Rank",
            Metric::HighestRatingIncrease => "Highest Rating Increase",
            Metric::HighestRatingDecrease => "Highest Rating Decrease",
            Metric::TotalProblems => "Problems Solved",
        }
    }

    /// Ranks read best when small; everything else when large.
    pub fn default_order(&self) -> SortOrder {
        match self {
            Metric::BestRank | Metric::WorstRank => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = StatsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| StatsError::UnknownMetric(s.to_string()))
    }
}

/// Display ordering for a leaderboard column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = StatsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(StatsError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Per-user records that can feed a leaderboard.
pub trait MetricRecord {
    /// Record kind, for error messages.
    const KIND: &'static str;

    /// The metric's value; `Ok(None)` is a legitimately empty value such
    /// as the rank of a user who gave no contests.
    fn metric(&self, metric: Metric) -> Result<Option<i64>>;
}

impl MetricRecord for ContestRecord {
    const KIND: &'static str = "contest";

    fn metric(&self, metric: Metric) -> Result<Option<i64>> {
        let totals = &self.totals;
        match metric {
            Metric::TotalContests => Ok(Some(totals.total_contests.into())),
            Metric::BestRank => Ok(totals.best_rank.map(i64::from)),
            Metric::WorstRank => Ok(totals.worst_rank.map(i64::from)),
            Metric::HighestRatingIncrease => Ok(Some(totals.highest_rating_increase.into())),
            Metric::HighestRatingDecrease => Ok(Some(totals.highest_rating_decrease.into())),
            Metric::TotalProblems => Err(StatsError::UnsupportedMetric {
                metric,
                record: Self::KIND,
            }),
        }
    }
}

impl MetricRecord for ProblemRecord {
    const KIND: &'static str = "problem";

    fn metric(&self, metric: Metric) -> Result<Option<i64>> {
        match metric {
            Metric::TotalProblems => Ok(Some(self.total_problems.into())),
            _ => Err(StatsError::UnsupportedMetric {
                metric,
                record: Self::KIND,
            }),
        }
    }
}

/// One table row: a roster entry plus the measured metric.
///
/// Serialized as `{handle, rank, rating, <metric>: value}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub handle: UserHandle,
    /// Competitive tier title
    pub rank: String,
    pub rating: i32,
    pub metric: Metric,
    pub value: Option<i64>,
}

impl Serialize for LeaderboardRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("handle", &self.handle)?;
        map.serialize_entry("rank", &self.rank)?;
        map.serialize_entry("rating", &self.rating)?;
        map.serialize_entry(self.metric.as_str(), &self.value)?;
        map.end()
    }
}

/// Leaderboard rows grouped by period.
pub type Leaderboard = PeriodMap<Vec<LeaderboardRow>>;

/// A row with its 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRow {
    pub position: usize,
    #[serde(flatten)]
    pub row: LeaderboardRow,
}
