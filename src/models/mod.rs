// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the statistics engine.

pub mod contest;
pub mod leaderboard;
pub mod period;
pub mod problem;
pub mod ranking;
pub mod response;
pub mod table;
pub mod user;

pub use contest::{
    ContestParticipant, ContestRecord, ContestStanding, ContestTotals, OverallContestStatistics,
    RatingPoint,
};
pub use leaderboard::{Leaderboard, LeaderboardRow, Metric, MetricRecord, RankedRow, SortOrder};
pub use period::{PeriodMap, TimePeriod};
pub use problem::{Categories, CategoryMap, OverallProblemStatistics, ProblemRecord};
pub use ranking::{Ranking, DEFAULT_RANKING_LIMIT};
pub use response::{
    ContestStatisticsResponse, Envelope, OrganizationResponse, ProblemStatisticsResponse,
    UsersResponse,
};
pub use table::UserStatistics;
pub use user::{UserHandle, UserProfile};

/// Per-user contest statistics as served by the backend.
pub type ContestStatistics = UserStatistics<ContestRecord>;
/// Per-user problem statistics as served by the backend.
pub type ProblemStatistics = UserStatistics<ProblemRecord>;
