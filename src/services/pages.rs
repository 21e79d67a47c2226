// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page payloads assembled from already-fetched API envelopes.
//!
//! Fetching the envelopes is the caller's job; these functions only combine
//! them with the aggregators and the leaderboard projector.

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::models::{
    ContestStatisticsResponse, Leaderboard, Metric, MetricRecord, OrganizationResponse,
    OverallContestStatistics, OverallProblemStatistics, PeriodMap, ProblemStatisticsResponse,
    SortOrder, UserStatistics, UsersResponse,
};
use crate::services::{project_leaderboard, sort_rows, Aggregator};

/// Organization home page: overall contest and problem statistics.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationOverview {
    pub last_update_time: Option<String>,
    pub organization_name: String,
    pub overall_contests: PeriodMap<OverallContestStatistics>,
    pub overall_problems: PeriodMap<OverallProblemStatistics>,
}

/// A single-metric leaderboard page.
///
/// Rows start out in roster order with `order` unset; [`LeaderboardPage::sorted`]
/// puts them in display order.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardPage {
    pub last_update_time: Option<String>,
    pub metric: Metric,
    /// Column heading for the metric
    pub heading: &'static str,
    pub order: Option<SortOrder>,
    pub rows: Leaderboard,
}

impl LeaderboardPage {
    /// Sort every period's rows by the metric value.
    pub fn sorted(mut self, order: SortOrder) -> Self {
        for rows in self.rows.values_mut() {
            sort_rows(rows, order);
        }
        self.order = Some(order);
        self
    }

    /// Sort by the configured order, falling back to the metric's own.
    pub fn sorted_for(self, config: &Config) -> Self {
        let order = config
            .sort_order
            .unwrap_or_else(|| self.metric.default_order());
        self.sorted(order)
    }
}

/// Aggregate both statistics envelopes into the home page payload.
///
/// The update time is taken from the organization envelope.
pub fn organization_overview(
    organization: &OrganizationResponse,
    contests: &ContestStatisticsResponse,
    problems: &ProblemStatisticsResponse,
    aggregator: &Aggregator,
) -> OrganizationOverview {
    tracing::info!(
        organization = %organization.organization_name,
        users = contests.contest_statistics.len(),
        "Building organization overview"
    );

    OrganizationOverview {
        last_update_time: organization.last_update_time.clone(),
        organization_name: organization.organization_name.clone(),
        overall_contests: aggregator.contests(&contests.contest_statistics),
        overall_problems: aggregator.problems(&problems.problem_statistics),
    }
}

/// Project a leaderboard page for `metric`.
///
/// The update time is taken from the users envelope.
pub fn leaderboard_page<R: MetricRecord>(
    users: &UsersResponse,
    statistics: &UserStatistics<R>,
    metric: Metric,
) -> Result<LeaderboardPage> {
    let rows = project_leaderboard(&users.users, statistics, metric)?;

    Ok(LeaderboardPage {
        last_update_time: users.last_update_time.clone(),
        metric,
        heading: metric.label(),
        order: None,
        rows,
    })
}

/// Leaderboard page over contest statistics.
pub fn contest_leaderboard_page(
    users: &UsersResponse,
    contests: &ContestStatisticsResponse,
    metric: Metric,
) -> Result<LeaderboardPage> {
    leaderboard_page(users, &contests.contest_statistics, metric)
}

/// Leaderboard page over problem statistics.
pub fn problem_leaderboard_page(
    users: &UsersResponse,
    problems: &ProblemStatisticsResponse,
) -> Result<LeaderboardPage> {
    leaderboard_page(users, &problems.problem_statistics, Metric::TotalProblems)
}
