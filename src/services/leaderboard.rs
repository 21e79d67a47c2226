// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard projection: one row per roster user per period.

use std::cmp::Ordering;

use crate::error::Result;
use crate::models::{
    Leaderboard, LeaderboardRow, Metric, MetricRecord, RankedRow, SortOrder, UserProfile,
    UserStatistics,
};

/// Build per-period leaderboard rows for `metric`.
///
/// Rows follow roster order; sorting is left to [`sort_rows`] so the caller
/// can pick the direction. A user without data for a period gets no row in
/// that period, and a roster user missing from `statistics` gets no rows at
/// all.
#[tracing::instrument(skip_all, fields(metric = %metric, users = users.len()))]
pub fn project_leaderboard<R: MetricRecord>(
    users: &[UserProfile],
    statistics: &UserStatistics<R>,
    metric: Metric,
) -> Result<Leaderboard> {
    let mut leaderboard = Leaderboard::new();

    for user in users {
        let Some(records) = statistics.get(&user.handle) else {
            tracing::debug!(handle = %user.handle, "No statistics for user, skipping");
            continue;
        };

        for (period, record) in records {
            leaderboard.entry(*period).or_default().push(LeaderboardRow {
                handle: user.handle.clone(),
                rank: user.rank.clone(),
                rating: user.rating,
                metric,
                value: record.metric(metric)?,
            });
        }
    }

    Ok(leaderboard)
}

/// Stable display sort on the metric value. Rows without a value (a user
/// with no contest rank) go last in either direction.
pub fn sort_rows(rows: &mut [LeaderboardRow], order: SortOrder) {
    rows.sort_by(|a, b| match (a.value, b.value) {
        (Some(x), Some(y)) => match order {
            SortOrder::Asc => x.cmp(&y),
            SortOrder::Desc => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Sort rows for display and number them from 1.
pub fn ranked_rows(mut rows: Vec<LeaderboardRow>, order: SortOrder) -> Vec<RankedRow> {
    sort_rows(&mut rows, order);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| RankedRow {
            position: i + 1,
            row,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(handle: &str, value: Option<i64>) -> LeaderboardRow {
        LeaderboardRow {
            handle: handle.to_string(),
            rank: "expert".to_string(),
            rating: 1700,
            metric: Metric::BestRank,
            value,
        }
    }

    fn handles(rows: &[LeaderboardRow]) -> Vec<&str> {
        rows.iter().map(|r| r.handle.as_str()).collect()
    }

    #[test]
    fn test_sort_ascending_nulls_last() {
        let mut rows = vec![row("none", None), row("ten", Some(10)), row("two", Some(2))];
        sort_rows(&mut rows, SortOrder::Asc);
        assert_eq!(handles(&rows), vec!["two", "ten", "none"]);
    }

    #[test]
    fn test_sort_descending_nulls_last() {
        let mut rows = vec![row("none", None), row("two", Some(2)), row("ten", Some(10))];
        sort_rows(&mut rows, SortOrder::Desc);
        assert_eq!(handles(&rows), vec!["ten", "two", "none"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![row("b", Some(5)), row("a", Some(5)), row("c", Some(1))];
        sort_rows(&mut rows, SortOrder::Desc);
        assert_eq!(handles(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ranked_rows_positions() {
        let ranked = ranked_rows(vec![row("x", Some(3)), row("y", Some(1))], SortOrder::Asc);
        let positions: Vec<_> = ranked
            .iter()
            .map(|r| (r.position, r.row.handle.as_str()))
            .collect();
        assert_eq!(positions, vec![(1, "y"), (2, "x")]);
    }
}
