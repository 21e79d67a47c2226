// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use org_stats::models::problem::category;
use org_stats::models::{
    CategoryMap, ContestRecord, ContestStatistics, ContestTotals, PeriodMap, ProblemRecord,
    ProblemStatistics, TimePeriod, UserProfile,
};
use std::fs;

/// Read a JSON fixture from `tests/fixtures/`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}", name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Contest record with the given ranks and count; rating swings are zero.
#[allow(dead_code)]
pub fn contest(best: Option<u32>, worst: Option<u32>, total: u32) -> ContestRecord {
    ContestRecord::from(ContestTotals {
        best_rank: best,
        worst_rank: worst,
        total_contests: total,
        ..Default::default()
    })
}

/// Contest record with rating swings.
#[allow(dead_code)]
pub fn contest_with_swings(
    best: Option<u32>,
    worst: Option<u32>,
    total: u32,
    increase: i32,
    decrease: i32,
) -> ContestRecord {
    ContestRecord::from(ContestTotals {
        best_rank: best,
        worst_rank: worst,
        highest_rating_increase: increase,
        highest_rating_decrease: decrease,
        total_contests: total,
    })
}

/// Problem record with a single tags breakdown.
#[allow(dead_code)]
pub fn problems(total: u32, tags: &[(&str, u32)]) -> ProblemRecord {
    let mut record = ProblemRecord {
        total_problems: total,
        ..Default::default()
    };
    *record.category_mut(category::TAGS) = tags.iter().copied().collect::<CategoryMap>();
    record
}

/// All-time-only contest table, in the given user order.
#[allow(dead_code)]
pub fn all_time_contests(users: Vec<(&str, ContestRecord)>) -> ContestStatistics {
    users
        .into_iter()
        .map(|(handle, record)| (handle, PeriodMap::from([(TimePeriod::AllTime, record)])))
        .collect()
}

/// All-time-only problem table, in the given user order.
#[allow(dead_code)]
pub fn all_time_problems(users: Vec<(&str, ProblemRecord)>) -> ProblemStatistics {
    users
        .into_iter()
        .map(|(handle, record)| (handle, PeriodMap::from([(TimePeriod::AllTime, record)])))
        .collect()
}

#[allow(dead_code)]
pub fn user(handle: &str, rank: &str, rating: i32) -> UserProfile {
    UserProfile {
        handle: handle.to_string(),
        rank: rank.to_string(),
        rating,
        max_rating: None,
        creation_date: None,
    }
}

/// Every rotation of `items`, for order-independence checks.
#[allow(dead_code)]
pub fn rotations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    (0..items.len())
        .map(|shift| {
            let mut rotated = items.to_vec();
            rotated.rotate_left(shift);
            rotated
        })
        .collect()
}
