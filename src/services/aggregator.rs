// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared settings for the organization-wide aggregations.
//!
//! The contest and problem reductions live in `services::contests` and
//! `services::problems` as methods on [`Aggregator`].

use crate::config::Config;
use crate::models::DEFAULT_RANKING_LIMIT;

/// Reduces per-user statistics into organization-wide statistics.
///
/// Holds no state between calls; every aggregation builds and returns fresh
/// structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    ranking_limit: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            ranking_limit: DEFAULT_RANKING_LIMIT,
        }
    }
}

impl Aggregator {
    /// Aggregator keeping at most `ranking_limit` users per ranking.
    pub fn new(ranking_limit: usize) -> Self {
        Self { ranking_limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ranking_limit)
    }

    pub fn ranking_limit(&self) -> usize {
        self.ranking_limit
    }
}
