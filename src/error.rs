// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the statistics engine.
//!
//! Missing data (absent periods, categories or fields) is never an error;
//! these variants cover caller mistakes such as asking a leaderboard for a
//! metric the supplied records do not carry.

use crate::models::Metric;

/// Engine error type.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown time period: {0}")]
    UnknownPeriod(String),

    #[error("Metric {metric} is not available on {record} records")]
    UnsupportedMetric {
        metric: Metric,
        record: &'static str,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("Malformed statistics payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    /// True for errors caused by the shape of an upstream payload rather than
    /// by the caller's arguments.
    pub fn is_payload_error(&self) -> bool {
        matches!(self, StatsError::Json(_) | StatsError::InvalidDate(_))
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, StatsError>;
