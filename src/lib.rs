// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! org-stats: Organization-wide statistics for a competitive-programming community
//!
//! This crate turns per-user contest and problem-solving statistics into
//! organization rollups, top-N rankings, leaderboard rows and summary
//! tables. It is purely in-memory: callers fetch the backend payloads and
//! hand them in; every call returns freshly built, caller-owned results.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::Config;
pub use error::{Result, StatsError};
pub use services::{
    aggregate_contests, aggregate_problems, format_contests_for_display,
    format_problems_for_display, format_user_information_for_display, project_leaderboard,
    Aggregator,
};
