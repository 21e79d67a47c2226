// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the statistics engine.

pub mod aggregator;
pub mod contests;
pub mod display;
pub mod history;
pub mod leaderboard;
pub mod pages;
pub mod problems;

pub use aggregator::Aggregator;
pub use contests::{aggregate_contests, contest_standings};
pub use display::{
    format_contests_for_display, format_problems_for_display,
    format_user_information_for_display, DisplayRow, ProblemSummary, TableFormatter,
    NOT_AVAILABLE,
};
pub use history::{summarize_contests, summarize_problems, ContestParticipation, SolvedProblem};
pub use leaderboard::{project_leaderboard, ranked_rows, sort_rows};
pub use pages::{
    contest_leaderboard_page, leaderboard_page, organization_overview, problem_leaderboard_page,
    LeaderboardPage, OrganizationOverview,
};
pub use problems::aggregate_problems;
