// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user statistics from raw contest and submission history.
//!
//! Produces the per-period records the aggregators consume:
//! 1. Bucket each event into every time period that covers it
//! 2. Fold the bucketed events into a record per period
//!
//! All four periods are always present in the output, empty or not.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::problem::category;
use crate::models::{ContestRecord, PeriodMap, ProblemRecord, RatingPoint, TimePeriod};
use crate::time_utils::{deserialize_date, format_date};

/// One rated contest a user took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestParticipation {
    pub contest_id: u32,
    pub rank: u32,
    pub old_rating: i32,
    pub new_rating: i32,
    /// When the rating change was applied
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

impl ContestParticipation {
    pub fn rating_change(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}

/// One accepted solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedProblem {
    /// Problem index within its contest, e.g. "A" or "B1"
    pub index: String,
    /// Difficulty rating; 0 when the problem is unrated
    #[serde(default)]
    pub rating: u32,
    /// `;`-separated tag list
    #[serde(default)]
    pub tags: String,
    pub language: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub solved_date: NaiveDate,
}

/// Per-period contest records for one user.
///
/// Rating history points are emitted in chronological order when
/// `with_rating_history` is set.
pub fn summarize_contests(
    participations: &[ContestParticipation],
    today: NaiveDate,
    with_rating_history: bool,
) -> PeriodMap<ContestRecord> {
    let mut records: PeriodMap<ContestRecord> = TimePeriod::ALL
        .into_iter()
        .map(|period| (period, ContestRecord::default()))
        .collect();

    let mut chronological: Vec<&ContestParticipation> = participations.iter().collect();
    chronological.sort_by_key(|participation| participation.date);

    for participation in chronological {
        for period in TimePeriod::covering(participation.date, today) {
            let record = records.entry(period).or_default();
            record
                .totals
                .record_contest(participation.rank, participation.rating_change());

            if with_rating_history {
                record.rating_history.push(RatingPoint {
                    date: format_date(participation.date),
                    rating: participation.new_rating,
                });
            }
        }
    }

    tracing::trace!(
        contests = participations.len(),
        this_month = records[&TimePeriod::ThisMonth].totals.total_contests,
        "Summarized contest history"
    );

    records
}

/// Per-period problem records for one user.
///
/// Every record carries the `tags`, `indexes`, `ratings` and `languages`
/// categories, empty when nothing was solved.
pub fn summarize_problems(solved: &[SolvedProblem], today: NaiveDate) -> PeriodMap<ProblemRecord> {
    let mut records: PeriodMap<ProblemRecord> = TimePeriod::ALL
        .into_iter()
        .map(|period| (period, empty_problem_record()))
        .collect();

    for problem in solved {
        for period in TimePeriod::covering(problem.solved_date, today) {
            let record = records.entry(period).or_insert_with(empty_problem_record);
            record.total_problems += 1;

            for tag in problem.tags.split(';').filter(|tag| !tag.is_empty()) {
                record.category_mut(category::TAGS).add(tag, 1);
            }

            // "A1" and "A2" both count as "A".
            if let Some(index) = problem.index.chars().next() {
                record.category_mut(category::INDEXES).add(index.to_string(), 1);
            }

            if problem.rating != 0 {
                record
                    .category_mut(category::RATINGS)
                    .add(problem.rating.to_string(), 1);
            }

            record
                .category_mut(category::LANGUAGES)
                .add(problem.language.clone(), 1);
        }
    }

    tracing::trace!(solved = solved.len(), "Summarized problem history");

    records
}

fn empty_problem_record() -> ProblemRecord {
    let mut record = ProblemRecord::default();
    for name in [
        category::TAGS,
        category::INDEXES,
        category::RATINGS,
        category::LANGUAGES,
    ] {
        record.category_mut(name);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn participation(rank: u32, old: i32, new: i32, on: NaiveDate) -> ContestParticipation {
        ContestParticipation {
            contest_id: rank,
            rank,
            old_rating: old,
            new_rating: new,
            date: on,
        }
    }

    fn solved(index: &str, rating: u32, tags: &str, language: &str, on: NaiveDate) -> SolvedProblem {
        SolvedProblem {
            index: index.to_string(),
            rating,
            tags: tags.to_string(),
            language: language.to_string(),
            solved_date: on,
        }
    }

    #[test]
    fn test_no_history_yields_empty_periods() {
        let records = summarize_contests(&[], date(2024, 5, 15), false);

        assert_eq!(records.len(), 4);
        for record in records.values() {
            assert_eq!(record.totals.best_rank, None);
            assert_eq!(record.totals.total_contests, 0);
        }
    }

    #[test]
    fn test_contests_bucketed_by_period() {
        let today = date(2024, 5, 15);
        let records = summarize_contests(
            &[
                participation(500, 1500, 1450, date(2023, 11, 2)),
                participation(80, 1450, 1560, date(2024, 5, 2)),
                participation(200, 1560, 1580, today),
            ],
            today,
            true,
        );

        let all_time = &records[&TimePeriod::AllTime];
        assert_eq!(all_time.totals.total_contests, 3);
        assert_eq!(all_time.totals.best_rank, Some(80));
        assert_eq!(all_time.totals.worst_rank, Some(500));
        assert_eq!(all_time.totals.highest_rating_increase, 110);
        assert_eq!(all_time.totals.highest_rating_decrease, -50);
        assert_eq!(all_time.rating_history.len(), 3);
        assert_eq!(all_time.rating_history[0].date, "2023-11-02");

        let this_month = &records[&TimePeriod::ThisMonth];
        assert_eq!(this_month.totals.total_contests, 2);
        assert_eq!(this_month.totals.highest_rating_decrease, 0);

        let today_record = &records[&TimePeriod::Today];
        assert_eq!(today_record.totals.total_contests, 1);
        assert_eq!(today_record.totals.best_rank, Some(200));
    }

    #[test]
    fn test_rating_history_is_chronological() {
        let today = date(2024, 5, 15);
        let records = summarize_contests(
            &[
                participation(10, 1600, 1700, date(2024, 3, 1)),
                participation(20, 1500, 1600, date(2024, 1, 1)),
            ],
            today,
            true,
        );

        let ratings: Vec<_> = records[&TimePeriod::AllTime]
            .rating_history
            .iter()
            .map(|point| point.rating)
            .collect();
        assert_eq!(ratings, vec![1600, 1700]);
    }

    #[test]
    fn test_problem_categories() {
        let today = date(2024, 5, 15);
        let records = summarize_problems(
            &[
                solved("A1", 800, "math;greedy", "Rust", today),
                solved("A", 0, "", "Rust", today),
                solved("C", 1600, "dp;", "C++17", date(2024, 1, 3)),
            ],
            today,
        );

        let all_time = &records[&TimePeriod::AllTime];
        assert_eq!(all_time.total_problems, 3);
        assert_eq!(all_time.category(category::INDEXES).unwrap().get("A"), 2);
        assert_eq!(all_time.category(category::TAGS).unwrap().get("dp"), 1);
        assert_eq!(all_time.category(category::TAGS).unwrap().len(), 3);
        // Unrated problems are not counted under any rating.
        assert_eq!(all_time.category(category::RATINGS).unwrap().len(), 2);
        assert_eq!(all_time.category(category::LANGUAGES).unwrap().get("Rust"), 2);

        let today_record = &records[&TimePeriod::Today];
        assert_eq!(today_record.total_problems, 2);
        assert_eq!(today_record.category(category::RATINGS).unwrap().get("1600"), 0);
    }

    #[test]
    fn test_empty_periods_still_carry_categories() {
        let records = summarize_problems(&[], date(2024, 5, 15));
        let today = &records[&TimePeriod::Today];

        assert_eq!(today.total_problems, 0);
        assert!(today.category(category::LANGUAGES).unwrap().is_empty());
    }

    #[test]
    fn test_participation_deserializes_backend_timestamp() {
        let participation: ContestParticipation = serde_json::from_str(
            r#"{"contest_id": 1900, "rank": 42, "old_rating": 1500, "new_rating": 1543,
                "date": "2024-02-10 17:35:00"}"#,
        )
        .unwrap();

        assert_eq!(participation.date, date(2024, 2, 10));
        assert_eq!(participation.rating_change(), 43);
    }
}
