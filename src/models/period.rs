// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rolling time windows that statistics are bucketed into.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::StatsError;

/// One of the fixed statistics windows.
///
/// Ordering follows declaration order, so a [`PeriodMap`] always iterates
/// `all_time` first and `today` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub enum TimePeriod {
    AllTime,
    ThisMonth,
    ThisWeek,
    Today,
}

/// Statistics keyed by time period.
pub type PeriodMap<T> = BTreeMap<TimePeriod, T>;

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::AllTime,
        TimePeriod::ThisMonth,
        TimePeriod::ThisWeek,
        TimePeriod::Today,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::AllTime => "all_time",
            TimePeriod::ThisMonth => "this_month",
            TimePeriod::ThisWeek => "this_week",
            TimePeriod::Today => "today",
        }
    }

    /// Whether an event on `date` falls into this window as seen from `today`.
    ///
    /// The windows nest: a week only counts when it is also the current
    /// month, and a day only when it is also the current week.
    pub fn covers(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let same_month = date.year() == today.year() && date.month() == today.month();
        let same_week = same_month && date.iso_week().week() == today.iso_week().week();

        match self {
            TimePeriod::AllTime => true,
            TimePeriod::ThisMonth => same_month,
            TimePeriod::ThisWeek => same_week,
            TimePeriod::Today => same_week && date.day() == today.day(),
        }
    }

    /// All windows covering `date`, widest first.
    pub fn covering(date: NaiveDate, today: NaiveDate) -> impl Iterator<Item = TimePeriod> {
        Self::ALL
            .into_iter()
            .filter(move |period| period.covers(date, today))
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| StatsError::UnknownPeriod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_round_trips_wire_names() {
        for period in TimePeriod::ALL {
            assert_eq!(period.as_str().parse::<TimePeriod>().unwrap(), period);
        }
        assert!(matches!(
            "yesterday".parse::<TimePeriod>(),
            Err(StatsError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&TimePeriod::ThisMonth).unwrap();
        assert_eq!(json, "\"this_month\"");
    }

    #[test]
    fn test_same_day_is_in_every_window() {
        let today = date(2024, 5, 15);
        let periods: Vec<_> = TimePeriod::covering(today, today).collect();
        assert_eq!(periods, TimePeriod::ALL.to_vec());
    }

    #[test]
    fn test_earlier_in_week_is_not_today() {
        // 2024-05-13 is the Monday of the same ISO week as 2024-05-15.
        let periods: Vec<_> = TimePeriod::covering(date(2024, 5, 13), date(2024, 5, 15)).collect();
        assert_eq!(
            periods,
            vec![TimePeriod::AllTime, TimePeriod::ThisMonth, TimePeriod::ThisWeek]
        );
    }

    #[test]
    fn test_week_spanning_month_boundary_is_not_this_week() {
        // Same ISO week (week 22), different month.
        let periods: Vec<_> = TimePeriod::covering(date(2024, 5, 31), date(2024, 6, 2)).collect();
        assert_eq!(periods, vec![TimePeriod::AllTime]);
    }

    #[test]
    fn test_same_month_previous_year_is_all_time_only() {
        let periods: Vec<_> = TimePeriod::covering(date(2023, 5, 15), date(2024, 5, 15)).collect();
        assert_eq!(periods, vec![TimePeriod::AllTime]);
    }

    #[cfg(feature = "binding-generation")]
    #[test]
    fn test_bindings_land_in_crate_bindings_dir() {
        // Relative to TS_RS_EXPORT_DIR, which defaults to `./bindings`.
        assert_eq!(
            TimePeriod::output_path().as_deref(),
            Some(std::path::Path::new("TimePeriod.ts"))
        );
    }
}
