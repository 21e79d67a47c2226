// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Problem aggregation: summed category breakdowns and top solvers.

use crate::models::{
    OverallProblemStatistics, PeriodMap, ProblemStatistics, Ranking, TimePeriod,
};
use crate::services::Aggregator;

impl Aggregator {
    /// Reduce per-user problem statistics to organization-wide statistics.
    ///
    /// `total_problems` is summed; every other key is a category map whose
    /// labels are summed across users.
    #[tracing::instrument(skip_all, fields(users = statistics.len()))]
    pub fn problems(&self, statistics: &ProblemStatistics) -> PeriodMap<OverallProblemStatistics> {
        let mut overall: PeriodMap<OverallProblemStatistics> = PeriodMap::new();

        for (_, records) in statistics.iter() {
            for (period, record) in records {
                let entry = overall.entry(*period).or_default();
                entry.total_problems += record.total_problems;

                for (name, counts) in &record.categories {
                    entry
                        .categories
                        .entry(name.clone())
                        .or_default()
                        .merge_sum(counts);
                }
            }
        }

        for (period, stats) in overall.iter_mut() {
            stats.most_problems_solved = self.rank_solvers(statistics, *period, stats.total_problems);
        }

        overall
    }

    fn rank_solvers(
        &self,
        statistics: &ProblemStatistics,
        period: TimePeriod,
        total_problems: u32,
    ) -> Ranking<u32> {
        if total_problems == 0 {
            tracing::debug!(%period, "No problems solved; ranking left empty");
            return Ranking::empty();
        }

        let ranking = Ranking::top_descending(
            statistics
                .in_period(period)
                .filter(|(_, record)| record.total_problems > 0)
                .map(|(handle, record)| (handle.clone(), record.total_problems)),
            self.ranking_limit(),
        );

        tracing::debug!(
            %period,
            total_problems,
            ranked = ranking.len(),
            "Aggregated problem statistics"
        );

        ranking
    }
}

/// Organization-wide problem statistics with the default ranking size.
pub fn aggregate_problems(statistics: &ProblemStatistics) -> PeriodMap<OverallProblemStatistics> {
    Aggregator::default().problems(statistics)
}
