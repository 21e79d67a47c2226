// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contest aggregation: organization-wide figures and top-N rankings.

use crate::models::{
    ContestParticipant, ContestStanding, ContestStatistics, ContestTotals,
    OverallContestStatistics, PeriodMap, Ranking, TimePeriod,
};
use crate::services::Aggregator;

impl Aggregator {
    /// Reduce per-user contest statistics to organization-wide statistics.
    ///
    /// Every period that appears for at least one user gets an entry. Users
    /// without data for a period simply do not take part in it.
    #[tracing::instrument(skip_all, fields(users = statistics.len()))]
    pub fn contests(&self, statistics: &ContestStatistics) -> PeriodMap<OverallContestStatistics> {
        let mut totals: PeriodMap<ContestTotals> = PeriodMap::new();

        for (_, records) in statistics.iter() {
            for (period, record) in records {
                totals.entry(*period).or_default().absorb(&record.totals);
            }
        }

        totals
            .into_iter()
            .map(|(period, totals)| (period, self.rank_contests(statistics, period, totals)))
            .collect()
    }

    fn rank_contests(
        &self,
        statistics: &ContestStatistics,
        period: TimePeriod,
        totals: ContestTotals,
    ) -> OverallContestStatistics {
        if totals.total_contests == 0 {
            tracing::debug!(%period, "No contests given; rankings left empty");
            return OverallContestStatistics {
                totals,
                ..Default::default()
            };
        }

        let most_contests_participated = Ranking::top_descending(
            statistics
                .in_period(period)
                .filter(|(_, record)| record.totals.total_contests > 0)
                .map(|(handle, record)| (handle.clone(), record.totals.total_contests)),
            self.ranking_limit(),
        );

        // Users without a rank gave no contests and never outrank anyone.
        let best_contest_ranks = Ranking::top_ascending(
            statistics
                .in_period(period)
                .filter_map(|(handle, record)| {
                    record.totals.best_rank.map(|rank| (handle.clone(), rank))
                }),
            self.ranking_limit(),
        );

        tracing::debug!(
            %period,
            total_contests = totals.total_contests,
            ranked = best_contest_ranks.len(),
            "Aggregated contest statistics"
        );

        OverallContestStatistics {
            totals,
            most_contests_participated,
            best_contest_ranks,
        }
    }
}

/// Organization-wide contest statistics with the default ranking size.
pub fn aggregate_contests(statistics: &ContestStatistics) -> PeriodMap<OverallContestStatistics> {
    Aggregator::default().contests(statistics)
}

/// Standings of a contest restricted to organization members.
///
/// Participants are ordered by global rank (ties keep input order) and
/// numbered from 1.
pub fn contest_standings(mut participants: Vec<ContestParticipant>) -> Vec<ContestStanding> {
    participants.sort_by_key(|participant| participant.rank);

    participants
        .into_iter()
        .zip(1u32..)
        .map(|(participant, organization_rank)| ContestStanding {
            handle: participant.handle,
            global_rank: participant.rank,
            organization_rank,
            old_rating: participant.old_rating,
            new_rating: participant.new_rating,
        })
        .collect()
}
