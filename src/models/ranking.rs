// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Truncated top-N rankings (`handle -> value`).

use serde::{Serialize, Serializer};

use crate::models::UserHandle;

/// Default number of users kept in a ranking.
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// An ordered `handle -> value` ranking.
///
/// Serialized as a JSON object whose key order is the ranking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<V> {
    entries: Vec<(UserHandle, V)>,
}

impl<V> Default for Ranking<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V: Ord> Ranking<V> {
    /// Highest values first. Ties keep candidate order.
    pub fn top_descending<I>(candidates: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = (UserHandle, V)>,
    {
        let mut entries: Vec<_> = candidates.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        Self { entries }
    }

    /// Lowest values first. Ties keep candidate order.
    pub fn top_ascending<I>(candidates: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = (UserHandle, V)>,
    {
        let mut entries: Vec<_> = candidates.into_iter().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        entries.truncate(limit);
        Self { entries }
    }
}

impl<V> Ranking<V> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserHandle, &V)> {
        self.entries.iter().map(|(handle, value)| (handle, value))
    }

    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(handle, _)| handle.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `[handle, value]` pair form some chart components expect.
    pub fn into_pairs(self) -> Vec<(UserHandle, V)> {
        self.entries
    }
}

impl<V: Serialize> Serialize for Ranking<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
