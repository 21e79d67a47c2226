// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user statistics tables (`handle -> period -> record`).
//!
//! The backend emits users in roster order and ranking ties are broken by
//! that order, so the table keeps users in the order they were inserted or
//! deserialized instead of re-sorting them.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::models::{PeriodMap, TimePeriod, UserHandle};

/// Ordered mapping from user handle to that user's per-period records.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatistics<R> {
    entries: Vec<(UserHandle, PeriodMap<R>)>,
    index: HashMap<UserHandle, usize>,
}

impl<R> Default for UserStatistics<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<R> UserStatistics<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user's records. A replaced user keeps its
    /// original position.
    pub fn insert(&mut self, handle: impl Into<UserHandle>, records: PeriodMap<R>) {
        let handle = handle.into();
        match self.index.get(&handle) {
            Some(&pos) => self.entries[pos].1 = records,
            None => {
                self.index.insert(handle.clone(), self.entries.len());
                self.entries.push((handle, records));
            }
        }
    }

    pub fn get(&self, handle: &str) -> Option<&PeriodMap<R>> {
        self.index.get(handle).map(|&pos| &self.entries[pos].1)
    }

    /// A single user's record for one period, if the user has data for it.
    pub fn record(&self, handle: &str, period: TimePeriod) -> Option<&R> {
        self.get(handle).and_then(|records| records.get(&period))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserHandle, &PeriodMap<R>)> {
        self.entries.iter().map(|(handle, records)| (handle, records))
    }

    /// Users that have a record for `period`, in table order.
    pub fn in_period(&self, period: TimePeriod) -> impl Iterator<Item = (&UserHandle, &R)> {
        self.entries
            .iter()
            .filter_map(move |(handle, records)| records.get(&period).map(|r| (handle, r)))
    }

    pub fn handles(&self) -> impl Iterator<Item = &UserHandle> {
        self.entries.iter().map(|(handle, _)| handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R, H: Into<UserHandle>> FromIterator<(H, PeriodMap<R>)> for UserStatistics<R> {
    fn from_iter<I: IntoIterator<Item = (H, PeriodMap<R>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (handle, records) in iter {
            table.insert(handle, records);
        }
        table
    }
}

impl<R: Serialize> Serialize for UserStatistics<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, R: Deserialize<'de>> Deserialize<'de> for UserStatistics<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor<R>(PhantomData<R>);

        impl<'de, R: Deserialize<'de>> Visitor<'de> for TableVisitor<R> {
            type Value = UserStatistics<R>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of user handles to per-period statistics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = UserStatistics::new();
                while let Some((handle, records)) =
                    access.next_entry::<UserHandle, PeriodMap<R>>()?
                {
                    table.insert(handle, records);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}
