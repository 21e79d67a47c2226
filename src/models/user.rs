// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster entries as served by the backend's users endpoint.

use serde::{Deserialize, Serialize};

/// Unique competitor identifier.
pub type UserHandle = String;

/// One member of the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub handle: UserHandle,
    /// Competitive tier title, e.g. "candidate master"
    pub rank: String,
    /// Current rating
    pub rating: i32,
    /// Peak rating (the backend stores it as text, so accept either form)
    #[serde(default, deserialize_with = "deserialize_loose_rating")]
    pub max_rating: Option<i32>,
    /// Account creation date, e.g. "Monday, 1 Jan 2020 00:00:00.000000"
    #[serde(default)]
    pub creation_date: Option<String>,
}

fn deserialize_loose_rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(i32),
        Text(String),
    }

    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Number(n)) => Ok(Some(n)),
        Some(Loose::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid rating: {}", s))),
    }
}
