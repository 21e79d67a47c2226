// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Envelopes returned by the backend statistics API.
//!
//! Fetching them is the caller's job; this module only gives the payloads a
//! typed shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ContestRecord, ProblemRecord, UserProfile, UserStatistics};

/// `GET /users/contests-participated`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestStatisticsResponse {
    #[serde(default)]
    pub last_update_time: Option<String>,
    pub contest_statistics: UserStatistics<ContestRecord>,
}

/// `GET /users/problems-solved`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemStatisticsResponse {
    #[serde(default)]
    pub last_update_time: Option<String>,
    pub problem_statistics: UserStatistics<ProblemRecord>,
}

/// `GET /users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub last_update_time: Option<String>,
    pub users: Vec<UserProfile>,
}

/// `GET /organization/name`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    #[serde(default)]
    pub last_update_time: Option<String>,
    pub organization_name: String,
}

/// Parse an envelope from a response body.
pub trait Envelope: DeserializeOwned {
    fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

impl Envelope for ContestStatisticsResponse {}
impl Envelope for ProblemStatisticsResponse {}
impl Envelope for UsersResponse {}
impl Envelope for OrganizationResponse {}
