//! Request options for the personalization endpoints.
//!
//! Every option is validated locally before a request is sent, so an
//! out-of-range value never reaches the API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotifyError};

/// Smallest page size the API accepts.
pub const MIN_LIMIT: u32 = 1;

/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 50;

/// Period over which top items are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last 4 weeks.
    ShortTerm,
    /// Roughly the last 6 months.
    #[default]
    MediumTerm,
    /// Several years of data.
    LongTerm,
}

impl TimeRange {
    /// Label used in the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    /// All ranges, shortest first.
    pub fn all() -> &'static [TimeRange] {
        &[TimeRange::ShortTerm, TimeRange::MediumTerm, TimeRange::LongTerm]
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = SpotifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short_term" => Ok(TimeRange::ShortTerm),
            "medium_term" => Ok(TimeRange::MediumTerm),
            "long_term" => Ok(TimeRange::LongTerm),
            other => Err(SpotifyError::InvalidParameter(format!(
                "unknown time range {:?}, expected short_term, medium_term or long_term",
                other
            ))),
        }
    }
}

fn validate_limit(limit: u32) -> Result<u32> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(SpotifyError::InvalidParameter(format!(
            "limit must be between {} and {}, got {}",
            MIN_LIMIT, MAX_LIMIT, limit
        )));
    }
    Ok(limit)
}

/// Options for the top tracks and top artists endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopItemsOptions {
    /// Number of items to return (1-50). The API defaults to 20.
    pub limit: Option<u32>,

    /// Index of the first item to return.
    pub offset: Option<u32>,

    /// Period to compute affinities over. The API defaults to medium term.
    pub time_range: Option<TimeRange>,
}

impl TopItemsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    /// Validate and render the options as query parameters.
    pub fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", validate_limit(limit)?.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(range) = self.time_range {
            params.push(("time_range", range.as_str().to_string()));
        }
        Ok(params)
    }
}

/// Options for the recently played endpoint.
///
/// `after` and `before` are unix timestamps in milliseconds; at most one
/// of them may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecentlyPlayedOptions {
    /// Number of items to return (1-50). The API defaults to 20.
    pub limit: Option<u32>,

    /// Only plays strictly after this timestamp.
    pub after: Option<i64>,

    /// Only plays strictly before this timestamp.
    pub before: Option<i64>,
}

impl RecentlyPlayedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_after(mut self, after_ms: i64) -> Self {
        self.after = Some(after_ms);
        self
    }

    pub fn with_before(mut self, before_ms: i64) -> Self {
        self.before = Some(before_ms);
        self
    }

    /// Validate and render the options as query parameters.
    pub fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
        if self.after.is_some() && self.before.is_some() {
            return Err(SpotifyError::InvalidParameter(
                "only one of after and before may be set".to_string(),
            ));
        }

        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", validate_limit(limit)?.to_string()));
        }
        if let Some(after) = self.after {
            params.push(("after", after.to_string()));
        }
        if let Some(before) = self.before {
            params.push(("before", before.to_string()));
        }
        Ok(params)
    }
}
