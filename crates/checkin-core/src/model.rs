//! Core data model types for checkin.
//!
//! A [`Submission`] is one student's check-in. Submissions are only ever
//! built from a validated [`SubmissionInput`], so every stored record already
//! satisfies the length and range constraints.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three 1–10 ratings collected with every check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Motivation,
    Energy,
    Happiness,
}

impl Metric {
    /// All metrics, in payload and CSV column order.
    pub const ALL: [Metric; 3] = [Metric::Motivation, Metric::Energy, Metric::Happiness];

    /// Field name used in JSON payloads and CSV headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Motivation => "motivation",
            Metric::Energy => "energy",
            Metric::Happiness => "happiness",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized, validated submission payload that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    pub name: String,
    pub motivation: u8,
    pub energy: u8,
    pub happiness: u8,
    pub note: String,
}

/// A stored check-in record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Student name, 1–50 characters.
    pub name: String,
    pub motivation: u8,
    pub energy: u8,
    pub happiness: u8,
    /// Free-form note, 0–500 characters.
    pub note: String,
    /// Creation time, serialized as ISO-8601 UTC with millisecond precision.
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl Submission {
    /// Stamp a validated input with a fresh id and the current time.
    pub fn new(input: SubmissionInput) -> Self {
        Self::at(input, Utc::now())
    }

    /// Like [`Submission::new`] with an explicit creation time.
    pub fn at(input: SubmissionInput, timestamp: DateTime<Utc>) -> Self {
        let SubmissionInput {
            name,
            motivation,
            energy,
            happiness,
            note,
        } = input;
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            motivation,
            energy,
            happiness,
            note,
            timestamp,
        }
    }

    /// The rating recorded for `metric`.
    pub fn rating(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Motivation => self.motivation,
            Metric::Energy => self.energy,
            Metric::Happiness => self.happiness,
        }
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
