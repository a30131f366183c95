#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The canonical tweet record.
//!
//! Every tweet loader produces [`Tweet`] values, and the aggregation
//! pipeline consumes them without mutating them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use trends_geography_models::Position;

/// A geotagged tweet.
///
/// The timestamp is local wall-clock time as recorded in the source data.
/// It may be absent when only text and location matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Tweet text.
    pub text: String,
    /// When the tweet was posted.
    pub time: Option<NaiveDateTime>,
    /// Where the tweet was posted.
    pub position: Position,
}

impl Tweet {
    /// Creates a tweet from its text, time and coordinates.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        time: Option<NaiveDateTime>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            text: text.into(),
            time,
            position: Position::new(latitude, longitude),
        }
    }
}

impl std::fmt::Display for Tweet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" @ {}", self.text, self.position)
    }
}
