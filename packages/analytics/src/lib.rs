#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Sentiment aggregation for the tweet trends map.
//!
//! Tweets are grouped by nearest region and by hour of day, then each
//! group's scored tweets are averaged. Every function here is pure: the
//! same inputs always produce the same tables.

pub mod grouping;
pub mod maps;
pub mod sentiments;

pub use grouping::{HourGroups, RegionGroups, group_by_center, group_by_hour, group_by_region};
pub use maps::{hourly_sentiment_map, sentiment_map};
pub use sentiments::{average_sentiments, most_talkative_region, sentiment_dots};

use thiserror::Error;

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Region geometry or classification failed.
    #[error("Geography error: {0}")]
    Geo(#[from] trends_geography::GeoError),

    /// Hour grouping needs every tweet to carry a timestamp.
    #[error("Tweet has no timestamp: {tweet}")]
    MissingTimestamp {
        /// The offending tweet, formatted for display.
        tweet: String,
    },
}
