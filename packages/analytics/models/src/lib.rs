#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Report documents produced by the aggregation pipeline.
//!
//! These are what a renderer consumes: per-region average sentiment,
//! per-tweet dots, per-hour maps and distance rankings. Region maps only
//! contain regions that had at least one scored tweet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trends_geography_models::Position;

/// Average sentiment per region name.
pub type RegionSentiments = BTreeMap<String, f64>;

/// A single scored tweet, drawn as a dot on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDot {
    /// Where the tweet was posted.
    pub position: Position,
    /// The tweet's average word sentiment.
    pub sentiment: f64,
}

/// Region averages and tweet dots for one search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentMap {
    /// The search term.
    pub term: String,
    /// Number of tweets that matched the term.
    pub tweet_count: usize,
    /// Average sentiment of each region with scored tweets.
    pub regions: RegionSentiments,
    /// One dot per scored tweet.
    pub dots: Vec<SentimentDot>,
}

/// Region averages for the tweets posted within one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourSentiments {
    /// Hour of day, `0` (midnight) through `23`.
    pub hour: u32,
    /// Display label such as `"09:00-09:59"`.
    pub label: String,
    /// Number of tweets posted in this hour.
    pub tweet_count: usize,
    /// Average sentiment of each region with scored tweets.
    pub regions: RegionSentiments,
}

/// Per-hour region averages for one search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySentimentMap {
    /// The search term.
    pub term: String,
    /// All 24 hours, in order.
    pub hours: Vec<HourSentiments>,
}

/// A region ranked by distance from a reference region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenteredRegion {
    /// Region name.
    pub name: String,
    /// Display name for state abbreviations.
    pub state_name: Option<String>,
    /// Region center.
    pub center: Position,
    /// Great-circle distance from the reference center, in miles.
    pub distance_mi: f64,
}

/// The regions closest to a reference region, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenteredMap {
    /// Reference region name.
    pub center: String,
    /// Nearest regions, including the reference region itself.
    pub regions: Vec<CenteredRegion>,
}

/// The region with the most tweets for a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkativeRegion {
    /// The search term.
    pub term: String,
    /// Winning region, if any tweet matched.
    pub region: Option<String>,
    /// Number of tweets assigned to the winning region.
    pub tweet_count: usize,
}

/// A scored word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScore {
    /// The word, lowercased.
    pub word: String,
    /// Its sentiment score.
    pub score: f64,
}

/// Returns the display label for an hour of the day, e.g. `"09:00-09:59"`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00-{hour:02}:59")
}
