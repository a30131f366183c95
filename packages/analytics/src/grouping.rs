//! Grouping tweets by region and by hour of day.
//!
//! Both tables are seeded with every possible key before any tweet is
//! placed, so a region or hour with no tweets still has an (empty) entry.

use std::collections::BTreeMap;

use chrono::Timelike as _;
use trends_geography::{closest_region, region_centers};
use trends_geography_models::{Region, RegionCenter};
use trends_source_models::Tweet;

use crate::AnalyticsError;

/// Number of hour buckets.
pub const HOURS_PER_DAY: u32 = 24;

/// Tweets keyed by region name.
pub type RegionGroups<'a> = BTreeMap<String, Vec<&'a Tweet>>;

/// Tweets keyed by hour of day (`0..24`).
pub type HourGroups<'a> = BTreeMap<u32, Vec<&'a Tweet>>;

/// Groups tweets by the region whose center is nearest.
///
/// Region centers are computed once up front.
///
/// # Errors
///
/// Returns [`AnalyticsError::Geo`] if a region has zero area, or if there
/// are tweets but no regions.
pub fn group_by_region<'a, I>(tweets: I, regions: &[Region]) -> Result<RegionGroups<'a>, AnalyticsError>
where
    I: IntoIterator<Item = &'a Tweet>,
{
    let centers = region_centers(regions)?;
    group_by_center(tweets, &centers)
}

/// Groups tweets by the nearest of the given region centers.
///
/// # Errors
///
/// Returns [`AnalyticsError::Geo`] if there are tweets but no centers.
pub fn group_by_center<'a, I>(
    tweets: I,
    centers: &[RegionCenter],
) -> Result<RegionGroups<'a>, AnalyticsError>
where
    I: IntoIterator<Item = &'a Tweet>,
{
    let mut groups: RegionGroups<'a> = centers
        .iter()
        .map(|entry| (entry.name.clone(), Vec::new()))
        .collect();

    let mut placed = 0_usize;
    for tweet in tweets {
        let name = closest_region(tweet.position, centers)?;
        groups.entry(name.to_string()).or_default().push(tweet);
        placed += 1;
    }

    log::debug!("Grouped {placed} tweets into {} regions", groups.len());

    Ok(groups)
}

/// Groups tweets by the hour of day they were posted.
///
/// # Errors
///
/// Returns [`AnalyticsError::MissingTimestamp`] for the first tweet
/// without a timestamp.
pub fn group_by_hour<'a, I>(tweets: I) -> Result<HourGroups<'a>, AnalyticsError>
where
    I: IntoIterator<Item = &'a Tweet>,
{
    let mut groups: HourGroups<'a> = (0..HOURS_PER_DAY).map(|hour| (hour, Vec::new())).collect();

    for tweet in tweets {
        let time = tweet.time.ok_or_else(|| AnalyticsError::MissingTimestamp {
            tweet: tweet.to_string(),
        })?;
        groups.entry(time.hour()).or_default().push(tweet);
    }

    Ok(groups)
}
