//! Builds the report documents for one search term.

use trends_analytics_models::{HourSentiments, HourlySentimentMap, SentimentMap, hour_label};
use trends_geography_models::RegionCenter;
use trends_sentiment::SentimentLookup;
use trends_source_models::Tweet;

use crate::AnalyticsError;
use crate::grouping::{group_by_center, group_by_hour};
use crate::sentiments::{average_sentiments, sentiment_dots};

/// Averages sentiment by nearest region and collects per-tweet dots.
///
/// # Errors
///
/// Returns [`AnalyticsError::Geo`] if there are tweets but no centers.
pub fn sentiment_map<L>(
    term: &str,
    tweets: &[Tweet],
    centers: &[RegionCenter],
    lookup: &L,
) -> Result<SentimentMap, AnalyticsError>
where
    L: SentimentLookup + ?Sized,
{
    let groups = group_by_center(tweets, centers)?;
    let regions = average_sentiments(&groups, lookup);
    let dots = sentiment_dots(tweets, lookup);

    log::debug!(
        "Term {term:?}: {} tweets, {} regions with sentiment, {} dots",
        tweets.len(),
        regions.len(),
        dots.len()
    );

    Ok(SentimentMap {
        term: term.to_string(),
        tweet_count: tweets.len(),
        regions,
        dots,
    })
}

/// Averages sentiment by nearest region separately for each hour of day.
///
/// All 24 hours are present in the result, in order.
///
/// # Errors
///
/// Returns [`AnalyticsError::MissingTimestamp`] if a tweet has no
/// timestamp, or [`AnalyticsError::Geo`] if there are tweets but no
/// centers.
pub fn hourly_sentiment_map<L>(
    term: &str,
    tweets: &[Tweet],
    centers: &[RegionCenter],
    lookup: &L,
) -> Result<HourlySentimentMap, AnalyticsError>
where
    L: SentimentLookup + ?Sized,
{
    let by_hour = group_by_hour(tweets)?;

    let hours = by_hour
        .into_iter()
        .map(|(hour, hour_tweets)| {
            let groups = group_by_center(hour_tweets.iter().copied(), centers)?;
            Ok(HourSentiments {
                hour,
                label: hour_label(hour),
                tweet_count: hour_tweets.len(),
                regions: average_sentiments(&groups, lookup),
            })
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    Ok(HourlySentimentMap {
        term: term.to_string(),
        hours,
    })
}
