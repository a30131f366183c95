//! Averaging grouped tweets into sentiment tables.

use std::collections::BTreeMap;

use trends_analytics_models::SentimentDot;
use trends_sentiment::{SentimentLookup, analyze_tweet_sentiment};
use trends_sentiment_models::Sentiment;
use trends_source_models::Tweet;

use crate::RegionGroups;

/// Averages the sentiment of each group of tweets.
///
/// Tweets without a sentiment are ignored. A group with no scored tweets
/// gets no entry in the result, which is different from an entry of `0.0`.
pub fn average_sentiments<K, L>(groups: &BTreeMap<K, Vec<&Tweet>>, lookup: &L) -> BTreeMap<K, f64>
where
    K: Ord + Clone,
    L: SentimentLookup + ?Sized,
{
    groups
        .iter()
        .filter_map(|(key, tweets)| {
            let scores = tweets
                .iter()
                .map(|tweet| analyze_tweet_sentiment(tweet, lookup));
            Sentiment::average(scores)
                .as_option()
                .map(|average| (key.clone(), average))
        })
        .collect()
}

/// Returns the region with the most tweets and its tweet count.
///
/// Returns `None` when no region has any tweets. When two regions tie,
/// the first in name order wins.
#[must_use]
pub fn most_talkative_region<'a>(groups: &'a RegionGroups<'_>) -> Option<(&'a str, usize)> {
    let mut best: Option<(&str, usize)> = None;

    for (name, tweets) in groups {
        let count = tweets.len();
        if count == 0 {
            continue;
        }
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((name.as_str(), count)),
        }
    }

    best
}

/// Returns one dot per tweet that has a sentiment, in input order.
pub fn sentiment_dots<'a, I, L>(tweets: I, lookup: &L) -> Vec<SentimentDot>
where
    I: IntoIterator<Item = &'a Tweet>,
    L: SentimentLookup + ?Sized,
{
    tweets
        .into_iter()
        .filter_map(|tweet| {
            analyze_tweet_sentiment(tweet, lookup)
                .as_option()
                .map(|sentiment| SentimentDot {
                    position: tweet.position,
                    sentiment,
                })
        })
        .collect()
}
