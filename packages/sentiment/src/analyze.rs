//! Per-tweet sentiment.

use trends_sentiment_models::Sentiment;
use trends_source_models::Tweet;

use crate::lookup::SentimentLookup;
use crate::tokenize::extract_words;

/// Averages the sentiment of every scored word in `text`.
///
/// Repeated words count once per occurrence. Returns
/// [`Sentiment::ABSENT`] if no word has a score.
#[must_use]
pub fn analyze_text<L>(text: &str, lookup: &L) -> Sentiment
where
    L: SentimentLookup + ?Sized,
{
    Sentiment::average(
        extract_words(text)
            .iter()
            .map(|word| lookup.word_sentiment(word)),
    )
}

/// Averages the sentiment of every scored word in a tweet's text.
#[must_use]
pub fn analyze_tweet_sentiment<L>(tweet: &Tweet, lookup: &L) -> Sentiment
where
    L: SentimentLookup + ?Sized,
{
    analyze_text(&tweet.text, lookup)
}
