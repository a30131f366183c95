#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Word-level sentiment analysis for tweets.
//!
//! Text is split into lowercase alphabetic tokens, each token is scored
//! through a [`SentimentLookup`], and a tweet's sentiment is the mean of
//! its scored tokens.

pub mod analyze;
pub mod lookup;
pub mod tokenize;

pub use analyze::{analyze_text, analyze_tweet_sentiment};
pub use lookup::{SentimentLookup, WordSentiments};
pub use tokenize::extract_words;

use thiserror::Error;
use trends_sentiment_models::SentimentError;

/// Errors that can occur while loading a word sentiment table.
#[derive(Debug, Error)]
pub enum LookupError {
    /// I/O error opening the table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row is not a `word,score` pair.
    #[error("Malformed sentiment row on line {line}: {message}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// A row's score is outside `[-1, 1]`.
    #[error("Invalid score for {word:?} on line {line}: {source}")]
    InvalidScore {
        /// One-based line number.
        line: usize,
        /// The word being scored.
        word: String,
        /// Underlying validation failure.
        source: SentimentError,
    },
}
