#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Tweet loading.
//!
//! Reads the tab-separated tweet dump and keeps the tweets whose text
//! mentions a search term as a whole word.

pub mod parsing;
pub mod progress;

use std::io::BufRead;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use trends_source_models::Tweet;

use crate::parsing::parse_tweet_line;
use crate::progress::ProgressCallback;

/// Errors that can occur while loading tweets.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The search term could not be compiled into a matcher.
    #[error("Invalid search term: {0}")]
    Term(#[from] regex::Error),
}

/// Builds a case-insensitive matcher for `term` as a standalone word.
///
/// The term must be bounded by a non-word character or the start or end
/// of the text, so terms like `#vma` match too.
///
/// # Errors
///
/// Returns [`SourceError::Term`] if the matcher cannot be compiled.
pub fn term_matcher(term: &str) -> Result<Regex, SourceError> {
    let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(term.trim()));
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Loads every tweet in the dump at `path` that mentions `term`.
///
/// Malformed lines are skipped and counted in a warning.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or the term cannot
/// be compiled.
pub fn load_tweets(
    path: &Path,
    term: &str,
    progress: &dyn ProgressCallback,
) -> Result<Vec<Tweet>, SourceError> {
    let file = std::fs::File::open(path)?;
    log::info!("Scanning {} for \"{term}\"", path.display());
    read_tweets(std::io::BufReader::new(file), term, progress)
}

/// Reads tweets mentioning `term` from a tweet dump stream.
///
/// Lines that are not valid UTF-8 are skipped like any other malformed
/// line.
///
/// # Errors
///
/// Returns [`SourceError`] if reading fails or the term cannot be
/// compiled.
pub fn read_tweets<R: BufRead>(
    reader: R,
    term: &str,
    progress: &dyn ProgressCallback,
) -> Result<Vec<Tweet>, SourceError> {
    let matcher = term_matcher(term)?;
    progress.set_message(format!("Scanning tweets for \"{term}\""));

    let mut tweets = Vec::new();
    let mut skipped = 0_u64;

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        progress.inc(1);

        let Ok(line) = std::str::from_utf8(&bytes) else {
            skipped += 1;
            log::debug!("Skipping non-UTF-8 tweet on line {}", index + 1);
            continue;
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_tweet_line(line) {
            Some(tweet) => {
                if matcher.is_match(&tweet.text) {
                    tweets.push(tweet);
                }
            }
            None => {
                skipped += 1;
                log::debug!("Skipping malformed tweet on line {}", index + 1);
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed tweet lines");
    }

    progress.finish(format!("Loaded {} tweets for \"{term}\"", tweets.len()));
    log::info!("Loaded {} tweets mentioning \"{term}\"", tweets.len());

    Ok(tweets)
}
