//! Word sentiment lookups.
//!
//! [`SentimentLookup`] is the seam between the analyzer and wherever word
//! scores come from. [`WordSentiments`] is the table loaded from the
//! `word,score` CSV file; any `Fn(&str) -> Sentiment` closure also works.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use trends_sentiment_models::Sentiment;

use crate::LookupError;

/// Maps a word to its sentiment. Unknown words are absent.
pub trait SentimentLookup {
    /// Returns the sentiment of `word`.
    fn word_sentiment(&self, word: &str) -> Sentiment;
}

impl<F> SentimentLookup for F
where
    F: Fn(&str) -> Sentiment,
{
    fn word_sentiment(&self, word: &str) -> Sentiment {
        self(word)
    }
}

/// A fixed table of word scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordSentiments {
    scores: BTreeMap<String, Sentiment>,
}

impl WordSentiments {
    /// Loads a `word,score` CSV file (no header row).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the file cannot be read, a row is
    /// malformed, or a score is outside `[-1, 1]`.
    pub fn load(path: &Path) -> Result<Self, LookupError> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        log::info!(
            "Loaded {} word sentiments from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parses `word,score` rows from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if a row is malformed or a score is outside
    /// `[-1, 1]`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LookupError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut scores = BTreeMap::new();

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let line = index + 1;

            let (Some(word), Some(score)) = (record.get(0), record.get(1)) else {
                return Err(LookupError::Malformed {
                    line,
                    message: "expected word,score".to_string(),
                });
            };

            let value: f64 = score.parse().map_err(|e| LookupError::Malformed {
                line,
                message: format!("score {score:?}: {e}"),
            })?;

            let sentiment =
                Sentiment::present(value).map_err(|source| LookupError::InvalidScore {
                    line,
                    word: word.to_string(),
                    source,
                })?;

            scores.insert(word.to_string(), sentiment);
        }

        Ok(Self { scores })
    }

    /// Number of scored words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl SentimentLookup for WordSentiments {
    fn word_sentiment(&self, word: &str) -> Sentiment {
        self.scores.get(word).copied().unwrap_or_default()
    }
}

impl FromIterator<(String, Sentiment)> for WordSentiments {
    fn from_iter<I: IntoIterator<Item = (String, Sentiment)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}
