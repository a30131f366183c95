#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The sentiment value type.
//!
//! A [`Sentiment`] is either absent ("no known sentiment") or a score in
//! `[-1, 1]`. Absent is never conflated with `0.0`, which is a neutral
//! score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest valid sentiment score.
pub const MIN_SENTIMENT: f64 = -1.0;

/// Highest valid sentiment score.
pub const MAX_SENTIMENT: f64 = 1.0;

/// Errors produced when constructing or reading a [`Sentiment`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SentimentError {
    /// The score is outside `[-1, 1]` (or NaN).
    #[error("invalid sentiment value {value}: expected -1 to 1")]
    OutOfRange {
        /// The rejected score.
        value: f64,
    },

    /// The sentiment has no value.
    #[error("no sentiment value")]
    Absent,
}

/// A sentiment score that may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub struct Sentiment(Option<f64>);

impl Sentiment {
    /// The absent sentiment.
    pub const ABSENT: Self = Self(None);

    /// Creates a sentiment from an optional score.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::OutOfRange`] if the score is present and
    /// outside `[-1, 1]`.
    pub fn new(value: Option<f64>) -> Result<Self, SentimentError> {
        match value {
            Some(value) if !(MIN_SENTIMENT..=MAX_SENTIMENT).contains(&value) => {
                Err(SentimentError::OutOfRange { value })
            }
            _ => Ok(Self(value)),
        }
    }

    /// Creates a present sentiment.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::OutOfRange`] if the score is outside
    /// `[-1, 1]`.
    pub fn present(value: f64) -> Result<Self, SentimentError> {
        Self::new(Some(value))
    }

    /// Whether this sentiment carries a score.
    #[must_use]
    pub fn has_value(self) -> bool {
        self.0
            .is_some_and(|v| (MIN_SENTIMENT..=MAX_SENTIMENT).contains(&v))
    }

    /// Returns the score.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Absent`] if there is no score.
    pub fn value(self) -> Result<f64, SentimentError> {
        self.0.ok_or(SentimentError::Absent)
    }

    /// Returns the score as an [`Option`].
    #[must_use]
    pub const fn as_option(self) -> Option<f64> {
        self.0
    }

    /// Averages the present scores in `sentiments`.
    ///
    /// Absent entries are skipped. Returns [`Sentiment::ABSENT`] when no
    /// entry has a score.
    #[must_use]
    pub fn average<I>(sentiments: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let (sum, count) = sentiments
            .into_iter()
            .filter_map(Self::as_option)
            .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));

        if count == 0 {
            return Self::ABSENT;
        }

        // The mean of in-range scores is in range; clamp absorbs rounding.
        Self(Some(
            (sum / f64::from(count)).clamp(MIN_SENTIMENT, MAX_SENTIMENT),
        ))
    }
}

impl TryFrom<Option<f64>> for Sentiment {
    type Error = SentimentError;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sentiment> for Option<f64> {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.0
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:+}"),
            None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_and_absent() {
        let s = Sentiment::present(0.2).unwrap();
        let t = Sentiment::new(None).unwrap();
        assert!(s.has_value());
        assert!(!t.has_value());
        assert!((s.value().unwrap() - 0.2).abs() < f64::EPSILON);
        assert_eq!(t.value(), Err(SentimentError::Absent));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Sentiment::present(1.0).unwrap().has_value());
        assert!(Sentiment::present(-1.0).unwrap().has_value());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Sentiment::present(1.5),
            Err(SentimentError::OutOfRange { value: 1.5 })
        );
        assert!(Sentiment::present(-2.0).is_err());
        assert!(Sentiment::present(f64::NAN).is_err());
        assert!(Sentiment::present(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_is_a_value_not_absence() {
        let neutral = Sentiment::present(0.0).unwrap();
        assert!(neutral.has_value());
        assert_ne!(neutral, Sentiment::ABSENT);
    }

    #[test]
    fn average_skips_absent() {
        let avg = Sentiment::average([
            Sentiment::present(0.5).unwrap(),
            Sentiment::ABSENT,
            Sentiment::present(-0.25).unwrap(),
        ]);
        assert!((avg.value().unwrap() - 0.125).abs() < f64::EPSILON);
    }

    #[test]
    fn average_of_nothing_is_absent() {
        assert_eq!(Sentiment::average(std::iter::empty()), Sentiment::ABSENT);
        assert_eq!(
            Sentiment::average([Sentiment::ABSENT, Sentiment::ABSENT]),
            Sentiment::ABSENT
        );
    }

    #[test]
    fn average_of_neutral_is_zero() {
        let avg = Sentiment::average([Sentiment::present(0.0).unwrap()]);
        assert_eq!(avg.as_option(), Some(0.0));
    }

    #[test]
    fn serde_validates_range() {
        let s: Sentiment = serde_json::from_str("0.5").unwrap();
        assert_eq!(s.as_option(), Some(0.5));
        let absent: Sentiment = serde_json::from_str("null").unwrap();
        assert_eq!(absent, Sentiment::ABSENT);
        assert!(serde_json::from_str::<Sentiment>("3.0").is_err());
    }

    #[test]
    fn display_is_signed() {
        assert_eq!(Sentiment::present(0.875).unwrap().to_string(), "+0.875");
        assert_eq!(Sentiment::present(-0.625).unwrap().to_string(), "-0.625");
        assert_eq!(Sentiment::ABSENT.to_string(), "none");
    }
}
