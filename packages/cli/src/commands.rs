//! Subcommand implementations.
//!
//! Each command loads what it needs from the configured data files, runs
//! the pure aggregation functions and renders the resulting report.

use std::error::Error;

use trends_analytics::{group_by_center, hourly_sentiment_map, most_talkative_region, sentiment_map};
use trends_analytics_models::{CenteredMap, CenteredRegion, TalkativeRegion, WordScore};
use trends_cli_utils::{IndicatifProgress, MultiProgress};
use trends_config::TrendsConfig;
use trends_geography::{GeoError, load::load_regions, region_centers, regions_by_distance};
use trends_geography_models::RegionCenter;
use trends_geography_models::states::state_name;
use trends_sentiment::{SentimentLookup, WordSentiments, extract_words};
use trends_source::load_tweets;
use trends_source_models::Tweet;

use crate::output::{OutputFormat, TextReport, render};

/// Shared state for one CLI invocation.
pub struct Context {
    /// Loaded configuration.
    pub config: TrendsConfig,
    /// Progress bar container wired to the logger.
    pub multi: MultiProgress,
    /// Report format.
    pub format: OutputFormat,
}

impl Context {
    fn emit<T>(&self, report: &T) -> Result<(), Box<dyn Error>>
    where
        T: serde::Serialize + TextReport + ?Sized,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        render(&mut out, report, self.format)?;
        Ok(())
    }

    fn sentiments(&self) -> Result<WordSentiments, Box<dyn Error>> {
        Ok(WordSentiments::load(&self.config.data.sentiments_path())?)
    }

    fn region_centers(&self) -> Result<Vec<RegionCenter>, Box<dyn Error>> {
        let regions = load_regions(&self.config.data.regions_path())?;
        Ok(region_centers(&regions)?)
    }

    fn tweets(&self, term: &str) -> Result<Vec<Tweet>, Box<dyn Error>> {
        let progress = IndicatifProgress::lines_spinner(&self.multi, "Scanning tweets");
        Ok(load_tweets(
            &self.config.data.tweets_path(),
            term,
            progress.as_ref(),
        )?)
    }

    /// Joins positional words into a term, falling back to the configured
    /// default when none were given.
    fn term(&self, words: &[String]) -> String {
        if words.is_empty() {
            self.config.defaults.term.clone()
        } else {
            words.join(" ")
        }
    }
}

/// Prints the score of each scored word in `text`.
pub fn sentiment(ctx: &Context, text: &[String]) -> Result<(), Box<dyn Error>> {
    let lookup = ctx.sentiments()?;
    let scores = word_scores(&text.join(" "), &lookup);
    ctx.emit(scores.as_slice())
}

/// Lists the regions whose centers are closest to a reference region.
pub fn centered(
    ctx: &Context,
    region: Option<&str>,
    count: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let region = region.unwrap_or(&ctx.config.defaults.center_region);
    let count = count.unwrap_or(ctx.config.defaults.center_count);
    let centers = ctx.region_centers()?;
    let map = centered_map(region, &centers, count)?;
    ctx.emit(&map)
}

/// Prints per-region average sentiment for tweets mentioning a term.
pub fn map(ctx: &Context, term: &[String]) -> Result<(), Box<dyn Error>> {
    let term = ctx.term(term);
    let lookup = ctx.sentiments()?;
    let centers = ctx.region_centers()?;
    let tweets = ctx.tweets(&term)?;
    let map = sentiment_map(&term, &tweets, &centers, &lookup)?;
    ctx.emit(&map)
}

/// Prints per-hour, per-region average sentiment for a term.
pub fn by_hour(ctx: &Context, term: &[String]) -> Result<(), Box<dyn Error>> {
    let term = ctx.term(term);
    let lookup = ctx.sentiments()?;
    let centers = ctx.region_centers()?;
    let tweets = ctx.tweets(&term)?;
    let map = hourly_sentiment_map(&term, &tweets, &centers, &lookup)?;
    ctx.emit(&map)
}

/// Prints the region with the most tweets mentioning a term.
pub fn talkative(ctx: &Context, term: &[String]) -> Result<(), Box<dyn Error>> {
    let term = ctx.term(term);
    let centers = ctx.region_centers()?;
    let tweets = ctx.tweets(&term)?;
    let groups = group_by_center(&tweets, &centers)?;
    let winner = most_talkative_region(&groups);

    let report = TalkativeRegion {
        term,
        region: winner.map(|(name, _)| name.to_string()),
        tweet_count: winner.map_or(0, |(_, count)| count),
    };
    ctx.emit(&report)
}

/// Scores each word of `text`, skipping words without a sentiment.
fn word_scores<L: SentimentLookup + ?Sized>(text: &str, lookup: &L) -> Vec<WordScore> {
    extract_words(text)
        .into_iter()
        .filter_map(|word| {
            let score = lookup.word_sentiment(&word).as_option()?;
            Some(WordScore { word, score })
        })
        .collect()
}

/// Ranks region centers by distance from the named region's center.
/// The name is matched case-insensitively.
fn centered_map(
    region: &str,
    centers: &[RegionCenter],
    count: usize,
) -> Result<CenteredMap, GeoError> {
    let origin = centers
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(region.trim()))
        .ok_or_else(|| GeoError::UnknownRegion {
            name: region.to_string(),
        })?;

    let regions = regions_by_distance(origin.center, centers, count)
        .into_iter()
        .map(|(entry, distance_mi)| CenteredRegion {
            name: entry.name.clone(),
            state_name: state_name(&entry.name).map(ToString::to_string),
            center: entry.center,
            distance_mi,
        })
        .collect();

    Ok(CenteredMap {
        center: origin.name.clone(),
        regions,
    })
}

#[cfg(test)]
mod tests {
    use trends_geography_models::Position;
    use trends_sentiment_models::Sentiment;

    use super::*;

    fn centers() -> Vec<RegionCenter> {
        [
            ("CA", 37.25, -119.6),
            ("TX", 31.0, -99.0),
            ("OK", 35.5, -97.5),
            ("NY", 43.0, -75.5),
        ]
        .into_iter()
        .map(|(name, lat, lon)| RegionCenter {
            name: name.to_string(),
            center: Position::new(lat, lon),
        })
        .collect()
    }

    #[test]
    fn centered_map_starts_with_reference_region() {
        let map = centered_map("tx", &centers(), 3).unwrap();
        assert_eq!(map.center, "TX");
        let names: Vec<&str> = map.regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["TX", "OK", "CA"]);
        assert!(map.regions[0].distance_mi.abs() < 1e-9);
        assert_eq!(map.regions[0].state_name.as_deref(), Some("Texas"));
    }

    #[test]
    fn centered_map_rejects_unknown_region() {
        assert!(matches!(
            centered_map("ZZ", &centers(), 3),
            Err(GeoError::UnknownRegion { name }) if name == "ZZ"
        ));
    }

    #[test]
    fn word_scores_skip_unknown_words() {
        let lookup = |word: &str| match word {
            "love" => Sentiment::present(0.75).unwrap(),
            "job" => Sentiment::present(0.0).unwrap(),
            _ => Sentiment::ABSENT,
        };
        let scores = word_scores("I LOVE my job!", &lookup);
        assert_eq!(
            scores,
            vec![
                WordScore {
                    word: "love".to_string(),
                    score: 0.75,
                },
                WordScore {
                    word: "job".to_string(),
                    score: 0.0,
                },
            ]
        );
    }
}
