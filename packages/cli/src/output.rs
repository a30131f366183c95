//! Rendering report documents as plain text or JSON.

use std::io::{self, Write};

use serde::Serialize;
use strum_macros::{Display, EnumString};
use trends_analytics_models::{
    CenteredMap, HourlySentimentMap, SentimentMap, TalkativeRegion, WordScore,
};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A report that can also be written as plain text.
pub trait TextReport {
    /// Writes the human-readable form of the report.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes `report` to `out` in the requested format.
///
/// # Errors
///
/// Returns any I/O or serialization error.
pub fn render<T>(out: &mut dyn Write, report: &T, format: OutputFormat) -> io::Result<()>
where
    T: Serialize + TextReport + ?Sized,
{
    match format {
        OutputFormat::Text => report.write_text(out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
    }
}

impl TextReport for [WordScore] {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let width = self.iter().map(|entry| entry.word.len()).max().unwrap_or(0);
        for entry in self {
            writeln!(out, "{:>width$}: {:+}", entry.word, entry.score)?;
        }
        Ok(())
    }
}

impl TextReport for CenteredMap {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Regions closest to {}:", self.center)?;
        for (rank, region) in self.regions.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {:<4} {:<22} ({:.3}, {:.3}) {:>8.1} mi",
                rank + 1,
                region.name,
                region.state_name.as_deref().unwrap_or(""),
                region.center.latitude,
                region.center.longitude,
                region.distance_mi,
            )?;
        }
        Ok(())
    }
}

impl TextReport for SentimentMap {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "\"{}\": {} tweets, {} with sentiment",
            self.term,
            self.tweet_count,
            self.dots.len()
        )?;
        for (name, average) in &self.regions {
            writeln!(out, "  {name:<4} {average:+.3}")?;
        }
        Ok(())
    }
}

impl TextReport for HourlySentimentMap {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\"{}\" by hour of day:", self.term)?;
        for hour in &self.hours {
            writeln!(out, "{} ({} tweets)", hour.label, hour.tweet_count)?;
            for (name, average) in &hour.regions {
                writeln!(out, "  {name:<4} {average:+.3}")?;
            }
        }
        Ok(())
    }
}

impl TextReport for TalkativeRegion {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.region {
            Some(region) => writeln!(
                out,
                "Most talkative region for \"{}\": {region} ({} tweets)",
                self.term, self.tweet_count
            ),
            None => writeln!(out, "No region has tweets mentioning \"{}\"", self.term),
        }
    }
}
