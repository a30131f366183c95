#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the tweet trends tools.
//!
//! Scores words, ranks regions by distance, and maps average tweet
//! sentiment by region and hour of day for a search term. Data file
//! locations come from `trends.toml` (see [`trends_config`]).
//!
//! Uses `indicatif-log-bridge` (via [`trends_cli_utils::init_logger`]) so
//! that log lines and the tweet scanning spinner never fight for the
//! terminal.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trends_config::TrendsConfig;

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "trends", about = "Tweet sentiment trends by region")]
struct Cli {
    /// Path to a `trends.toml` config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (`text` or `json`)
    #[arg(long, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sentiment of each scored word in some text
    Sentiment {
        /// Text to score
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List the regions closest to a region's center
    Centered {
        /// Reference region (defaults to the configured center region)
        #[arg(long)]
        region: Option<String>,
        /// Number of regions to list
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Average sentiment by region for tweets mentioning a term
    Map {
        /// Search term (defaults to the configured term)
        term: Vec<String>,
    },
    /// Average sentiment by region for each hour of the day
    ByHour {
        /// Search term (defaults to the configured term)
        term: Vec<String>,
    },
    /// Find the region with the most tweets mentioning a term
    Talkative {
        /// Search term
        #[arg(required = true)]
        term: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = trends_cli_utils::init_logger();
    let cli = Cli::parse();

    let config = TrendsConfig::load_or_default(cli.config.as_deref())?;
    log::debug!("Using data directory {}", config.data.dir.display());

    let ctx = Context {
        config,
        multi,
        format: cli.format,
    };

    match &cli.command {
        Commands::Sentiment { text } => commands::sentiment(&ctx, text)?,
        Commands::Centered { region, count } => {
            commands::centered(&ctx, region.as_deref(), *count)?;
        }
        Commands::Map { term } => commands::map(&ctx, term)?,
        Commands::ByHour { term } => commands::by_hour(&ctx, term)?,
        Commands::Talkative { term } => commands::talkative(&ctx, term)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::parse_from(["trends", "map", "my", "job", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Map { term } => assert_eq!(term, ["my", "job"]),
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn centered_accepts_short_count() {
        let cli = Cli::parse_from(["trends", "centered", "--region", "CA", "-n", "5"]);
        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Commands::Centered { region, count } => {
                assert_eq!(region.as_deref(), Some("CA"));
                assert_eq!(count, Some(5));
            }
            _ => panic!("expected centered"),
        }
    }

    #[test]
    fn talkative_requires_a_term() {
        assert!(Cli::try_parse_from(["trends", "talkative"]).is_err());
    }
}
