//! Parsing for the tab-separated tweet dump.
//!
//! Each line looks like:
//!
//! ```text
//! [38.54, -121.74]\t6\t2011-08-29 23:55:05\ti love my job
//! ```
//!
//! The second field is unused.

use chrono::NaiveDateTime;
use trends_geography_models::Position;
use trends_source_models::Tweet;

/// Timestamp format used in the tweet dump.
pub const TWEET_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a tweet dump timestamp.
#[must_use]
pub fn parse_tweet_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TWEET_TIME_FORMAT).ok()
}

/// Parses a `[lat, lon]` location field. Both coordinates must be finite.
#[must_use]
pub fn parse_position(s: &str) -> Option<Position> {
    let inner = s.trim().strip_prefix('[')?.strip_suffix(']')?;
    let (lat, lon) = inner.split_once(',')?;
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = lon.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some(Position::new(latitude, longitude))
}

/// Parses one line of the tweet dump. Text is lowercased.
///
/// Returns `None` for lines with missing fields or unparseable location or
/// time.
#[must_use]
pub fn parse_tweet_line(line: &str) -> Option<Tweet> {
    let mut fields = line.trim_end_matches(['\r', '\n']).splitn(4, '\t');

    let position = parse_position(fields.next()?)?;
    fields.next()?;
    let time = parse_tweet_time(fields.next()?)?;
    let text = fields.next()?.trim().to_lowercase();

    Some(Tweet {
        text,
        time: Some(time),
        position,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Timelike as _;

    use super::*;

    #[test]
    fn parses_full_line() {
        let tweet =
            parse_tweet_line("[38.54, -121.74]\t6\t2011-08-29 23:55:05\tI love my JOB\n").unwrap();
        assert_eq!(tweet.text, "i love my job");
        assert_eq!(tweet.position, Position::new(38.54, -121.74));
        let time = tweet.time.unwrap();
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 55);
    }

    #[test]
    fn keeps_tabs_inside_text() {
        let tweet = parse_tweet_line("[1, 2]\t_\t2011-08-29 01:00:00\tone\ttwo").unwrap();
        assert_eq!(tweet.text, "one\ttwo");
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse_tweet_line("[1, 2]\t_\t2011-08-29 01:00:00").is_none());
        assert!(parse_tweet_line("").is_none());
    }

    #[test]
    fn rejects_bad_location() {
        assert!(parse_tweet_line("38.5, -121.7\t_\t2011-08-29 01:00:00\thi").is_none());
        assert!(parse_tweet_line("[north, west]\t_\t2011-08-29 01:00:00\thi").is_none());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert_eq!(parse_position("[nan, 1]"), None);
        assert_eq!(parse_position("[1, inf]"), None);
        assert_eq!(parse_position("[-inf, NaN]"), None);
        assert!(parse_tweet_line("[nan, inf]\t_\t2011-08-29 01:00:00\tmy job").is_none());
    }

    #[test]
    fn rejects_bad_time() {
        assert!(parse_tweet_line("[1, 2]\t_\tyesterday\thi").is_none());
    }

    #[test]
    fn parses_negative_and_integer_coordinates() {
        assert_eq!(
            parse_position(" [41, -74] "),
            Some(Position::new(41.0, -74.0))
        );
    }
}
