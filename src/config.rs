//! Command line options and the display settings derived from them

use crate::adapter::constants::DEFAULT_LOCALE;
use crate::adapter::DisplayZone;
use crate::ui::theme::{MagnitudePalette, MAGNITUDE_PALETTE};
use chrono::{FixedOffset, Locale, Offset, Utc};
use clap::Parser;
use thiserror::Error;

/// Errors raised while reading the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid UTC offset '{0}', expected Z, +HH or +HH:MM")]
    InvalidUtcOffset(String),
}

/// Browse recent earthquakes, colored by magnitude.
#[derive(Debug, Parser)]
#[command(name = "quakereport", version, about)]
pub struct Cli {
    /// Time zone for dates and times, e.g. +05:30 (defaults to local time)
    #[arg(long, value_parser = parse_utc_offset, allow_hyphen_values = true, conflicts_with = "utc")]
    pub utc_offset: Option<FixedOffset>,

    /// Show dates and times in UTC
    #[arg(long)]
    pub utc: bool,
}

impl Cli {
    /// Resolve the options into display settings.
    pub fn display_config(&self) -> DisplayConfig {
        let time_zone = if self.utc {
            DisplayZone::Fixed(Utc.fix())
        } else {
            self.utc_offset.map_or(DisplayZone::Local, DisplayZone::Fixed)
        };
        DisplayConfig {
            time_zone,
            ..DisplayConfig::default()
        }
    }
}

/// Settings every row is formatted with.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub palette: MagnitudePalette,
    pub locale: Locale,
    pub time_zone: DisplayZone,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            palette: MAGNITUDE_PALETTE,
            locale: DEFAULT_LOCALE,
            time_zone: DisplayZone::Local,
        }
    }
}

/// Parse `Z`, `+HH`, `-HH`, `+HH:MM` or `-HH:MM`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidUtcOffset(s.to_string());

    if s == "Z" || s == "z" {
        return Ok(Utc.fix());
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None => (rest, "0"),
    };
    let is_field = |field: &str| {
        (1..=2).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_field(hours) || !is_field(minutes) {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("Z"), Ok(FixedOffset::east_opt(0).unwrap()));
        assert_eq!(
            parse_utc_offset("+05:30"),
            Ok(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
        );
        assert_eq!(
            parse_utc_offset("-08"),
            Ok(FixedOffset::west_opt(8 * 3600).unwrap())
        );
    }

    #[test]
    fn test_parse_utc_offset_rejects_garbage() {
        for input in [
            "", "+", "05:30", "+24:00", "+01:60", "+1:2:3", "-ab", "+123", "--5", "+-5", "+05:-1",
            "+ 5",
        ] {
            assert_eq!(
                parse_utc_offset(input),
                Err(ConfigError::InvalidUtcOffset(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_cli_resolves_time_zone() {
        let cli = Cli::try_parse_from(["quakereport", "--utc-offset", "-03:00"]).unwrap();
        assert_eq!(
            cli.display_config().time_zone,
            DisplayZone::Fixed(FixedOffset::west_opt(3 * 3600).unwrap())
        );

        let cli = Cli::try_parse_from(["quakereport", "--utc"]).unwrap();
        assert_eq!(
            cli.display_config().time_zone,
            DisplayZone::Fixed(FixedOffset::east_opt(0).unwrap())
        );

        let cli = Cli::try_parse_from(["quakereport"]).unwrap();
        assert_eq!(cli.display_config().time_zone, DisplayZone::Local);
    }

    #[test]
    fn test_cli_rejects_conflicting_time_zones() {
        assert!(Cli::try_parse_from(["quakereport", "--utc", "--utc-offset", "+01"]).is_err());
    }
}
