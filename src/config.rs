//! Command-line configuration

use std::path::PathBuf;
use chrono::{Local, NaiveTime};
use clap::Parser;

use crate::model::HourFormat;

/// Terminal alarm clock: pick a time and the songs to wake up to
#[derive(Parser, Debug)]
#[command(name = "alarm-rs")]
#[command(version)]
pub struct Args {
    /// Start in 24-hour display mode
    #[arg(long = "24-hour")]
    pub twenty_four_hour: bool,

    /// Initial alarm time as HH:MM (defaults to the current local time)
    #[arg(short, long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// Directory for log files
    #[arg(long, default_value = ".logs")]
    pub log_dir: PathBuf,
}

impl Args {
    pub fn hour_format(&self) -> HourFormat {
        HourFormat::from(self.twenty_four_hour)
    }

    pub fn initial_time(&self) -> NaiveTime {
        self.time.unwrap_or_else(|| Local::now().time())
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| format!("expected HH:MM ({})", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["alarm-rs"]).unwrap();
        assert!(!args.twenty_four_hour);
        assert_eq!(args.hour_format(), HourFormat::TwelveHour);
        assert!(args.time.is_none());
        assert_eq!(args.log_dir, PathBuf::from(".logs"));
    }

    #[test]
    fn explicit_time_and_format() {
        let args = Args::try_parse_from(["alarm-rs", "--24-hour", "--time", "06:30"]).unwrap();
        assert_eq!(args.hour_format(), HourFormat::TwentyFourHour);
        assert_eq!(args.initial_time(), NaiveTime::from_hms_opt(6, 30, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(Args::try_parse_from(["alarm-rs", "--time", "25:00"]).is_err());
        assert!(Args::try_parse_from(["alarm-rs", "-t", "noon"]).is_err());
    }

    #[test]
    fn help_does_not_error() {
        let err = Args::try_parse_from(["alarm-rs", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
