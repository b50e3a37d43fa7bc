//! Command-line interface parsing for the trip viewer
//!
//! This module handles parsing of CLI arguments using clap and turns them
//! into a validated `StartupConfig`.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::currency::{parse_rate, RateError};
use crate::data::all_days;
use crate::navigator::View;
use crate::store::RateStore;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The exchange rate given with --rate is not usable
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(#[from] RateError),
}

/// Trip viewer - itinerary, accommodations and currency converter
#[derive(Parser, Debug)]
#[command(name = "tripview")]
#[command(about = "Trip itinerary, accommodations and currency converter")]
#[command(version)]
pub struct Cli {
    /// View to open on launch: itinerary or info
    #[arg(long, value_name = "VIEW")]
    pub view: Option<String>,

    /// Day to show on launch, e.g. 3 or day3
    #[arg(long, value_name = "DAY")]
    pub day: Option<String>,

    /// Set and remember a custom exchange rate (JPY per TWD)
    #[arg(long, value_name = "RATE", allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Forget the remembered exchange rate and use the default
    #[arg(long)]
    pub reset_rate: bool,

    /// Print the TWD equivalent of a JPY amount and exit
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub convert: Option<String>,

    /// Directory for the remembered rate and the log file
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Identifier of the view selected at the end of bootstrap
    pub initial_view: String,
    /// Identifier of the day shown on launch
    pub initial_day: String,
    /// Rate to apply after the persisted one is loaded
    pub rate_override: Option<f64>,
    /// Clear the persisted rate before loading
    pub reset_rate: bool,
    /// Amount to convert in one-shot mode
    pub convert_amount: Option<String>,
    /// Overrides the platform directories
    pub data_dir: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_view: View::ALL[0].id().to_string(),
            initial_day: all_days()
                .first()
                .map(|d| d.id.to_string())
                .unwrap_or_default(),
            rate_override: None,
            reset_rate: false,
            convert_amount: None,
            data_dir: None,
        }
    }
}

/// Turns a --view argument into a view identifier
///
/// Short names get the `-view` suffix; anything else is passed through and
/// resolved (or ignored) by the navigator.
pub fn view_id_arg(s: &str) -> String {
    if s.ends_with("-view") {
        s.to_string()
    } else {
        format!("{}-view", s)
    }
}

/// Turns a --day argument into a day identifier (`3` becomes `day3`)
pub fn day_id_arg(s: &str) -> String {
    match s.parse::<usize>() {
        Ok(n) => format!("day{}", n),
        Err(_) => s.to_string(),
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the exchange rate is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let defaults = Self::default();
        let rate_override = cli.rate.as_deref().map(parse_rate).transpose()?;

        Ok(Self {
            initial_view: cli
                .view
                .as_deref()
                .map(view_id_arg)
                .unwrap_or(defaults.initial_view),
            initial_day: cli
                .day
                .as_deref()
                .map(day_id_arg)
                .unwrap_or(defaults.initial_day),
            rate_override,
            reset_rate: cli.reset_rate,
            convert_amount: cli.convert.clone(),
            data_dir: cli.data_dir.clone(),
        })
    }

    /// Rate store honouring --data-dir
    pub fn rate_store(&self) -> Option<RateStore> {
        match &self.data_dir {
            Some(dir) => Some(RateStore::with_dir(dir.clone())),
            None => RateStore::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id_arg_adds_suffix() {
        assert_eq!(view_id_arg("info"), "info-view");
        assert_eq!(view_id_arg("itinerary"), "itinerary-view");
        assert_eq!(view_id_arg("info-view"), "info-view");
    }

    #[test]
    fn test_day_id_arg_accepts_numbers_and_ids() {
        assert_eq!(day_id_arg("3"), "day3");
        assert_eq!(day_id_arg("day2"), "day2");
        assert_eq!(day_id_arg("tomorrow"), "tomorrow");
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.initial_view, "itinerary-view");
        assert_eq!(config.initial_day, "day1");
        assert!(config.rate_override.is_none());
        assert!(!config.reset_rate);
        assert!(config.convert_amount.is_none());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["tripview"]);
        assert!(cli.view.is_none());
        assert!(cli.day.is_none());
        assert!(cli.rate.is_none());
        assert!(!cli.reset_rate);
    }

    #[test]
    fn test_startup_config_from_cli_no_args_matches_default() {
        let cli = Cli::parse_from(["tripview"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_view, "itinerary-view");
        assert_eq!(config.initial_day, "day1");
    }

    #[test]
    fn test_startup_config_from_cli_view_and_day() {
        let cli = Cli::parse_from(["tripview", "--view", "info", "--day", "4"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_view, "info-view");
        assert_eq!(config.initial_day, "day4");
    }

    #[test]
    fn test_startup_config_from_cli_valid_rate() {
        let cli = Cli::parse_from(["tripview", "--rate", "4.75"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.rate_override, Some(4.75));
    }

    #[test]
    fn test_startup_config_from_cli_negative_rate_is_error() {
        let cli = Cli::parse_from(["tripview", "--rate", "-1"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid exchange rate"));
    }

    #[test]
    fn test_startup_config_from_cli_non_numeric_rate_is_error() {
        let cli = Cli::parse_from(["tripview", "--rate", "cheap"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("cheap"));
    }

    #[test]
    fn test_startup_config_from_cli_convert_and_data_dir() {
        let cli = Cli::parse_from(["tripview", "--convert", "900", "--data-dir", "/tmp/x"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.convert_amount.as_deref(), Some("900"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_rate_store_uses_data_dir() {
        let config = StartupConfig {
            data_dir: Some(PathBuf::from("/tmp/tripview-test")),
            ..StartupConfig::default()
        };
        let store = config.rate_store().expect("explicit dir always yields a store");
        assert_eq!(store.dir(), std::path::Path::new("/tmp/tripview-test"));
    }
}
