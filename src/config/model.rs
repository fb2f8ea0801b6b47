//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub rewards: RewardsConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("bonus range is empty: bonus_min ({min}) is greater than bonus_max ({max})")]
    EmptyBonusRange { min: i64, max: i64 },
    #[error("toast duration must be greater than zero")]
    ZeroToastDuration,
    #[error("invalid date format: {0:?}")]
    InvalidDateFormat(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rewards.bonus_min > self.rewards.bonus_max {
            return Err(ConfigError::EmptyBonusRange {
                min: self.rewards.bonus_min,
                max: self.rewards.bonus_max,
            });
        }
        if self.toast.duration_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        if StrftimeItems::new(&self.ui.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(self.ui.date_format.clone()));
        }
        Ok(())
    }
}

/// Initial values of the user profile. Nothing is written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_coins")]
    pub coins: i64,
    #[serde(default = "default_monthly_gain")]
    pub monthly_gain: i64,
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: i64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            coins: default_coins(),
            monthly_gain: default_monthly_gain(),
            monthly_goal: default_monthly_goal(),
        }
    }
}

/// Bonus credited per simulated drop-off, drawn uniformly from
/// `bonus_min..=bonus_max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    #[serde(default = "default_bonus_min")]
    pub bonus_min: i64,
    #[serde(default = "default_bonus_max")]
    pub bonus_max: i64,
}

impl RewardsConfig {
    /// Never empty, even for a config that skipped validation.
    pub fn bonus_range(&self) -> RangeInclusive<i64> {
        self.bonus_min.min(self.bonus_max)..=self.bonus_min.max(self.bonus_max)
    }
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            bonus_min: default_bonus_min(),
            bonus_max: default_bonus_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u64,
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
        }
    }
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_start_screen")]
    pub start_screen: String,
    /// `chrono` format used for history entry dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_screen: default_start_screen(),
            date_format: default_date_format(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Diagnostic log settings. Logs go to a file since the terminal belongs to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_user_name() -> String {
    "Eco Lover".to_string()
}
fn default_coins() -> i64 {
    2750
}
fn default_monthly_gain() -> i64 {
    350
}
fn default_monthly_goal() -> i64 {
    5000
}
fn default_bonus_min() -> i64 {
    120
}
fn default_bonus_max() -> i64 {
    420
}
fn default_toast_duration_ms() -> u64 {
    3200
}
fn default_start_screen() -> String {
    "welcome".to_string()
}
fn default_date_format() -> String {
    "%d/%m".to_string()
}
fn default_tick_ms() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/ecocoins/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
