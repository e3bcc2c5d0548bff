//! Configuration types for the WowBank demo
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types with serde defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (`<config_dir>/wowbank/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub limits: LimitsSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting the demo
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

/// Timer durations, in milliseconds.
///
/// Defaults match the demo's animation pacing; they are
/// configurable mostly so tests and demos can shorten them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Delay before the welcome toast, letting the dashboard settle first
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,

    /// Simulated transfer processing latency
    #[serde(default = "default_transfer_processing_ms")]
    pub transfer_processing_ms: u64,

    /// Toast slide-in duration
    #[serde(default = "default_toast_enter_ms")]
    pub toast_enter_ms: u64,

    /// Toast slide-out duration before detach
    #[serde(default = "default_toast_exit_ms")]
    pub toast_exit_ms: u64,

    /// Time a toast stays up before auto-dismissing
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            welcome_delay_ms: default_welcome_delay_ms(),
            transfer_processing_ms: default_transfer_processing_ms(),
            toast_enter_ms: default_toast_enter_ms(),
            toast_exit_ms: default_toast_exit_ms(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl TimingSettings {
    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn transfer_processing(&self) -> Duration {
        Duration::from_millis(self.transfer_processing_ms)
    }

    pub fn toast_enter(&self) -> Duration {
        Duration::from_millis(self.toast_enter_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Display and advisory limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsSettings {
    /// Soft advisory threshold for large transfers (user hint only)
    #[serde(default = "default_large_transfer_threshold")]
    pub large_transfer_threshold: f64,

    /// Cap on the recent-activity feed length
    #[serde(default = "default_max_recent_transactions")]
    pub max_recent_transactions: usize,
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            large_transfer_threshold: default_large_transfer_threshold(),
            max_recent_transactions: default_max_recent_transactions(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_welcome_delay_ms() -> u64 {
    500
}

fn default_transfer_processing_ms() -> u64 {
    2000
}

fn default_toast_enter_ms() -> u64 {
    100
}

fn default_toast_exit_ms() -> u64 {
    300
}

fn default_toast_duration_ms() -> u64 {
    4000
}

fn default_large_transfer_threshold() -> f64 {
    50_000.0
}

fn default_max_recent_transactions() -> usize {
    5
}
