//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Milliseconds between UI refresh ticks.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the session tape panel.
    #[serde(default = "default_true")]
    pub show_tape: bool,
    /// Oldest tape entries are dropped past this count.
    #[serde(default = "default_max_tape_entries")]
    pub max_tape_entries: usize,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_tape: true,
            max_tape_entries: default_max_tape_entries(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write diagnostic logs to disk. Off by default.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_max_tape_entries() -> usize {
    200
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_log_dir() -> String {
    "~/.local/share/crabcalc/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert!(config.ui.show_tape);
        assert_eq!(config.ui.max_tape_entries, 200);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[ui]\nshow_tape = false\n").unwrap();
        assert!(!config.ui.show_tape);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.max_tape_entries, config.ui.max_tape_entries);
        assert_eq!(back.logging.log_dir, config.logging.log_dir);
    }
}
