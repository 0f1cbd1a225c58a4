use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::binding::Message;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Shown instead of empty content. An empty message disables it.
    #[serde(default = "default_placeholder")]
    pub placeholder: Message,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated content source used by the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Latency of each load attempt in milliseconds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Outcomes cycled through, one per attempt.
    #[serde(default = "default_outcomes")]
    pub outcomes: Vec<Outcome>,
}

/// Result of one simulated load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A non-empty list of numbers.
    Numbers,
    /// A successful but empty list.
    Empty,
    /// A failure.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file. Without one, nothing is logged.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_placeholder() -> Message {
    Message::new("No numbers loaded.").with_icon("□")
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_outcomes() -> Vec<Outcome> {
    vec![Outcome::Numbers, Outcome::Empty, Outcome::Numbers, Outcome::Error]
}

fn default_tick_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            loader: LoaderConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            outcomes: default_outcomes(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
