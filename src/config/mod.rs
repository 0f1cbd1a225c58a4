//! Demo configuration: placeholder text, simulated loader, UI and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoaderConfig, LoggingConfig, Outcome, UiConfig};
