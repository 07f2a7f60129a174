//! Settings for the map generator tool.
//!
//! Settings persist as `config.ron` and unknown or missing fields fall back
//! to defaults, so old files keep loading. Command-line flags override the
//! file for a single run.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GenerationConfig, PreviewConfig, WorldConfig};
pub use error::ConfigError;
