//! Configuration for graphql-usage.
//!
//! A project is configured by an optional file found by walking up from the
//! working directory (see [`CONFIG_FILES`]):
//!
//! ```yaml
//! include: ["src/**/*.{ts,tsx}"]
//! exclude: ["**/__generated__/**"]
//! lint:
//!   no-unused-operations: error
//! ```

mod config;
mod loader;

pub use config::ProjectConfig;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("unsupported config file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
