//! Error types for volley

use thiserror::Error;

use crate::config::ConfigError;

/// Crate-level error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A required dispatcher component was never supplied
    #[error("missing component: {0}")]
    MissingComponent(&'static str),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
