//! Error types for the core crate.
//!
//! Layout and kerning measurement are total and never fail; only loading and
//! validating a [`LayoutConfig`](crate::LayoutConfig) can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a layout configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read layout config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for a layout config.
    #[error("failed to parse layout config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Character spacing must be finite and greater than zero.
    #[error("character spacing must be finite and > 0, got {0}")]
    InvalidSpacing(f32),

    /// An explicit radius must be finite and not negative.
    #[error("radius must be finite and >= 0, got {0}")]
    InvalidRadius(f32),

    /// The base angle must be a finite number of radians.
    #[error("base angle must be finite, got {0}")]
    NonFiniteAngle(f32),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
