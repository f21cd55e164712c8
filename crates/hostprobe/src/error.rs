//! Error types for host classification and encoding helpers.

use std::path::PathBuf;

/// Result type alias for hostprobe operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors that can occur while decoding input or resolving hosts.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// Malformed input text (hex digits, address literals).
    #[error("Invalid input '{input}': {message}")]
    Format { input: String, message: String },

    /// Name resolution failed or produced no usable address.
    #[error("Failed to resolve '{host}': {message}")]
    Resolution { host: String, message: String },

    /// Invalid resolver or identifier configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("Failed to read '{path}': {message}")]
    Io { path: PathBuf, message: String },
}

impl HostError {
    /// Create a format error.
    pub fn format(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a resolution error.
    pub fn resolution(host: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolution {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Whether this error came from a failed lookup.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// Whether this error came from malformed input.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

impl From<toml::de::Error> for HostError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for HostError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}
