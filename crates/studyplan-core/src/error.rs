//! Core error types for studyplan-core.
//!
//! Every error carries a human-readable message. [`CoreError::kind`] maps it
//! onto the coarse classification callers use when reporting a rejected
//! request.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The preferences cannot produce any session
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Malformed request data
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model reply handling errors
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something that can never succeed as-is.
    BadRequest,
    /// Anything else.
    Internal,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Plan(_) | CoreError::Validation(_) => ErrorKind::BadRequest,
            _ => ErrorKind::Internal,
        }
    }
}

/// Packing errors raised before any session is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Session length is longer than available peak-hour window.")]
    SessionExceedsWindow {
        session_minutes: u32,
        longest_window_minutes: u32,
    },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required collection is empty
    #[error("At least one {item} is required")]
    Empty { item: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No usable data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Errors raised while reading a text-generation model's reply.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Reply was not the expected schedule JSON
    #[error("Failed to parse schedule data. AI response was not valid JSON: {message}")]
    InvalidReply { message: String, excerpt: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
