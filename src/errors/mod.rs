//! Error handling utilities for the soulscript application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The local guidance engine never produces errors. Everything here belongs to
//! the application layer around it: configuration, the history store, and the
//! remote generative-model collaborator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when loading or saving the reflection history.
///
/// # Examples
///
/// ```
/// use soulscript::errors::StoreError;
/// use std::path::PathBuf;
///
/// let error = StoreError::Busy {
///     path: PathBuf::from("/data/.reflections.lock"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another process holds the history lock.
    #[error("Reflection history is in use by another soulscript process: {path}. Please wait for it to finish and try again.")]
    Busy {
        /// The path of the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock on reflection history {path}: {source}. Please check file permissions and ensure the data directory is accessible.")]
    LockFailed {
        /// The path of the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The history file exists but does not contain valid history JSON.
    #[error("Reflection history at {path} is corrupt: {source}. The file was left untouched; move it aside to start a fresh history.")]
    Corrupt {
        /// The path of the history file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the history for writing failed.
    #[error("Failed to serialize reflection history: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Represents failures of the remote generative-model collaborator.
///
/// Each variant maps to a distinct user-visible message. None of them is fatal
/// to a user command: operations substitute the local guidance engine.
///
/// # Examples
///
/// ```
/// use soulscript::errors::AIError;
///
/// let error = AIError::QuotaExceeded;
/// assert!(format!("{}", error).contains("quota exceeded"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// No API key is configured.
    #[error("Gemini API key not configured. Please set GEMINI_API_KEY in your environment.")]
    NotConfigured,

    /// The API rejected the configured key.
    #[error("Invalid API key. Please check your Gemini API key configuration.")]
    InvalidApiKey,

    /// The API refused the request because of usage limits.
    #[error("API quota exceeded. Please check your Gemini API usage limits, or try again later.")]
    QuotaExceeded,

    /// The API could not be reached.
    #[error("Gemini API unreachable: {0}. Please check your network connection.")]
    Unreachable(#[source] reqwest::Error),

    /// The API answered with something other than a usable generation.
    #[error("Invalid response from Gemini: {0}")]
    InvalidResponse(String),
}

/// Represents a model response that does not match the expected JSON shape.
///
/// # Examples
///
/// ```
/// use soulscript::errors::ParseError;
///
/// let error = ParseError::MissingField("verse");
/// assert!(format!("{}", error).contains("verse"));
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text contains no JSON object.
    #[error("No JSON object found in model response")]
    NoJson,

    /// The JSON object does not deserialize into the expected shape.
    #[error("Model response has an unexpected shape: {0}")]
    Malformed(#[source] serde_json::Error),

    /// A required field is present but empty.
    #[error("Model response field '{0}' is empty")]
    MissingField(&'static str),

    /// A parsed answer was of another kind than the call site asked for.
    #[error("Expected a {expected} response from the model, got a {found} response")]
    WrongKind {
        /// The kind the call site asked for
        expected: &'static str,
        /// The kind that was parsed
        found: &'static str,
    },
}

/// Represents all possible errors that can occur in the soulscript application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use soulscript::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use soulscript::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unusable user input (e.g. an empty reflection).
    #[error("Input error: {0}")]
    Input(String),

    /// Errors related to the reflection history store.
    #[error("History error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to the remote Gemini collaborator.
    #[error("AI error: {0}")]
    AI(#[from] AIError),

    /// Errors parsing a remote model response.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use soulscript::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Input("Nothing to reflect on".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
