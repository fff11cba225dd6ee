//! Error types for the hush-silence crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or dispatching a silence.
#[derive(Debug, Error)]
pub enum SilenceError {
    /// A matcher expression could not be parsed.
    #[error("invalid matcher expression: {expression}")]
    MatcherSyntax {
        /// The expression that failed to parse.
        expression: String,
    },

    /// No matchers were supplied.
    #[error("no matchers specified")]
    NoMatchers,

    /// A duration string could not be parsed, or was zero where forbidden.
    #[error("invalid duration: {reason}")]
    InvalidDuration {
        /// The reason the duration is invalid.
        reason: String,
    },

    /// The requested duration exceeds the configured maximum.
    #[error("silence duration '{duration}' couldn't be greater than '{max}'")]
    DurationExceedsMax {
        /// The requested duration, as given.
        duration: String,
        /// The configured maximum, as given.
        max: String,
    },

    /// The silence would start after it ends.
    #[error("silence cannot start after it ends")]
    InvalidWindow,

    /// A start or end timestamp could not be parsed as RFC3339.
    #[error("invalid {field} timestamp: {reason}")]
    InvalidTimestamp {
        /// Which input field carried the timestamp.
        field: &'static str,
        /// The reason the timestamp is invalid.
        reason: String,
    },

    /// A comment is required but none was given.
    #[error("comment required by config")]
    CommentRequired,

    /// Both a single tenant and a tenant file were supplied.
    #[error("tenant and tenant file are mutually exclusive")]
    ConflictingTenantConfig,

    /// The tenant file could not be read.
    #[error("unable to read tenant file '{}': {source}", .path.display())]
    TenantFileRead {
        /// Path to the tenant file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing an outcome line to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A submission was rejected by the server or failed in transit.
    #[error("{}", submission_message(.tenant.as_deref(), .reason))]
    Submission {
        /// The tenant the submission was for, if any.
        tenant: Option<String>,
        /// The reason the submission failed.
        reason: String,
    },
}

fn submission_message(tenant: Option<&str>, reason: &str) -> String {
    match tenant {
        Some(t) => format!("unable to add silence for '{t}' tenant: {reason}"),
        None => format!("unable to add silence: {reason}"),
    }
}

/// Result type for silence operations.
pub type Result<T> = std::result::Result<T, SilenceError>;
