//! CLI error types.

use thiserror::Error;

use hush_silence::SilenceError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// A silence could not be built or dispatched.
    #[error(transparent)]
    Silence(#[from] SilenceError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The whole-command deadline elapsed.
    #[error("command timed out after {0}")]
    Timeout(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
