//! # hush-cli
//!
//! Command-line interface for distributing Alertmanager silences.
//!
//! Provides the `hush` binary:
//! - `hush silence add` — create a silence, optionally fanned out across
//!   many tenants via an HTTP header
//!
//! # Architecture
//!
//! The CLI builds one immutable silence request with `hush-silence` and
//! submits it through [`client::AlertmanagerClient`], which speaks the
//! Alertmanager v2 silences API over HTTP:
//!
//! ```text
//! ┌──────────┐   POST /api/v2/silences   ┌────────────────┐
//! │   hush   │──────────────────────────►│  Alertmanager  │
//! └──────────┘   (one per tenant)        └────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;

pub use cli::{AddArgs, Cli, Commands, SilenceCommands};
pub use client::AlertmanagerClient;
pub use error::CliError;
