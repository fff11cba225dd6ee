//! Silence construction and multi-tenant dispatch for Alertmanager-compatible
//! APIs.
//!
//! `hush-silence` turns free-form command arguments into a validated silence
//! request and dispatches it once per tenant:
//!
//! - **Matcher parsing**: `alertname=foo`, `node=~bar.*`, with a bare first
//!   argument treated as an alertname shorthand
//! - **Window resolution**: absolute start/end instants from start, end,
//!   duration, and a configured maximum duration
//! - **Tenant dispatch**: none, one, or a file's worth of tenants, submitted
//!   sequentially with partial-failure tolerance in file mode
//!
//! The network edge is the [`SilenceSubmitter`] trait; this crate contains no
//! HTTP code of its own.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use hush_silence::{parse_matchers, SilenceRequest, SilenceWindow, WindowParams};
//!
//! let matchers = parse_matchers(&[
//!     "alertname=foo".to_string(),
//!     "node=bar".to_string(),
//! ]).unwrap();
//!
//! let window = SilenceWindow::resolve(
//!     &WindowParams {
//!         start: None,
//!         end: None,
//!         duration: "1h",
//!         max_duration: "12h",
//!         require_comment: true,
//!         comment: "rolling restart",
//!     },
//!     Utc::now(),
//! ).unwrap();
//!
//! let request = SilenceRequest::new(matchers, window, "admin", "rolling restart");
//! assert_eq!(request.matchers.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dispatch;
pub mod duration;
pub mod error;
pub mod matcher;
pub mod types;
pub mod window;

// Re-export main types at crate root
pub use dispatch::{read_tenant_file, SilenceSubmitter, TenantDispatcher, TenantSelection};
pub use duration::parse_duration;
pub use error::{Result, SilenceError};
pub use matcher::{parse_matcher, parse_matchers};
pub use types::{MatchOperator, Matcher, SilenceRequest, SubmissionOutcome};
pub use window::{SilenceWindow, WindowParams};
