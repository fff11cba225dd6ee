//! Core types for silence construction.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`MatchOperator`]: the four matcher comparison operators
//! - [`Matcher`]: a single label-name/value comparison
//! - [`SilenceRequest`]: the outbound silence payload
//! - [`SubmissionOutcome`]: the per-tenant result of one submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::window::SilenceWindow;

/// Matcher comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOperator {
    /// Literal equality (`=`).
    Equal,
    /// Literal inequality (`!=`).
    NotEqual,
    /// Regex match (`=~`).
    Regex,
    /// Negated regex match (`!~`).
    NotRegex,
}

impl MatchOperator {
    /// Operators in disambiguation order: longer operators first so that
    /// `=~` is never read as `=` followed by `~`, and `!~`/`!=` are tried
    /// before the bare `=`.
    pub const SCAN_ORDER: [Self; 4] = [Self::Regex, Self::NotRegex, Self::NotEqual, Self::Equal];

    /// Returns the operator's textual symbol.
    #[must_use]
    pub const fn as_symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Regex => "=~",
            Self::NotRegex => "!~",
        }
    }

    /// True for `=` and `=~`, false for `!=` and `!~`.
    #[must_use]
    pub const fn is_equal(&self) -> bool {
        matches!(self, Self::Equal | Self::Regex)
    }

    /// True for `=~` and `!~`, false for `=` and `!=`.
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, Self::Regex | Self::NotRegex)
    }
}

impl std::fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_symbol())
    }
}

/// A single label-name/value comparison with equality-or-inequality and
/// literal-or-regex semantics.
///
/// All four fields are always serialized; the silence API requires them to be
/// present even when false or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matcher {
    /// The label name to compare.
    pub name: String,
    /// The value or regex to compare against.
    pub value: String,
    /// Whether the comparison is positive (`=`, `=~`) or negated (`!=`, `!~`).
    pub is_equal: bool,
    /// Whether the value is a regex (`=~`, `!~`) or a literal (`=`, `!=`).
    pub is_regex: bool,
}

impl Matcher {
    /// Creates a matcher from a name, value, and operator.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, op: MatchOperator) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_equal: op.is_equal(),
            is_regex: op.is_regex(),
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match (self.is_equal, self.is_regex) {
            (true, false) => MatchOperator::Equal,
            (false, false) => MatchOperator::NotEqual,
            (true, true) => MatchOperator::Regex,
            (false, true) => MatchOperator::NotRegex,
        };
        write!(f, "{}{}\"{}\"", self.name, op, self.value)
    }
}

/// The outbound silence payload.
///
/// Immutable once built; the same instance is reused for every tenant
/// submission in one invocation. Serializes to the Alertmanager v2
/// `PostableSilence` wire format (camelCase field names, RFC3339 timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SilenceRequest {
    /// The matchers composing this silence's filter. Never empty.
    pub matchers: Vec<Matcher>,
    /// When the silence starts.
    pub starts_at: DateTime<Utc>,
    /// When the silence ends.
    pub ends_at: DateTime<Utc>,
    /// Who created the silence.
    pub created_by: String,
    /// Comment explaining the silence.
    pub comment: String,
}

impl SilenceRequest {
    /// Assembles a request from already-validated parts.
    ///
    /// This is pure assembly: matcher and window validation happen upstream
    /// in [`crate::matcher::parse_matchers`] and [`SilenceWindow::resolve`].
    #[must_use]
    pub fn new(
        matchers: Vec<Matcher>,
        window: SilenceWindow,
        created_by: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            matchers,
            starts_at: window.starts_at,
            ends_at: window.ends_at,
            created_by: created_by.into(),
            comment: comment.into(),
        }
    }
}

/// The result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// The tenant the submission was for. Absent in no-tenant mode.
    pub tenant: Option<String>,
    /// Whether the submission succeeded.
    pub success: bool,
    /// The silence identifier returned by the server, on success.
    pub silence_id: Option<String>,
    /// The failure message, on failure.
    pub error: Option<String>,
}

impl SubmissionOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn success(tenant: Option<String>, silence_id: impl Into<String>) -> Self {
        Self {
            tenant,
            success: true,
            silence_id: Some(silence_id.into()),
            error: None,
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub fn failure(tenant: Option<String>, error: impl Into<String>) -> Self {
        Self {
            tenant,
            success: false,
            silence_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(MatchOperator::Equal, true, false; "equal")]
    #[test_case(MatchOperator::Regex, true, true; "regex")]
    #[test_case(MatchOperator::NotEqual, false, false; "not equal")]
    #[test_case(MatchOperator::NotRegex, false, true; "not regex")]
    fn operator_classification(op: MatchOperator, is_equal: bool, is_regex: bool) {
        assert_eq!(op.is_equal(), is_equal);
        assert_eq!(op.is_regex(), is_regex);
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(MatchOperator::Equal.as_symbol(), "=");
        assert_eq!(MatchOperator::NotEqual.as_symbol(), "!=");
        assert_eq!(MatchOperator::Regex.as_symbol(), "=~");
        assert_eq!(MatchOperator::NotRegex.as_symbol(), "!~");
    }

    #[test]
    fn scan_order_tries_longer_operators_first() {
        let symbols: Vec<&str> = MatchOperator::SCAN_ORDER
            .iter()
            .map(MatchOperator::as_symbol)
            .collect();
        assert_eq!(symbols, vec!["=~", "!~", "!=", "="]);
    }

    #[test]
    fn matcher_new_sets_classification() {
        let m = Matcher::new("alertname", "foo.*", MatchOperator::Regex);
        assert_eq!(m.name, "alertname");
        assert_eq!(m.value, "foo.*");
        assert!(m.is_equal);
        assert!(m.is_regex);
    }

    #[test]
    fn matcher_display_roundtrips_operator() {
        let m = Matcher::new("node", "bar", MatchOperator::NotEqual);
        assert_eq!(m.to_string(), "node!=\"bar\"");
    }

    #[test]
    fn matcher_serializes_all_four_fields() {
        let m = Matcher::new("alertname", "", MatchOperator::NotEqual);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "alertname",
                "value": "",
                "isEqual": false,
                "isRegex": false,
            })
        );
    }

    #[test]
    fn request_serializes_to_wire_format() {
        let window = SilenceWindow {
            starts_at: Utc.with_ymd_and_hms(2024, 1, 22, 10, 30, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2024, 1, 22, 11, 30, 0).unwrap(),
        };
        let request = SilenceRequest::new(
            vec![Matcher::new("alertname", "foo", MatchOperator::Equal)],
            window,
            "admin",
            "maintenance",
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["startsAt"], "2024-01-22T10:30:00Z");
        assert_eq!(json["endsAt"], "2024-01-22T11:30:00Z");
        assert_eq!(json["createdBy"], "admin");
        assert_eq!(json["comment"], "maintenance");
        assert_eq!(json["matchers"][0]["name"], "alertname");
        assert_eq!(json["matchers"][0]["isEqual"], true);
        assert_eq!(json["matchers"][0]["isRegex"], false);
    }

    #[test]
    fn request_assembles_from_parsed_parts() {
        let matchers = crate::matcher::parse_matchers(&[
            "alertname=foo".to_string(),
            "node=bar".to_string(),
        ])
        .unwrap();
        let window = SilenceWindow::resolve(
            &crate::window::WindowParams {
                start: None,
                end: None,
                duration: "1h",
                max_duration: "12h",
                require_comment: true,
                comment: "x",
            },
            Utc.with_ymd_and_hms(2024, 1, 22, 10, 0, 0).unwrap(),
        )
        .unwrap();

        let request = SilenceRequest::new(matchers, window, "admin", "x");
        assert_eq!(request.matchers.len(), 2);
        assert_eq!(request.matchers[0], Matcher::new("alertname", "foo", MatchOperator::Equal));
        assert_eq!(request.matchers[1], Matcher::new("node", "bar", MatchOperator::Equal));
        assert_eq!(
            request.ends_at - request.starts_at,
            chrono::Duration::hours(1)
        );
    }

    #[test]
    fn outcome_success_and_failure() {
        let ok = SubmissionOutcome::success(Some("team-a".into()), "sil-1");
        assert!(ok.success);
        assert_eq!(ok.silence_id.as_deref(), Some("sil-1"));
        assert!(ok.error.is_none());

        let bad = SubmissionOutcome::failure(None, "connection refused");
        assert!(!bad.success);
        assert!(bad.silence_id.is_none());
        assert_eq!(bad.error.as_deref(), Some("connection refused"));
    }
}
