//! Silence time-window resolution.
//!
//! Turns the user-supplied start/end/duration inputs into the absolute
//! instants a silence covers, enforcing the ordering and mandatory-comment
//! policies before anything touches the network.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::parse_duration;
use crate::error::{Result, SilenceError};

/// The absolute instants a silence covers.
///
/// Invariant: `starts_at <= ends_at`. Windows violating this are rejected by
/// [`SilenceWindow::resolve`], never silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilenceWindow {
    /// When the silence starts.
    pub starts_at: DateTime<Utc>,
    /// When the silence ends.
    pub ends_at: DateTime<Utc>,
}

/// User-supplied inputs for window resolution.
#[derive(Debug, Clone)]
pub struct WindowParams<'a> {
    /// Explicit start instant (RFC3339), if given.
    pub start: Option<&'a str>,
    /// Explicit end instant (RFC3339), if given. Overrides `duration`.
    pub end: Option<&'a str>,
    /// Silence length, used when `end` is absent.
    pub duration: &'a str,
    /// Upper bound on `duration`. An unparsable bound means no limit.
    pub max_duration: &'a str,
    /// Whether an empty comment is a hard error.
    pub require_comment: bool,
    /// The silence comment.
    pub comment: &'a str,
}

impl SilenceWindow {
    /// Resolves the window from `params` and the current instant.
    ///
    /// `now` is used as the start when no explicit start is given; callers
    /// capture it once so the whole invocation agrees on "now". Pure function
    /// of its inputs.
    ///
    /// # Errors
    ///
    /// - [`SilenceError::InvalidTimestamp`] for unparsable `start`/`end`
    /// - [`SilenceError::InvalidDuration`] for an unparsable or zero duration
    /// - [`SilenceError::DurationExceedsMax`] when the duration is over the limit
    /// - [`SilenceError::InvalidWindow`] when the window would start after it ends
    /// - [`SilenceError::CommentRequired`] when a required comment is missing
    pub fn resolve(params: &WindowParams<'_>, now: DateTime<Utc>) -> Result<Self> {
        let starts_at = match params.start {
            Some(raw) => parse_rfc3339(raw, "start")?,
            None => now,
        };

        let ends_at = match params.end {
            // An explicit end overrides the duration entirely; duration and
            // max-duration inputs are not even parsed on this path.
            Some(raw) => parse_rfc3339(raw, "end")?,
            None => {
                let duration = parse_duration(params.duration)?;
                if duration.is_zero() {
                    return Err(SilenceError::InvalidDuration {
                        reason: "silence duration must be greater than 0".to_string(),
                    });
                }

                if let Ok(max) = parse_duration(params.max_duration) {
                    if duration > max {
                        return Err(SilenceError::DurationExceedsMax {
                            duration: params.duration.to_string(),
                            max: params.max_duration.to_string(),
                        });
                    }
                }

                let span = ChronoDuration::from_std(duration).map_err(|_| {
                    SilenceError::InvalidDuration {
                        reason: format!("duration out of range: \"{}\"", params.duration),
                    }
                })?;
                starts_at
                    .checked_add_signed(span)
                    .ok_or_else(|| SilenceError::InvalidDuration {
                        reason: format!("duration out of range: \"{}\"", params.duration),
                    })?
            }
        };

        if starts_at > ends_at {
            return Err(SilenceError::InvalidWindow);
        }

        if params.require_comment && params.comment.is_empty() {
            return Err(SilenceError::CommentRequired);
        }

        Ok(Self { starts_at, ends_at })
    }
}

fn parse_rfc3339(raw: &str, field: &'static str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| SilenceError::InvalidTimestamp {
            field,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params<'a>() -> WindowParams<'a> {
        WindowParams {
            start: None,
            end: None,
            duration: "1h",
            max_duration: "12h",
            require_comment: true,
            comment: "maintenance",
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 22, 10, 0, 0).unwrap()
    }

    #[test]
    fn duration_path_adds_to_now() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                duration: "10m",
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(window.starts_at, now());
        assert_eq!(window.ends_at - window.starts_at, ChronoDuration::minutes(10));
    }

    #[test]
    fn explicit_start_is_parsed() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                start: Some("2024-01-22T12:00:00Z"),
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(
            window.starts_at,
            Utc.with_ymd_and_hms(2024, 1, 22, 12, 0, 0).unwrap()
        );
        assert_eq!(window.ends_at - window.starts_at, ChronoDuration::hours(1));
    }

    #[test]
    fn explicit_end_overrides_duration() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                end: Some("2024-01-22T10:30:00Z"),
                // Unparsable on purpose: the end path must not read it.
                duration: "not a duration",
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(
            window.ends_at,
            Utc.with_ymd_and_hms(2024, 1, 22, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn offset_timestamps_convert_to_utc() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                start: Some("2024-01-22T12:00:00+02:00"),
                end: Some("2024-01-22T13:00:00+02:00"),
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(
            window.starts_at,
            Utc.with_ymd_and_hms(2024, 1, 22, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = SilenceWindow::resolve(
            &WindowParams {
                duration: "0s",
                ..params()
            },
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, SilenceError::InvalidDuration { .. }));
    }

    #[test]
    fn unparsable_duration_is_rejected() {
        let err = SilenceWindow::resolve(
            &WindowParams {
                duration: "soon",
                ..params()
            },
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, SilenceError::InvalidDuration { .. }));
    }

    #[test]
    fn duration_over_max_is_rejected() {
        let err = SilenceWindow::resolve(
            &WindowParams {
                duration: "13h",
                ..params()
            },
            now(),
        )
        .unwrap_err();
        match err {
            SilenceError::DurationExceedsMax { duration, max } => {
                assert_eq!(duration, "13h");
                assert_eq!(max, "12h");
            }
            other => panic!("expected DurationExceedsMax, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_max_duration_means_no_limit() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                duration: "1000d",
                max_duration: "whenever",
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(window.ends_at - window.starts_at, ChronoDuration::days(1000));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = SilenceWindow::resolve(
            &WindowParams {
                start: Some("2024-01-22T12:00:00Z"),
                end: Some("2024-01-22T11:00:00Z"),
                ..params()
            },
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, SilenceError::InvalidWindow));
    }

    #[test]
    fn end_equal_to_start_is_allowed() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                start: Some("2024-01-22T12:00:00Z"),
                end: Some("2024-01-22T12:00:00Z"),
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(window.starts_at, window.ends_at);
    }

    #[test]
    fn empty_comment_is_rejected_when_required() {
        let err = SilenceWindow::resolve(
            &WindowParams {
                comment: "",
                ..params()
            },
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, SilenceError::CommentRequired));
    }

    #[test]
    fn empty_comment_is_allowed_when_not_required() {
        let window = SilenceWindow::resolve(
            &WindowParams {
                require_comment: false,
                comment: "",
                ..params()
            },
            now(),
        )
        .unwrap();
        assert_eq!(window.ends_at - window.starts_at, ChronoDuration::hours(1));
    }

    #[test]
    fn bad_start_timestamp_names_the_field() {
        let err = SilenceWindow::resolve(
            &WindowParams {
                start: Some("yesterday"),
                ..params()
            },
            now(),
        )
        .unwrap_err();
        match err {
            SilenceError::InvalidTimestamp { field, .. } => assert_eq!(field, "start"),
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }
}
