//! Prometheus-style duration strings.
//!
//! The grammar accepted here matches the one silence durations are written
//! in: a concatenation of `<int><unit>` terms in descending unit order, e.g.
//! `90s`, `1h30m`, `2d12h`. Supported units are `y` (365d), `w` (7d), `d`,
//! `h`, `m`, `s`, and `ms`.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SilenceError};

#[allow(clippy::expect_used)]
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((\d+)y)?((\d+)w)?((\d+)d)?((\d+)h)?((\d+)m)?((\d+)s)?((\d+)ms)?$")
        .expect("duration pattern is valid")
});

const MILLIS_PER_SECOND: u64 = 1000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Parses a duration string such as `1h`, `90s`, or `1h30m`.
///
/// A bare `0` is accepted as the zero duration. Whether zero is *allowed* is
/// the caller's decision; see [`crate::window::SilenceWindow::resolve`].
///
/// # Errors
///
/// Returns [`SilenceError::InvalidDuration`] if the string is empty, does not
/// match the duration grammar, or overflows.
pub fn parse_duration(s: &str) -> Result<Duration> {
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(SilenceError::InvalidDuration {
            reason: "empty duration string".to_string(),
        });
    }

    let captures = DURATION_RE.captures(s).ok_or_else(|| invalid(s))?;

    // Group indices of each unit's digits within DURATION_RE.
    let units: [(usize, u64); 7] = [
        (2, 365 * MILLIS_PER_DAY),
        (4, 7 * MILLIS_PER_DAY),
        (6, MILLIS_PER_DAY),
        (8, MILLIS_PER_HOUR),
        (10, MILLIS_PER_MINUTE),
        (12, MILLIS_PER_SECOND),
        (14, 1),
    ];

    let mut millis: u64 = 0;
    for (group, scale) in units {
        if let Some(digits) = captures.get(group) {
            let n: u64 = digits.as_str().parse().map_err(|_| invalid(s))?;
            let term = n.checked_mul(scale).ok_or_else(|| invalid(s))?;
            millis = millis.checked_add(term).ok_or_else(|| invalid(s))?;
        }
    }

    Ok(Duration::from_millis(millis))
}

fn invalid(s: &str) -> SilenceError {
    SilenceError::InvalidDuration {
        reason: format!("not a valid duration string: \"{s}\""),
    }
}
