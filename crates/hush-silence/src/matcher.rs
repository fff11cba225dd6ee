//! Matcher-expression parsing.
//!
//! A matcher expression is a label name, one of the four comparison operators
//! (`=`, `!=`, `=~`, `!~`), and a value, e.g. `alertname=~foo.*`. Values may
//! be double-quoted to carry spaces, operator characters, or escapes:
//! `alertname="foo bar"`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, SilenceError};
use crate::types::{MatchOperator, Matcher};

#[allow(clippy::expect_used)]
static LABEL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").expect("label name pattern is valid")
});

/// Parses a list of raw matcher expressions into an ordered matcher set.
///
/// If the first element fails to parse it is assumed to be a bare alert name:
/// it is rewritten to `alertname="<value>"` and parsed again. Later elements
/// get no such fallback. An empty list, or a first element that fails even
/// after rewriting, is a [`SilenceError::NoMatchers`] error.
///
/// # Errors
///
/// Returns [`SilenceError::MatcherSyntax`] for any unparsable element past
/// the first, naming the offending expression.
pub fn parse_matchers(expressions: &[String]) -> Result<Vec<Matcher>> {
    if expressions.is_empty() {
        return Err(SilenceError::NoMatchers);
    }

    let mut matchers = Vec::with_capacity(expressions.len());
    for (index, raw) in expressions.iter().enumerate() {
        match parse_matcher(raw) {
            Ok(matcher) => matchers.push(matcher),
            Err(_) if index == 0 => {
                // No operator in the first argument: treat it as the value of
                // an alertname equality matcher.
                let rewritten = format!("alertname={}", quote(raw));
                debug!(original = %raw, rewritten = %rewritten, "rewrote bare alert name");
                let matcher = parse_matcher(&rewritten).map_err(|_| SilenceError::NoMatchers)?;
                matchers.push(matcher);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(matchers)
}

/// Parses one matcher expression.
///
/// # Errors
///
/// Returns [`SilenceError::MatcherSyntax`] if no operator is found, the label
/// name is invalid, or a quoted value is malformed.
pub fn parse_matcher(expression: &str) -> Result<Matcher> {
    let (at, op) = find_operator(expression).ok_or_else(|| syntax(expression))?;

    let name = expression[..at].trim();
    if !LABEL_NAME_RE.is_match(name) {
        return Err(syntax(expression));
    }

    let raw_value = expression[at + op.as_symbol().len()..].trim();
    let value = unquote(raw_value).ok_or_else(|| syntax(expression))?;

    Ok(Matcher::new(name, value, op))
}

/// Finds the first operator occurrence, trying longer operators first at each
/// position so `=~` is never read as `=`.
fn find_operator(expression: &str) -> Option<(usize, MatchOperator)> {
    for (at, _) in expression.char_indices() {
        for op in MatchOperator::SCAN_ORDER {
            if expression[at..].starts_with(op.as_symbol()) {
                return Some((at, op));
            }
        }
    }
    None
}

/// Reverses [`quote`]: strips surrounding double quotes and resolves escapes.
/// Bare (unquoted) values pass through unchanged. Returns `None` for
/// malformed quoting.
fn unquote(raw: &str) -> Option<String> {
    if !raw.starts_with('"') {
        return Some(raw.to_string());
    }
    if raw.len() < 2 || !raw.ends_with('"') {
        return None;
    }

    let inner = &raw[1..raw.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            if c == '"' {
                // An unescaped interior quote means the closing quote we
                // stripped was not really the end of the value.
                return None;
            }
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => value.push('"'),
            Some('\\') => value.push('\\'),
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            _ => return None,
        }
    }
    Some(value)
}

/// Wraps a value in double quotes, escaping quotes, backslashes, newlines,
/// and tabs.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn syntax(expression: &str) -> SilenceError {
    SilenceError::MatcherSyntax {
        expression: expression.to_string(),
    }
}
