//! Detection of the issue a pull request closes.
//!
//! GitHub closes an issue when a merged pull request's description contains a
//! closing keyword followed by the issue reference, e.g. `Fixes #42`. The same
//! convention decides which issue inherits the pull request's milestone.

use crate::tracker::{IssueRef, IssueTracker, TrackerError};
use tracing::debug;

/// Keywords that close an issue, in lowercase.
const CLOSING_KEYWORDS: &[&str] = &[
    "fix", "fixe", "fixes", "fixed", "close", "closes", "closed", "resolve", "resolves",
    "resolved",
];

/// Fetches a pull request and returns the issue its description closes.
///
/// # Errors
///
/// Returns [`TrackerError`] if the pull request cannot be fetched.
pub async fn linked_issue(
    tracker: &dyn IssueTracker,
    pr: &IssueRef,
) -> Result<Option<u64>, TrackerError> {
    let record = tracker.get_issue(pr).await?;
    let linked = record.body.as_deref().and_then(find_closing_reference);

    match linked {
        Some(number) => debug!(pr = %pr, issue_number = number, "Found linked issue"),
        None => debug!(pr = %pr, "No closing keywords found in description"),
    }
    Ok(linked)
}

/// Scans text for a closing keyword immediately followed by `#<number>`.
///
/// Returns the first referenced issue number. A keyword at the end of the
/// text, or followed by anything other than an issue reference, is ignored.
pub fn find_closing_reference(body: &str) -> Option<u64> {
    let mut tokens = body.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if !is_closing_keyword(token) {
            continue;
        }
        if let Some(number) = tokens.peek().and_then(|next| parse_issue_reference(next)) {
            return Some(number);
        }
    }

    None
}

/// Checks a token against [`CLOSING_KEYWORDS`]; only the first letter may be
/// capitalised.
fn is_closing_keyword(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let rest = chars.as_str();
    let normalized = format!("{}{rest}", first.to_ascii_lowercase());
    CLOSING_KEYWORDS.contains(&normalized.as_str())
}

/// Parses the leading `#<digits>` of a token.
fn parse_issue_reference(token: &str) -> Option<u64> {
    let digits = token.strip_prefix('#')?;
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse().ok()
}
