//! Embedded-data locator for the playlist page
//!
//! The playlist page injects its render data as a large JSON object
//! assigned to `ytInitialData` by inline script code. The assignment
//! shape varies between page revisions, so several signatures are tried
//! in priority order. The surrounding markup is never trusted past the
//! syntactic match: a pattern whose capture fails to parse as JSON is
//! skipped and evaluation continues with the next one.

use regex::Regex;
use serde_json::Value;

/// Assignment signatures, tried in priority order
const EMBEDDED_JSON_PATTERNS: [&str; 4] = [
    r"(?s)var\s+ytInitialData\s*=\s*(\{.*?\});",
    r"(?s)ytInitialData\s*=\s*(\{.*?\});",
    r#"(?s)window\["ytInitialData"\]\s*=\s*(\{.*?\});"#,
    r#"(?s)"ytInitialData"\s*:\s*(\{.*?\})\s*,\s*"ytcfg"#,
];

/// Locates and parses the embedded data blob in a playlist page
///
/// # Arguments
/// * `html` - Raw HTML of the playlist page
///
/// # Returns
/// The parsed JSON value of the first pattern that both matches and
/// yields valid JSON, or `None` if no pattern succeeds. A miss means
/// "zero items" to the caller, never an error.
pub fn locate_embedded_json(html: &str) -> Option<Value> {
    for pattern in EMBEDDED_JSON_PATTERNS {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };

        if let Some(caps) = re.captures(html)
            && let Some(candidate) = caps.get(1)
            && let Ok(value) = serde_json::from_str::<Value>(candidate.as_str())
        {
            return Some(value);
        }
    }

    None
}
