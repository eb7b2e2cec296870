//! Tree walker over the embedded playlist data
//!
//! The embedded blob is arbitrarily nested and its shape is undocumented,
//! so the walk pattern-matches the JSON value tags and never assumes
//! structure beyond the video-record marker itself.

use std::collections::HashSet;

use serde_json::Value;

use crate::types::UNTITLED;

/// Field marking an object as one playlist entry's render data
const VIDEO_MARKER: &str = "playlistVideoRenderer";

/// Ceiling on traversal depth
///
/// `serde_json` values are trees, so reference cycles cannot occur; the
/// ceiling bounds the walk against pathologically nested payloads instead.
const MAX_DEPTH: usize = 512;

/// One video record recovered from the embedded data
///
/// Transient: projected into a `PlaylistItem` by the resolver and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawVideoNode {
    pub id: String,
    pub title: String,
}

/// Collects every video record reachable in a parsed JSON value
///
/// Iterative depth traversal with an explicit stack; child visitation
/// order is implementation-defined. The same record may be reachable via
/// multiple paths, so results are deduplicated by video id, keeping the
/// first occurrence.
///
/// # Arguments
/// * `root` - Parsed embedded data of unknown, untrusted shape
///
/// # Returns
/// Video records in discovery order, deduplicated by id
pub(crate) fn collect_video_nodes(root: &Value) -> Vec<RawVideoNode> {
    let mut results = Vec::new();
    let mut stack: Vec<(&Value, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        match node {
            Value::Object(map) => {
                if let Some(marker) = map.get(VIDEO_MARKER).and_then(Value::as_object)
                    && let Some(record) = extract_video_node(marker)
                {
                    results.push(record);
                }
                if depth < MAX_DEPTH {
                    for child in map.values() {
                        if child.is_object() || child.is_array() {
                            stack.push((child, depth + 1));
                        }
                    }
                }
            }
            Value::Array(entries) => {
                if depth < MAX_DEPTH {
                    for child in entries {
                        if child.is_object() || child.is_array() {
                            stack.push((child, depth + 1));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    dedup_by_id(results)
}

/// Reads id and title out of one marker object
///
/// A marker without a non-empty string `videoId` yields no record.
fn extract_video_node(marker: &serde_json::Map<String, Value>) -> Option<RawVideoNode> {
    let id = marker
        .get("videoId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?;

    let title = marker
        .get("title")
        .map(extract_title)
        .unwrap_or_else(|| UNTITLED.to_string());

    Some(RawVideoNode {
        id: id.to_string(),
        title,
    })
}

/// Title fallback chain: `simpleText`, then the first run's text, then
/// the sentinel
fn extract_title(title: &Value) -> String {
    if let Some(simple) = title.get("simpleText").and_then(Value::as_str)
        && !simple.is_empty()
    {
        return simple.to_string();
    }

    if let Some(first) = title
        .get("runs")
        .and_then(Value::as_array)
        .and_then(|runs| runs.first())
        && let Some(text) = first.get("text").and_then(Value::as_str)
        && !text.is_empty()
    {
        return text.to_string();
    }

    UNTITLED.to_string()
}

/// Stable dedup by video id, keeping the first occurrence
fn dedup_by_id(nodes: Vec<RawVideoNode>) -> Vec<RawVideoNode> {
    let mut seen = HashSet::new();
    nodes
        .into_iter()
        .filter(|node| seen.insert(node.id.clone()))
        .collect()
}
