//! JSON rendering of results, for machine consumers.

use crate::result::Results;

/// Serialize results, including the full per-batch history, to JSON.
pub fn to_json(results: &Results) -> serde_json::Result<String> {
    serde_json::to_string(results)
}

/// Pretty-printed variant of [`to_json`].
pub fn to_json_pretty(results: &Results) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
