//! Field normalization - canonical text and boolean forms for cell and JSON values

use serde_json::Value;

/// Tokens that read as "yes" in a flag column (compared case-insensitively)
pub const TRUTHY_TOKENS: &[&str] = &["x", "yes", "y", "true", "1", "ok"];

/// Trim surrounding whitespace, keeping internal content and case
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Caseless form for comparing and ordering identity fields.
///
/// Lowercases, then applies the full case foldings that lowercasing alone
/// misses (`ß` and `ẞ` to `ss`, final and long forms to `σ` and `s`), so
/// "STRASSE" and "Straße" fold alike.
pub fn fold_case(value: &str) -> String {
    let lowered = value.to_lowercase();
    if lowered.is_ascii() {
        return lowered;
    }
    let mut folded = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match ch {
            'ß' => folded.push_str("ss"),
            'ς' => folded.push('σ'),
            'ſ' => folded.push('s'),
            other => folded.push(other),
        }
    }
    folded
}

/// Interpret a flag cell. Unknown tokens are simply false.
pub fn normalize_bool(value: &str) -> bool {
    let folded = value.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&folded.as_str())
}

/// Normalize a header cell for synonym matching
///
/// Case-folds, turns `_` and `-` into spaces and collapses whitespace runs.
/// Only used for matching column names, never for record content.
pub fn normalize_header_key(value: &str) -> String {
    let folded = value.trim().to_lowercase().replace(['_', '-'], " ");
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text form of a JSON value (`null` becomes the empty string)
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => normalize_text(s),
        other => normalize_text(&other.to_string()),
    }
}

/// Boolean form of a JSON value; native booleans are taken as-is
pub fn value_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        other => normalize_bool(&value_text(other)),
    }
}

/// Text of the cell at `idx`, or empty when the column is absent or the row is short
pub fn cell_text(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i))
        .map(|s| normalize_text(s))
        .unwrap_or_default()
}
