//! String cleaning applied to free-text values before they reach a statement.

/// Replaces every quote with a backtick and every newline with a space.
///
/// The result is still passed as a bound parameter; this only normalizes
/// values whose embedded quotes and line breaks are noise in the target
/// schema. Total, never fails.
pub fn clean_text(value: &str) -> String {
    value.replace('\'', "`").replace('\n', " ")
}
