//! Heading-count sub-renderer.

use super::{Value, NO_HEADINGS};
use std::collections::BTreeMap;

/// One tag per heading level, formatted `<level>: <count>`, in the map's
/// natural iteration order (the order is not contractual). An empty map
/// renders the fixed fallback text.
pub(crate) fn format_headings(headings: &BTreeMap<String, u64>) -> Value {
    if headings.is_empty() {
        return Value::Text(NO_HEADINGS.to_string());
    }
    Value::Tags(
        headings
            .iter()
            .map(|(level, count)| format!("{level}: {count}"))
            .collect(),
    )
}
