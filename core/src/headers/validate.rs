//! headers/validate.rs
//! Rule checks over a parsed header record.
//!
//! This is the permissive variant: it reports missing required fields and a
//! malformed `last_modified`, and nothing else. It never fails and never touches
//! its input. See [`crate::headers::schema`] for the strict typed variant.

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::constants::{DATE_PATTERN, LAST_MODIFIED};
use crate::headers::types::HeaderRecord;

fn date_rx() -> &'static Regex {
    static DATE_RX: OnceLock<Regex> = OnceLock::new();
    DATE_RX.get_or_init(|| Regex::new(DATE_PATTERN).expect("DATE_PATTERN is a valid regex"))
}

/// `YYYY-MM-DD` that also names a real calendar day.
pub fn is_valid_date(value: &str) -> bool {
    date_rx().is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Validate `record` against `required`, naming `path` in every message.
///
/// Errors come out in `required` order, followed by the date check.
pub fn validate<S: AsRef<str>>(record: &HeaderRecord, required: &[S], path: &Path) -> Vec<String> {
    let mut errors: Vec<String> = required
        .iter()
        .map(AsRef::as_ref)
        .filter(|field| !record.contains_key(*field))
        .map(|field| format!("Missing '{}' in {}", field, path.display()))
        .collect();

    if let Some(value) = record.get(LAST_MODIFIED) {
        let text = value.to_string();
        if !text.is_empty() && !is_valid_date(&text) {
            errors.push(format!(
                "Bad date format in {}: {}='{}'",
                path.display(),
                LAST_MODIFIED,
                text
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_shape_and_calendar_both_checked() {
        assert!(is_valid_date("2025-04-12"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2025-13-40"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2025-4-12"));
        assert!(!is_valid_date("12/04/2025"));
    }
}
