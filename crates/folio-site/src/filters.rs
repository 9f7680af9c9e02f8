//! Custom template filters.

use minijinja::Value;

/// Leading year component of a date-like value.
///
/// `"2024-01-05"` becomes `"2024"`, values without a hyphen are returned as
/// their string form, and falsy values (none, undefined, empty) become `""`.
pub fn year_from_date(value: Value) -> String {
    if !value.is_true() {
        return String::new();
    }

    let text = value.to_string();
    match text.split_once('-') {
        Some((year, _)) => year.to_string(),
        None => text,
    }
}
