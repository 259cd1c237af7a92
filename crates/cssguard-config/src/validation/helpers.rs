//! Shared helpers used by the section validators.

use regex::Regex;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(
    errors: &mut Vec<String>,
    name: &str,
    value: usize,
    min: usize,
    max: usize,
) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error for every entry of `values` that does not match `pattern`.
pub(crate) fn validate_entries(
    errors: &mut Vec<String>,
    name: &str,
    values: &[String],
    pattern: &Regex,
    expected: &str,
) {
    for (i, value) in values.iter().enumerate() {
        if !pattern.is_match(value) {
            errors.push(format!("{name}[{i}] = '{value}' is not {expected}"));
        }
    }
}
