//! Limits validation (max_length).

use crate::schema::GuardSettings;

use super::helpers::validate_range;

/// Upper bound for `limits.max_length` (16 MiB of characters).
pub(crate) const MAX_LENGTH_CEILING: usize = 16 * 1024 * 1024;

pub(crate) fn validate_limits(errors: &mut Vec<String>, settings: &GuardSettings) {
    validate_range(
        errors,
        "limits.max_length",
        settings.limits.max_length,
        1,
        MAX_LENGTH_CEILING,
    );
}
