//! Memory quantity parsing
//!
//! Quota memory limits are expressed in megabytes on the wire. Users type them
//! as `1024M` or `10G`; `-1` means unlimited.

use crate::error::{CfqError, Result};

/// Sentinel for "no memory limit".
pub const UNLIMITED_MEMORY: i64 = -1;

const MEGABYTES_PER_GIGABYTE: i64 = 1024;

/// Parse a human-readable memory quantity into megabytes.
///
/// Accepts `<digits>M`, `<digits>G` (unit case-insensitive) and the unlimited
/// sentinel `-1`, which may carry either unit (`-1M`, `-1G`).
pub fn parse_megabytes(raw: &str) -> Result<i64> {
    let Some(unit) = raw.chars().last() else {
        return Err(CfqError::malformed_size(raw));
    };
    let digits = &raw[..raw.len() - unit.len_utf8()];

    if raw == "-1" || (digits == "-1" && is_unit(unit)) {
        return Ok(UNLIMITED_MEMORY);
    }

    let multiplier = match unit.to_ascii_uppercase() {
        'M' => 1,
        'G' => MEGABYTES_PER_GIGABYTE,
        _ => return Err(CfqError::malformed_size(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CfqError::malformed_size(raw));
    }

    digits
        .parse::<i64>()
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
        .ok_or_else(|| CfqError::malformed_size(raw))
}

const fn is_unit(c: char) -> bool {
    matches!(c, 'M' | 'm' | 'G' | 'g')
}
