//! Validation and clean-up of raw user input.
//!
//! Accepted input is digits, whitespace and at most one separator (`,`)
//! between units and subunits. Whitespace is removed per segment, so
//! `"12 , 5"` splits the same way as `"12,5"`.

use crate::domain::model::{AmountPair, AmountSide};
use crate::utils::error::{ConversionError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const SEPARATOR: char = ',';

static ALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9,\s]+$").expect("allowed-characters pattern is valid"));

/// Checks `raw` and splits it into sanitized units and optional subunits.
pub fn process(raw: Option<&str>) -> Result<AmountPair> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            return Err(ConversionError::invalid_input(
                raw.unwrap_or_default(),
                "the number string is null, empty, or only whitespace",
            ))
        }
    };

    if !ALLOWED_CHARS.is_match(raw) {
        return Err(ConversionError::invalid_input(
            raw,
            format!(
                "it contains invalid characters, only digits, a separator ('{}'), and whitespaces are allowed",
                SEPARATOR
            ),
        ));
    }

    let segments: Vec<&str> = raw.split(SEPARATOR).collect();
    if segments.len() > 2 {
        return Err(ConversionError::invalid_input(
            raw,
            format!(
                "too many separators ({}), only 1 separator ('{}') is allowed at a max",
                segments.len() - 1,
                SEPARATOR
            ),
        ));
    }

    let units = sanitize(&remove_whitespace(segments[0]));
    check_length(AmountSide::Units, &units)?;

    let subunits = match segments.get(1) {
        Some(segment) => Some(sanitize_subunits(segment)?),
        None => None,
    };

    tracing::debug!(units = %units, subunits = ?subunits, "Sanitized amount");
    Ok(AmountPair { units, subunits })
}

/// Trims leading zeros; an empty result becomes "0". Idempotent.
pub fn sanitize(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn remove_whitespace(segment: &str) -> String {
    segment.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A single subunit digit is read as tenths ("5" -> "50"). Length is checked
/// before leading zeros go, so "05" stays five and "005" is rejected.
fn sanitize_subunits(segment: &str) -> Result<String> {
    let mut digits = remove_whitespace(segment);
    if digits.len() == 1 {
        digits.push('0');
    }
    check_length(AmountSide::Subunits, &digits)?;
    Ok(sanitize(&digits))
}

pub(crate) fn check_length(side: AmountSide, digits: &str) -> Result<()> {
    let count = digits.chars().count();
    if count > side.max_digits() {
        return Err(ConversionError::AmountTooLarge {
            side,
            value: digits.to_string(),
            digits: count,
            max: side.max_value(),
        });
    }
    Ok(())
}
