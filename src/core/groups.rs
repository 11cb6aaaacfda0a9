use crate::core::digits::{one_word, teen_word, tens_word};
use crate::utils::error::{ConversionError, Result};

pub const MAX_DIGITS_GROUP: usize = 3;

const HUNDRED: &str = "hundred";
const WORD_CONNECTOR: &str = "-";

/// Base-1000 position of a group inside a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Hundreds,
    Thousands,
    Millions,
}

impl Scale {
    /// Most significant first, the order groups are read out in.
    pub const DESCENDING: [Scale; 3] = [Scale::Millions, Scale::Thousands, Scale::Hundreds];

    pub fn group_index(self) -> usize {
        match self {
            Scale::Hundreds => 0,
            Scale::Thousands => 1,
            Scale::Millions => 2,
        }
    }

    /// Word following the group's words; the hundreds group has none.
    pub fn word(self) -> Option<&'static str> {
        match self {
            Scale::Hundreds => None,
            Scale::Thousands => Some("thousand"),
            Scale::Millions => Some("million"),
        }
    }
}

/// Substring of up to three digits at `group_index` counted from the right.
///
/// Index 0 is the trailing group. Groups left of the first digit are empty.
/// Works on the text directly so arbitrarily long inputs never overflow.
pub fn extract_group(digits: &str, group_index: usize) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let skip = group_index * MAX_DIGITS_GROUP;
    if chars.len() <= skip {
        return String::new();
    }
    let end = chars.len() - skip;
    let start = end.saturating_sub(MAX_DIGITS_GROUP);
    chars[start..end].iter().collect()
}

/// Words for a group of at most three digits, e.g. "305" -> "three hundred five".
pub fn convert_group(group: &str) -> Result<String> {
    // least significant digit first
    let digits: Vec<char> = group.chars().rev().collect();
    if digits.len() > MAX_DIGITS_GROUP {
        return Err(ConversionError::GroupTooLarge {
            group: group.to_string(),
            max: MAX_DIGITS_GROUP,
        });
    }
    if digits.is_empty() {
        return Ok(String::new());
    }

    let tail = if digits.len() >= 2 && digits[1] == '1' {
        let teen: String = [digits[1], digits[0]].iter().collect();
        teen_word(&teen)?.to_string()
    } else {
        regular_tail(&digits)?
    };

    let mut fragments = Vec::with_capacity(2);
    if digits.len() == MAX_DIGITS_GROUP {
        let hundreds = one_word(digits[2], digits.len())?;
        if !hundreds.is_empty() {
            fragments.push(format!("{} {}", hundreds, HUNDRED));
        }
    }
    if !tail.is_empty() {
        fragments.push(tail);
    }
    Ok(fragments.join(" "))
}

fn regular_tail(digits: &[char]) -> Result<String> {
    let ones = one_word(digits[0], digits.len())?;
    if digits.len() < 2 {
        return Ok(ones.to_string());
    }
    let tens = tens_word(digits[1])?;
    let words = match (tens.is_empty(), ones.is_empty()) {
        (false, false) => format!("{}{}{}", tens, WORD_CONNECTOR, ones),
        (false, true) => tens.to_string(),
        (true, _) => ones.to_string(),
    };
    Ok(words)
}
