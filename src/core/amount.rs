use crate::core::groups::{convert_group, extract_group, Scale};
use crate::utils::error::Result;

/// Words for a digit string of up to nine digits.
///
/// Groups that render to nothing are skipped together with their scale word,
/// so "1000000" becomes "one million" without a trailing "thousand".
pub fn amount_to_words(digits: &str) -> Result<String> {
    let mut fragments = Vec::with_capacity(Scale::DESCENDING.len());
    for scale in Scale::DESCENDING {
        let group = extract_group(digits, scale.group_index());
        let words = convert_group(&group)?;
        if words.is_empty() {
            continue;
        }
        match scale.word() {
            Some(scale_word) => fragments.push(format!("{} {}", words, scale_word)),
            None => fragments.push(words),
        }
    }
    Ok(fragments.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_to_words() {
        assert_eq!(amount_to_words("0").unwrap(), "zero");
        assert_eq!(amount_to_words("1").unwrap(), "one");
        assert_eq!(amount_to_words("1234").unwrap(), "one thousand two hundred thirty-four");
        assert_eq!(amount_to_words("1000000").unwrap(), "one million");
        assert_eq!(amount_to_words("1000001").unwrap(), "one million one");
        assert_eq!(amount_to_words("20015").unwrap(), "twenty thousand fifteen");
        assert_eq!(
            amount_to_words("999999999").unwrap(),
            "nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine"
        );
        assert_eq!(
            amount_to_words("45100000").unwrap(),
            "fourty-five million one hundred thousand"
        );
    }

    #[test]
    fn test_no_stray_spaces() {
        for digits in ["1000", "1000000", "1001000", "100", "10"] {
            let words = amount_to_words(digits).unwrap();
            assert_eq!(words, words.trim(), "{}", digits);
            assert!(!words.contains("  "), "{}", digits);
        }
    }
}
