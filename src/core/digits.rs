//! Word tables for single digits, ten-multiples and the irregular numbers 10..=19.

use crate::utils::error::{ConversionError, Result};

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "fourty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const KIND_SINGLE_DIGIT: &str = "single digit numbers";
const KIND_TEN_MULTIPLES: &str = "ten-multiples";

/// A decimal digit, 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    fn parse(digit: char, kind: &'static str) -> Result<Self> {
        digit
            .to_digit(10)
            .map(|value| Digit(value as u8))
            .ok_or(ConversionError::NotADigit { digit, kind })
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<char> for Digit {
    type Error = ConversionError;

    fn try_from(digit: char) -> Result<Self> {
        Digit::parse(digit, KIND_SINGLE_DIGIT)
    }
}

/// Cardinal word of a digit. A '0' only reads as "zero" when it is the whole group.
pub fn one_word(digit: char, group_len: usize) -> Result<&'static str> {
    let digit = Digit::parse(digit, KIND_SINGLE_DIGIT)?;
    if digit.is_zero() && group_len != 1 {
        return Ok("");
    }
    Ok(ONES[digit.value() as usize])
}

/// Ten-multiple word of a digit ("twenty" for '2'); empty for '0'.
pub fn tens_word(digit: char) -> Result<&'static str> {
    let digit = Digit::parse(digit, KIND_TEN_MULTIPLES)?;
    Ok(TENS[digit.value() as usize])
}

/// Irregular word for exactly "10" through "19".
pub fn teen_word(number: &str) -> Result<&'static str> {
    match number.as_bytes() {
        [b'1', ones @ b'0'..=b'9'] => Ok(TEENS[(ones - b'0') as usize]),
        _ => Err(ConversionError::NotATeen {
            number: number.to_string(),
        }),
    }
}
