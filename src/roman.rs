//! Roman numeral conversion.
//!
//! Parsing is strict: anything outside `IVXLCDM` (in either case) is rejected
//! instead of being counted as zero, so a mangled heading can never be filed
//! under numeral `0`.
use std::fmt;

/// Subtractive-pair table used by [int_to_roman], in descending order.
const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    Empty,
    InvalidDigit { numeral: String, digit: char },
    /// Arabic `0` (or an overflowing arabic numeral) in a heading.
    OutOfRange(String),
}

impl fmt::Display for RomanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanError::Empty => write!(f, "empty roman numeral"),
            RomanError::InvalidDigit { numeral, digit } => {
                write!(f, "invalid digit {:?} in roman numeral {:?}", digit, numeral)
            }
            RomanError::OutOfRange(numeral) => write!(f, "numeral {:?} is out of range", numeral),
        }
    }
}

impl std::error::Error for RomanError {}

#[inline]
fn digit_value(digit: char) -> Option<u32> {
    match digit.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parse a roman numeral.
///
/// Digits are read left to right. When a digit is bigger than the one before it,
/// the previous digit was wrongly added and has to be taken back twice
/// (`IV` = 1 + 5 - 2).
pub fn roman_to_int(numeral: &str) -> Result<u32, RomanError> {
    if numeral.is_empty() {
        return Err(RomanError::Empty);
    }

    let mut total = 0u32;
    let mut previous = 0u32;
    for digit in numeral.chars() {
        let value = digit_value(digit).ok_or_else(|| RomanError::InvalidDigit {
            numeral: numeral.to_string(),
            digit,
        })?;
        let next = if value > previous {
            total
                .checked_add(value)
                .and_then(|t| t.checked_sub(2 * previous))
        } else {
            total.checked_add(value)
        };
        total = next.ok_or_else(|| RomanError::OutOfRange(numeral.to_string()))?;
        previous = value;
    }

    Ok(total)
}

/// Format a number as an uppercase roman numeral.
///
/// `0` has no roman representation and yields an empty string.
pub fn int_to_roman(mut value: u32) -> String {
    let mut out = String::new();
    for (step, digits) in TABLE.iter() {
        while value >= *step {
            out.push_str(digits);
            value -= step;
        }
    }
    out
}

/// Parse a heading numeral that is either roman (`XIV`) or arabic (`14`).
pub fn parse_numeral(numeral: &str) -> Result<u32, RomanError> {
    if !numeral.is_empty() && numeral.chars().all(|c| c.is_ascii_digit()) {
        return match numeral.parse::<u32>() {
            Ok(0) | Err(_) => Err(RomanError::OutOfRange(numeral.to_string())),
            Ok(n) => Ok(n),
        };
    }
    roman_to_int(numeral)
}
