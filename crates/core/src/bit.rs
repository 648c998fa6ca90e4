//! Binary digits of an encoded sequence.
//!
//! The core's encoded output is an abstract sequence of [`Bit`] values, one
//! per element. Packing them into bytes is the caller's business.
//!
//! Textual form uses `'0'` and `'1'`, matching how codewords are usually
//! printed:
//!
//! ```
//! use huffcode_core::bit::{parse_bits, format_bits, Bit};
//!
//! let bits = parse_bits("0110").unwrap();
//! assert_eq!(bits, vec![Bit::Zero, Bit::One, Bit::One, Bit::Zero]);
//! assert_eq!(format_bits(&bits), "0110");
//! ```

use std::fmt;

use crate::error::{BitError, Result};

/// A single binary digit.
///
/// `Zero` means "go left" and `One` means "go right" during both code
/// derivation and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// The textual digit for this bit.
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a string of `'0'`/`'1'` characters into bits.
///
/// # Errors
/// Returns `BitError::InvalidDigit` for the first character that is not a
/// binary digit. Whitespace is not skipped.
pub fn parse_bits(text: &str) -> Result<Vec<Bit>> {
    text.chars()
        .enumerate()
        .map(|(position, digit)| match digit {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(BitError::InvalidDigit { digit, position }.into()),
        })
        .collect()
}

/// Render bits as a string of `'0'`/`'1'` characters.
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|bit| bit.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_and_format() {
        let bits = parse_bits("10010").unwrap();
        assert_eq!(bits.len(), 5);
        assert_eq!(bits[0], Bit::One);
        assert_eq!(format_bits(&bits), "10010");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_bits("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_other_digits() {
        let result = parse_bits("01 1");
        assert!(matches!(
            result,
            Err(Error::Bit(BitError::InvalidDigit {
                digit: ' ',
                position: 2
            }))
        ));
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(Bit::from(true), Bit::One);
        assert_eq!(Bit::from(false), Bit::Zero);
        assert!(bool::from(Bit::One));
        assert!(!bool::from(Bit::Zero));
    }
}
