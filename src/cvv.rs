//! CVV validation and generation.
//!
//! The card generator in the dashboard produces a card number together with a
//! three-digit CVV; this module validates those codes (3-4 digits, American
//! Express requires 4) and generates them under the `generate` feature.
//! Values are masked in Debug/Display and zeroed on drop, same as card
//! numbers.

use crate::CardBrand;
use std::fmt;

#[cfg(feature = "generate")]
use rand::Rng;

/// A validated CVV code.
#[derive(Clone)]
pub struct ValidatedCvv {
    digits: [u8; 4],
    length: u8,
}

impl ValidatedCvv {
    /// Returns the CVV as a string.
    pub fn as_str(&self) -> String {
        self.digits[..self.length as usize]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Number of digits (3 or 4).
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }

    /// True for the four-digit (Amex) form.
    #[inline]
    pub const fn is_four_digit(&self) -> bool {
        self.length == 4
    }
}

impl fmt::Debug for ValidatedCvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCvv")
            .field("value", &"***")
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for ValidatedCvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.length as usize))
    }
}

impl Drop for ValidatedCvv {
    fn drop(&mut self) {
        self.digits = [0; 4];
    }
}

/// Reasons a CVV fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// The input is empty.
    Empty,
    /// A non-digit character.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Position in the input (0-indexed).
        position: usize,
    },
    /// Not 3 or 4 digits.
    InvalidLength {
        /// Digits provided.
        length: usize,
    },
    /// Wrong length for the card brand.
    WrongLengthForBrand {
        /// The card brand.
        brand: CardBrand,
        /// Digits provided.
        length: usize,
        /// Length this brand requires.
        expected: usize,
    },
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVV is empty"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid character '{}' at position {}",
                character, position
            ),
            Self::InvalidLength { length } => {
                write!(f, "CVV must be 3 or 4 digits, got {}", length)
            }
            Self::WrongLengthForBrand {
                brand,
                length,
                expected,
            } => write!(
                f,
                "{} cards require a {} digit CVV, got {}",
                brand.name(),
                expected,
                length
            ),
        }
    }
}

impl std::error::Error for CvvError {}

/// Digits a brand's CVV must have: 4 for Amex, 3 otherwise.
#[inline]
pub const fn cvv_length_for_brand(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Amex => 4,
        _ => 3,
    }
}

/// Validates a CVV of 3 or 4 digits.
///
/// # Example
///
/// ```
/// use fraudshield::cvv::validate_cvv;
///
/// assert_eq!(validate_cvv("123").unwrap().length(), 3);
/// assert_eq!(validate_cvv("1234").unwrap().length(), 4);
/// assert!(validate_cvv("12").is_err());
/// ```
pub fn validate_cvv(input: &str) -> Result<ValidatedCvv, CvvError> {
    let parsed = parse(input)?;
    if parsed.length < 3 || parsed.length > 4 {
        return Err(CvvError::InvalidLength {
            length: parsed.length as usize,
        });
    }
    Ok(parsed)
}

/// Validates a CVV against a specific brand's length requirement.
///
/// # Example
///
/// ```
/// use fraudshield::cvv::validate_cvv_for_brand;
/// use fraudshield::CardBrand;
///
/// assert!(validate_cvv_for_brand("1234", CardBrand::Amex).is_ok());
/// assert!(validate_cvv_for_brand("123", CardBrand::Amex).is_err());
/// assert!(validate_cvv_for_brand("123", CardBrand::Visa).is_ok());
/// ```
pub fn validate_cvv_for_brand(input: &str, brand: CardBrand) -> Result<ValidatedCvv, CvvError> {
    let parsed = validate_cvv(input)?;
    let expected = cvv_length_for_brand(brand);
    if parsed.length() != expected {
        return Err(CvvError::WrongLengthForBrand {
            brand,
            length: parsed.length(),
            expected,
        });
    }
    Ok(parsed)
}

fn parse(input: &str) -> Result<ValidatedCvv, CvvError> {
    if input.is_empty() {
        return Err(CvvError::Empty);
    }

    let mut digits = [0u8; 4];
    let mut count = 0usize;

    for (pos, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => {
                if count >= 4 {
                    return Err(CvvError::InvalidLength { length: count + 1 });
                }
                digits[count] = (c as u8) - b'0';
                count += 1;
            }
            _ => {
                return Err(CvvError::InvalidCharacter {
                    character: c,
                    position: pos,
                });
            }
        }
    }

    Ok(ValidatedCvv {
        digits,
        length: count as u8,
    })
}

/// Generates a random CVV of the length the brand requires.
#[cfg(feature = "generate")]
pub fn generate_cvv(brand: CardBrand) -> String {
    let mut rng = rand::thread_rng();
    let len = cvv_length_for_brand(brand);
    (0..len)
        .map(|_| (b'0' + rng.gen_range(0..10u8)) as char)
        .collect()
}
