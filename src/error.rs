//! Error types for the validation pipeline.
//!
//! The pure core (normalize, classify, Luhn) is total and has no errors; the
//! orchestrated pipeline reports exactly why a card number was rejected so
//! the form can surface an actionable message.

use crate::CardBrand;
use std::fmt;

/// Reasons a card number fails the validation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The input contained separators but no digits.
    NoDigits,

    /// Fewer digits than the pipeline minimum.
    TooShort {
        /// Digits provided.
        length: usize,
        /// Minimum required.
        minimum: usize,
    },

    /// More digits than the input policy allows.
    TooLong {
        /// Digits provided.
        length: usize,
        /// Maximum allowed.
        maximum: usize,
    },

    /// A character outside digits and accepted separators.
    InvalidCharacter {
        /// Position in the input string (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The Luhn checksum failed; usually a typo.
    InvalidChecksum,

    /// The digit count is wrong for the classified brand.
    InvalidLengthForBrand {
        /// The classified brand.
        brand: CardBrand,
        /// Digits provided.
        length: usize,
        /// Digit counts the brand accepts.
        valid_lengths: &'static [u8],
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::NoDigits => write!(f, "card number contains no digits"),

            Self::TooShort { length, minimum } => write!(
                f,
                "card number too short: got {} digits, minimum is {}",
                length, minimum
            ),

            Self::TooLong { length, maximum } => write!(
                f,
                "card number too long: got {} digits, maximum is {}",
                length, maximum
            ),

            Self::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "invalid character '{}' at position {} (only digits, spaces, dashes and periods allowed)",
                character.escape_default(),
                position
            ),

            Self::InvalidChecksum => {
                write!(f, "checksum failed (Luhn check) - verify the card number")
            }

            Self::InvalidLengthForBrand {
                brand,
                length,
                valid_lengths,
            } => {
                let valid: Vec<String> = valid_lengths.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "{} cards must have {} digits, got {}",
                    brand.name(),
                    valid.join(" or "),
                    length
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
