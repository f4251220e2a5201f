//! Validation pipeline for card numbers.
//!
//! Combines digit extraction, length bounds, Luhn, and brand classification
//! into one operation. Unlike the pure core functions, the pipeline reports
//! rich errors: the form in front of it needs to say *why* a number was
//! rejected.
//!
//! Single pass, no allocation during parsing: digits land directly in the
//! fixed array that backs [`ValidatedCard`].

use crate::brand::classify_digits;
use crate::card::{ValidatedCard, MAX_PAN_DIGITS, MIN_PAN_DIGITS};
use crate::error::ValidationError;
use crate::luhn;

/// Validates a card number string.
///
/// Accepts spaces, dashes and periods as separators. Performs, in order:
/// digit extraction, length bounds (12..=16), Luhn checksum, brand
/// classification, and the brand-specific length check. An unrecognized
/// prefix is not an error; the card comes back tagged
/// [`crate::CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use fraudshield::{validate, CardBrand};
///
/// let card = validate("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.brand(), CardBrand::Visa);
/// assert_eq!(card.last_four(), "1111");
///
/// assert!(validate("4111-1111-1111-1112").is_err());
/// ```
pub fn validate(input: &str) -> Result<ValidatedCard, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut digits = [0u8; MAX_PAN_DIGITS];
    let mut count = 0usize;

    for (pos, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => {
                if count >= MAX_PAN_DIGITS {
                    return Err(ValidationError::TooLong {
                        length: count + 1,
                        maximum: MAX_PAN_DIGITS,
                    });
                }
                digits[count] = (c as u8) - b'0';
                count += 1;
            }
            ' ' | '-' | '.' => {}
            _ => {
                return Err(ValidationError::InvalidCharacter {
                    position: pos,
                    character: c,
                });
            }
        }
    }

    if count == 0 {
        return Err(ValidationError::NoDigits);
    }

    finish(digits, count)
}

/// Validates a pre-parsed digit slice (values 0-9).
///
/// Skips string parsing; useful when digits were already extracted.
pub fn validate_digits(input: &[u8]) -> Result<ValidatedCard, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    if input.len() > MAX_PAN_DIGITS {
        return Err(ValidationError::TooLong {
            length: input.len(),
            maximum: MAX_PAN_DIGITS,
        });
    }

    let mut digits = [0u8; MAX_PAN_DIGITS];
    digits[..input.len()].copy_from_slice(input);

    finish(digits, input.len())
}

fn finish(digits: [u8; MAX_PAN_DIGITS], count: usize) -> Result<ValidatedCard, ValidationError> {
    if count < MIN_PAN_DIGITS {
        return Err(ValidationError::TooShort {
            length: count,
            minimum: MIN_PAN_DIGITS,
        });
    }

    if !luhn::check_digits(&digits[..count]) {
        return Err(ValidationError::InvalidChecksum);
    }

    let brand = classify_digits(&digits[..count]);

    if !brand.is_valid_length(count) {
        return Err(ValidationError::InvalidLengthForBrand {
            brand,
            length: count,
            valid_lengths: brand.valid_lengths(),
        });
    }

    Ok(ValidatedCard::new(brand, digits, count as u8))
}

/// Quick yes/no check over the full pipeline.
///
/// # Example
///
/// ```
/// use fraudshield::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111 1111 1111 1112"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}
