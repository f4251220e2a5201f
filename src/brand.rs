//! Card brand classification from number prefixes.
//!
//! The dashboard shows a brand icon as soon as enough digits are typed.
//! Classification is a pure function of the normalized digit string's prefix:
//! one ordered rule table, first match wins, `Unknown` when nothing matches.
//! Earlier revisions of the app kept near-duplicate regex lists per
//! component; this table is the single source of truth.

use crate::CardBrand;

/// Classifies a normalized digit string by its prefix.
///
/// Total: always returns a tag, never fails. Input is expected to be the
/// `digits` output of [`crate::normalize::normalize`]; anything that does not
/// start with a known digit prefix (including the empty string) classifies as
/// [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use fraudshield::{brand, CardBrand};
///
/// assert_eq!(brand::classify("4111111111111111"), CardBrand::Visa);
/// assert_eq!(brand::classify("5500000000000004"), CardBrand::Mastercard);
/// assert_eq!(brand::classify("340000000000009"), CardBrand::Amex);
/// assert_eq!(brand::classify("9999999999999999"), CardBrand::Unknown);
/// ```
#[inline]
pub fn classify(normalized: &str) -> CardBrand {
    // Rule order is authoritative; first listed wins.
    match normalized.as_bytes() {
        // Visa: 4
        [b'4', ..] => CardBrand::Visa,

        // Mastercard: 51-55
        [b'5', b'1'..=b'5', ..] => CardBrand::Mastercard,

        // American Express: 34, 37
        [b'3', b'4', ..] | [b'3', b'7', ..] => CardBrand::Amex,

        // Discover: 6011, 65
        [b'6', b'0', b'1', b'1', ..] | [b'6', b'5', ..] => CardBrand::Discover,

        // Diners Club: 300-305, 36, 38
        [b'3', b'0', b'0'..=b'5', ..] | [b'3', b'6', ..] | [b'3', b'8', ..] => {
            CardBrand::DinersClub
        }

        // JCB: 2131, 1800, 35
        [b'2', b'1', b'3', b'1', ..] | [b'1', b'8', b'0', b'0', ..] | [b'3', b'5', ..] => {
            CardBrand::Jcb
        }

        _ => CardBrand::Unknown,
    }
}

/// Classifies a pre-parsed digit slice (values 0-9).
///
/// Same rule table as [`classify`]; used by the validation pipeline, which
/// works on extracted digits rather than strings.
#[inline]
pub fn classify_digits(digits: &[u8]) -> CardBrand {
    match digits {
        [4, ..] => CardBrand::Visa,
        [5, 1..=5, ..] => CardBrand::Mastercard,
        [3, 4, ..] | [3, 7, ..] => CardBrand::Amex,
        [6, 0, 1, 1, ..] | [6, 5, ..] => CardBrand::Discover,
        [3, 0, 0..=5, ..] | [3, 6, ..] | [3, 8, ..] => CardBrand::DinersClub,
        [2, 1, 3, 1, ..] | [1, 8, 0, 0, ..] | [3, 5, ..] => CardBrand::Jcb,
        _ => CardBrand::Unknown,
    }
}
