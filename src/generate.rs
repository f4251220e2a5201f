//! Synthetic card generation for demo and test data.
//!
//! The dashboard's "generate card" action fills the form with a synthetic,
//! Luhn-valid 16-digit number and a matching CVV. Everything here is
//! mathematically valid but not connected to any real account.
//!
//! Random generation needs the `generate` feature; the deterministic variants
//! are always available (the test suites lean on them).

use crate::cvv;
use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Generation prefix per brand, chosen from each brand's rule table.
pub const fn prefix_for_brand(brand: CardBrand) -> &'static str {
    match brand {
        CardBrand::Visa => "4",
        CardBrand::Mastercard => "51",
        CardBrand::Amex => "34",
        CardBrand::Discover => "6011",
        CardBrand::DinersClub => "36",
        CardBrand::Jcb => "35",
        // Deliberately outside every rule so the result classifies Unknown.
        CardBrand::Unknown => "9999",
    }
}

/// Default generated length per brand.
const fn default_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Amex => 15,
        CardBrand::DinersClub => 14,
        _ => 16,
    }
}

/// A synthetic card number with its CVV, as produced by the dashboard's
/// generate-card action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    /// Luhn-valid card number.
    pub number: String,
    /// CVV of the length the brand requires.
    pub cvv: String,
}

/// Generates a random valid card number for the given brand.
///
/// # Example
///
/// ```
/// use fraudshield::generate::generate_card;
/// use fraudshield::CardBrand;
///
/// let card = generate_card(CardBrand::Visa);
/// assert!(card.starts_with('4'));
/// assert!(fraudshield::is_valid(&card));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    generate_card_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a random valid card number with the given prefix and length.
///
/// # Panics
///
/// Panics if `prefix` has as many or more digits than `length`.
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix, length, &mut rng)
}

/// Generates a valid card number using a provided RNG.
///
/// Seeded RNGs give reproducible test data.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    assert!(
        prefix.len() < length,
        "prefix length must be less than total length"
    );

    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    while digits.len() < length - 1 {
        digits.push(rng.gen_range(0..10));
    }

    let check = luhn::check_digit(&digits);
    digits.push(check);

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a valid card number deterministically (no randomness).
///
/// Same input, same output; used throughout the tests.
///
/// # Example
///
/// ```
/// use fraudshield::generate::generate_card_deterministic;
/// use fraudshield::CardBrand;
///
/// let card = generate_card_deterministic(CardBrand::Visa);
/// assert!(fraudshield::is_valid(&card));
/// assert_eq!(card, generate_card_deterministic(CardBrand::Visa));
/// ```
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    generate_card_deterministic_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Deterministic generation with a custom prefix: middle digits are zeros,
/// the check digit completes the number.
///
/// # Panics
///
/// Panics if `prefix` has as many or more digits than `length`.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    assert!(
        prefix.len() < length,
        "prefix length must be less than total length"
    );

    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    while digits.len() < length - 1 {
        digits.push(0);
    }

    let check = luhn::check_digit(&digits);
    digits.push(check);

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates `count` random valid card numbers for the given brand.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_card(brand)).collect()
}

/// Generates a synthetic card number plus CVV, mirroring the dashboard's
/// generate-card action.
///
/// # Example
///
/// ```
/// use fraudshield::generate::generate_card_details;
/// use fraudshield::CardBrand;
///
/// let details = generate_card_details(CardBrand::Visa);
/// assert!(fraudshield::is_valid(&details.number));
/// assert_eq!(details.cvv.len(), 3);
/// ```
#[cfg(feature = "generate")]
pub fn generate_card_details(brand: CardBrand) -> CardDetails {
    CardDetails {
        number: generate_card(brand),
        cvv: cvv::generate_cvv(brand),
    }
}
