//! Card types: the brand tag and the validated card number.
//!
//! `CardBrand` is the seven-way classification the dashboard derives on every
//! keystroke; `ValidatedCard` is the result of the full validation pipeline,
//! held in a fixed-size array that is zeroed on drop.

use std::fmt;
use zeroize::Zeroize;

/// Card networks recognized by the prefix classifier.
///
/// `Unknown` is a first-class tag, not an error: classification is total and
/// any prefix outside the rule table maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// Discover - prefix 6011, 65
    Discover,
    /// Diners Club - prefix 300-305, 36, 38
    DinersClub,
    /// JCB - prefix 2131, 1800, 35
    Jcb,
    /// No rule matched the prefix.
    Unknown,
}

impl CardBrand {
    /// Returns the digit counts accepted for this brand under the 16-digit
    /// input policy (see DESIGN.md).
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16],
            Self::DinersClub => &[14, 16],
            Self::Jcb => &[15, 16],
            Self::Unknown => &[12, 13, 14, 15, 16],
        }
    }

    /// Returns true if the given digit count is valid for this brand.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Human-readable name, as shown next to the brand icon in the UI.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Lowercase tag used in API payloads and icon lookups.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::DinersClub => "diners",
            Self::Jcb => "jcb",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for any tag other than `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Parses a brand from its lowercase tag or display name.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" | "mc" => Some(Self::Mastercard),
            "amex" | "american express" => Some(Self::Amex),
            "discover" => Some(Self::Discover),
            "diners" | "dinersclub" | "diners club" => Some(Self::DinersClub),
            "jcb" => Some(Self::Jcb),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maximum number of digits accepted from the card input.
///
/// Matches the dashboard input mask: 16 digits, 19 characters with the
/// grouping spaces included.
pub const MAX_PAN_DIGITS: usize = 16;

/// Minimum number of digits for a card number to enter the pipeline.
pub const MIN_PAN_DIGITS: usize = 12;

/// A card number that passed the full validation pipeline.
///
/// The digits live in a fixed-size array zeroed when the value is dropped.
/// `Debug` and `Display` are masked; the full number is only reachable
/// through [`ValidatedCard::number`].
#[derive(Clone)]
pub struct ValidatedCard {
    brand: CardBrand,
    digits: [u8; MAX_PAN_DIGITS],
    digit_count: u8,
}

impl ValidatedCard {
    /// Internal constructor; use [`crate::validate`] to create instances.
    #[inline]
    pub(crate) fn new(brand: CardBrand, digits: [u8; MAX_PAN_DIGITS], digit_count: u8) -> Self {
        Self {
            brand,
            digits,
            digit_count,
        }
    }

    /// The classified brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Last four digits, safe for display and logging.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.digit_count as usize;
        let start = len.saturating_sub(4);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// First `length` digits (capped at 8), identifying the issuer.
    #[inline]
    pub fn bin(&self, length: usize) -> String {
        let bin_len = length.min(8).min(self.digit_count as usize);
        self.digits[..bin_len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Six-digit BIN (traditional format).
    #[inline]
    pub fn bin6(&self) -> String {
        self.bin(6)
    }

    /// Eight-digit BIN (modern format).
    #[inline]
    pub fn bin8(&self) -> String {
        self.bin(8)
    }

    /// The full card number.
    ///
    /// Exposes the PAN; never log the result. Use [`ValidatedCard::masked`]
    /// for display.
    #[inline]
    pub fn number(&self) -> String {
        self.digits[..self.digit_count as usize]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Masked form showing only the last four digits.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }

    /// Masked form showing the six-digit BIN and the last four digits.
    #[inline]
    pub fn masked_with_bin(&self) -> String {
        crate::mask::mask_with_bin(self)
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_valid_lengths() {
        assert!(CardBrand::Visa.is_valid_length(16));
        assert!(CardBrand::Visa.is_valid_length(13));
        assert!(!CardBrand::Visa.is_valid_length(15));

        assert!(CardBrand::Amex.is_valid_length(15));
        assert!(!CardBrand::Amex.is_valid_length(16));

        assert!(CardBrand::Mastercard.is_valid_length(16));
        assert!(!CardBrand::Mastercard.is_valid_length(15));

        assert!(CardBrand::DinersClub.is_valid_length(14));
        assert!(CardBrand::Unknown.is_valid_length(12));
        assert!(!CardBrand::Unknown.is_valid_length(17));
    }

    #[test]
    fn brand_names_and_tags() {
        assert_eq!(CardBrand::Visa.name(), "Visa");
        assert_eq!(CardBrand::Amex.name(), "American Express");
        assert_eq!(CardBrand::Mastercard.to_string(), "Mastercard");
        assert_eq!(CardBrand::DinersClub.tag(), "diners");
        assert_eq!(CardBrand::Unknown.tag(), "unknown");
    }

    #[test]
    fn brand_from_tag_round_trip() {
        for brand in [
            CardBrand::Visa,
            CardBrand::Mastercard,
            CardBrand::Amex,
            CardBrand::Discover,
            CardBrand::DinersClub,
            CardBrand::Jcb,
            CardBrand::Unknown,
        ] {
            assert_eq!(CardBrand::from_tag(brand.tag()), Some(brand));
        }
        assert_eq!(CardBrand::from_tag("maestro"), None);
    }

    #[test]
    fn is_known() {
        assert!(CardBrand::Visa.is_known());
        assert!(!CardBrand::Unknown.is_known());
    }

    fn make_card(slice: &[u8]) -> ValidatedCard {
        let mut digits = [0u8; MAX_PAN_DIGITS];
        digits[..slice.len()].copy_from_slice(slice);
        ValidatedCard::new(CardBrand::Visa, digits, slice.len() as u8)
    }

    #[test]
    fn last_four() {
        let card = make_card(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 4]);
        assert_eq!(card.last_four(), "1234");
    }

    #[test]
    fn bin_accessors() {
        let card = make_card(&[4, 5, 3, 2, 1, 1, 9, 9, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(card.bin6(), "453211");
        assert_eq!(card.bin8(), "45321199");
    }

    #[test]
    fn debug_is_masked() {
        let card = make_card(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let debug = format!("{:?}", card);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("****"));
    }

    #[test]
    fn card_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCard>();
        assert_send_sync::<CardBrand>();
    }
}
