//! Property-based tests for the deterministic core.

use fraudshield::{brand, is_valid, luhn, normalize, validate, CardBrand};
use proptest::prelude::*;

proptest! {
    /// normalize never emits anything but ASCII digits in `digits`.
    #[test]
    fn normalize_outputs_digits_only(input in ".*") {
        let n = normalize::normalize(&input);
        prop_assert!(n.digits.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(n.digits.len() <= 16);
    }

    /// Feeding normalize its own formatted output changes nothing.
    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize::normalize(&input);
        let twice = normalize::normalize(&once.formatted);
        prop_assert_eq!(&twice.digits, &once.digits);
        prop_assert_eq!(&twice.formatted, &once.formatted);
    }

    /// Formatted output groups digits in fours separated by single spaces.
    #[test]
    fn formatted_groups_in_fours(digits in "[0-9]{1,16}") {
        let n = normalize::normalize(&digits);
        for (i, group) in n.formatted.split(' ').enumerate() {
            prop_assert!(group.len() <= 4);
            if i > 0 {
                // only the final group may be short
                prop_assert!(!group.is_empty());
            }
        }
        let rejoined: String = n.formatted.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(rejoined, n.digits);
    }

    /// Appending the computed check digit always yields a Luhn-valid number.
    #[test]
    fn check_digit_round_trip(digits in prop::collection::vec(0u8..10, 11..=15)) {
        let check = luhn::check_digit(&digits);
        prop_assert!(check < 10);

        let mut full = digits.clone();
        full.push(check);
        prop_assert!(luhn::check_digits(&full));

        // every other check digit fails
        for wrong in 0..10u8 {
            if wrong != check {
                *full.last_mut().unwrap() = wrong;
                prop_assert!(!luhn::check_digits(&full));
            }
        }
    }

    /// The strict string check agrees with the digit-slice check on clean input.
    #[test]
    fn luhn_string_matches_digit_slice(digits in prop::collection::vec(0u8..10, 1..=19)) {
        let s: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
        prop_assert_eq!(luhn::check(&s), luhn::check_digits(&digits));
    }

    /// Any non-digit character fails the strict check, wherever it appears.
    #[test]
    fn luhn_rejects_non_digit_input(prefix in "[0-9]{0,8}", junk in "[^0-9]", suffix in "[0-9]{0,8}") {
        let input = format!("{prefix}{junk}{suffix}");
        prop_assert!(!luhn::check(&input));
    }

    /// Classification is total and only inspects the prefix.
    #[test]
    fn classify_never_panics(input in ".*") {
        let _ = brand::classify(&input);
    }

    /// A classified brand survives digits appended after its prefix.
    #[test]
    fn classify_depends_on_prefix_only(suffix in "[0-9]{0,12}") {
        prop_assert_eq!(brand::classify(&format!("4111{suffix}")), CardBrand::Visa);
        prop_assert_eq!(brand::classify(&format!("5500{suffix}")), CardBrand::Mastercard);
        prop_assert_eq!(brand::classify(&format!("3400{suffix}")), CardBrand::Amex);
        prop_assert_eq!(brand::classify(&format!("6011{suffix}")), CardBrand::Discover);
    }

    /// validate() accepts exactly what its parts accept.
    #[test]
    fn validate_agrees_with_components(digits in "[0-9]{12,16}") {
        let card = validate(&digits);
        let luhn_ok = luhn::check(&digits);
        let b = brand::classify(&digits);
        let length_ok = b.is_valid_length(digits.len());

        prop_assert_eq!(card.is_ok(), luhn_ok && length_ok);
        if let Ok(card) = card {
            prop_assert_eq!(card.brand(), b);
        }
    }

    /// Generated numbers always validate.
    #[test]
    fn generated_prefixes_validate(prefix in "[4-6]", filler in "[0-9]{10,14}") {
        let body = format!("{prefix}{filler}");
        let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
        let check = luhn::check_digit(&digits);
        let full = format!("{body}{check}");
        // brand/length agreement is not guaranteed here, but Luhn is
        prop_assert!(luhn::check(&full));
        let _ = is_valid(&full);
    }
}
