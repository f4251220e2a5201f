//! # fraudshield
//!
//! Core library behind the FraudShield demo dashboard: card number
//! normalization, brand detection, Luhn validation, synthetic card
//! generation, and the transaction-history plumbing (store, stats, and the
//! prediction-service boundary). Demo tool only; nothing here talks to real
//! payment networks.
//!
//! ## Quick Start
//!
//! ```rust
//! use fraudshield::{validate, is_valid, CardBrand};
//!
//! // Validate a card number
//! let card = validate("4111-1111-1111-1111").unwrap();
//! assert_eq!(card.brand(), CardBrand::Visa);
//! assert_eq!(card.last_four(), "1111");
//!
//! // Safe for logging - never exposes full card number
//! println!("Card: {}", card.masked()); // "**** **** **** 1111"
//!
//! // Quick boolean check
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Normalization and Brand Detection
//!
//! ```rust
//! use fraudshield::{brand, normalize, CardBrand};
//!
//! // As-you-type cleanup: strip junk, cap at 16 digits, group in fours
//! let n = normalize::normalize("4111 11x11-1111abc1111");
//! assert_eq!(n.digits, "4111111111111111");
//! assert_eq!(n.formatted, "4111 1111 1111 1111");
//!
//! // Brand from the leading digits alone; no checksum involved
//! assert_eq!(brand::classify("4111111111111111"), CardBrand::Visa);
//! assert_eq!(brand::classify("9999999999999999"), CardBrand::Unknown);
//! ```
//!
//! ## Luhn Checks
//!
//! ```rust
//! use fraudshield::luhn;
//!
//! // Strict: digits only, fails closed on anything else
//! assert!(luhn::check("4539148803436467"));
//! assert!(!luhn::check("4539148803436468"));
//! assert!(!luhn::check(""));
//! assert!(!luhn::check("abcd"));
//! ```
//!
//! ## Transactions
//!
//! ```rust
//! use fraudshield::store::TransactionStore;
//! use fraudshield::transaction::{Prediction, Transaction, TransactionInput};
//!
//! let mut store = TransactionStore::new();
//! let txn = Transaction::new(
//!     "txn-1a2b3c4d",
//!     TransactionInput {
//!         amount: 1250.0,
//!         time: "2026-08-29T14:30".to_string(),
//!         location: "Mumbai, India".to_string(),
//!         merchant: "Online Store".to_string(),
//!     },
//!     Prediction::new(false, 0.12, "amount within normal range"),
//! ).unwrap();
//! store.upsert(txn);
//!
//! let stats = store.stats();
//! assert_eq!(stats.total, 1);
//! assert_eq!(stats.flagged, 0);
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length | CVV |
//! |-------|--------|--------|-----|
//! | Visa | 4 | 13, 16 | 3 |
//! | Mastercard | 51-55 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover | 6011, 65 | 16 | 3 |
//! | Diners Club | 300-305, 36, 38 | 14, 16 | 3 |
//! | JCB | 2131, 1800, 35 | 15, 16 | 3 |
//!
//! Anything else classifies as `Unknown`; a Luhn-valid unknown-prefix
//! number of plausible length still validates.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for transaction and stats types |
//! | `generate` | Random card and CVV generation |
//! | `cli` | Command-line tool |
//! | `server` | REST API server |
//!
//! ## Security
//!
//! - Card numbers stored in fixed-size arrays, not heap strings
//! - Automatic memory zeroization when `ValidatedCard` is dropped
//! - `Debug` and `Display` show masked numbers only
//! - Constant-time comparison for sensitive operations
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod card;
pub mod cvv;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod model;
pub mod normalize;
pub mod store;
pub mod transaction;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardBrand, ValidatedCard, MAX_PAN_DIGITS, MIN_PAN_DIGITS};
pub use error::ValidationError;
pub use validate::{is_valid, validate, validate_digits};

// Re-export mask utilities
pub use mask::{constant_time_eq, constant_time_eq_str, mask_string};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5500000000000004";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3530111333300000";

    #[test]
    fn test_brand_validation() {
        assert_eq!(validate(VISA_16).unwrap().brand(), CardBrand::Visa);
        assert_eq!(validate(VISA_13).unwrap().brand(), CardBrand::Visa);
        assert_eq!(validate(MASTERCARD).unwrap().brand(), CardBrand::Mastercard);
        assert_eq!(validate(AMEX).unwrap().brand(), CardBrand::Amex);
        assert_eq!(validate(DISCOVER).unwrap().brand(), CardBrand::Discover);
        assert_eq!(validate(DINERS).unwrap().brand(), CardBrand::DinersClub);
        assert_eq!(validate(JCB).unwrap().brand(), CardBrand::Jcb);
    }

    #[test]
    fn test_formatted_input() {
        let card = validate("4111-1111-1111-1111").unwrap();
        assert_eq!(card.brand(), CardBrand::Visa);

        let card = validate("4111 1111 1111 1111").unwrap();
        assert_eq!(card.brand(), CardBrand::Visa);

        let card = validate("4111-1111 1111-1111").unwrap();
        assert_eq!(card.brand(), CardBrand::Visa);
    }

    #[test]
    fn test_pipeline_mirrors_core_checks() {
        // validate() and the bare luhn/brand functions agree
        assert!(luhn::check(VISA_16));
        assert_eq!(brand::classify(VISA_16), CardBrand::Visa);
        assert!(is_valid(VISA_16));

        assert!(!luhn::check("4111111111111112"));
        assert!(!is_valid("4111111111111112"));
    }

    #[test]
    fn test_invalid_checksum() {
        let err = validate("4111111111111112").unwrap_err();
        assert_eq!(err, ValidationError::InvalidChecksum);
    }

    #[test]
    fn test_is_valid_rejects_junk() {
        assert!(!is_valid(""));
        assert!(!is_valid("abcd"));
        assert!(!is_valid("4111"));
    }

    #[test]
    fn test_masking() {
        let card = validate(VISA_16).unwrap();
        let masked = card.masked();
        assert!(!masked.contains(VISA_16));
        assert!(masked.contains("1111"));
        assert!(masked.contains('*'));
    }

    #[test]
    fn test_debug_is_safe() {
        let card = validate(VISA_16).unwrap();
        let debug = format!("{:?}", card);
        assert!(!debug.contains(VISA_16));
    }

    #[test]
    fn test_normalize_then_validate() {
        let n = normalize::normalize("  4111-1111-1111-1111!!");
        assert!(is_valid(&n.digits));
        assert!(is_valid(&n.formatted));
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCard>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<CardBrand>();
        assert_send_sync::<store::TransactionStore>();
        assert_send_sync::<transaction::Transaction>();
    }
}
