//! Integration tests exercising the public API end to end.

use fraudshield::store::TransactionStore;
use fraudshield::transaction::{Prediction, Transaction, TransactionInput};
use fraudshield::{brand, is_valid, luhn, normalize, validate, CardBrand, ValidationError};

#[test]
fn full_pipeline_visa() {
    let raw = "4111-1111-1111-1111";

    let n = normalize::normalize(raw);
    assert_eq!(n.digits, "4111111111111111");
    assert_eq!(n.formatted, "4111 1111 1111 1111");

    assert_eq!(brand::classify(&n.digits), CardBrand::Visa);
    assert!(luhn::check(&n.digits));

    let card = validate(raw).unwrap();
    assert_eq!(card.brand(), CardBrand::Visa);
    assert_eq!(card.masked(), "**** **** **** 1111");
    assert_eq!(card.masked_with_bin(), "4111 11** **** 1111");
}

#[test]
fn luhn_reference_vectors() {
    assert!(luhn::check("4539148803436467"));
    assert!(!luhn::check("4539148803436468"));
    assert!(!luhn::check(""));
    assert!(!luhn::check("abcd"));
    assert!(!luhn::check("4539 1488 0343 6467")); // strict: digits only
}

#[test]
fn brand_reference_vectors() {
    assert_eq!(brand::classify("4111111111111111"), CardBrand::Visa);
    assert_eq!(brand::classify("5500000000000004"), CardBrand::Mastercard);
    assert_eq!(brand::classify("340000000000009"), CardBrand::Amex);
    assert_eq!(brand::classify("9999999999999999"), CardBrand::Unknown);
}

#[test]
fn normalize_strips_junk_and_caps() {
    let n = normalize::normalize("41x11 1111--1111//1111999");
    assert_eq!(n.digits.len(), 16);
    assert!(n.digits.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn normalize_is_idempotent_on_formatted_output() {
    let n = normalize::normalize("378282246310005");
    let again = normalize::normalize(&n.formatted);
    assert_eq!(again.digits, n.digits);
    assert_eq!(again.formatted, n.formatted);
}

#[test]
fn validation_errors_are_descriptive() {
    assert_eq!(validate("").unwrap_err(), ValidationError::Empty);
    assert_eq!(
        validate("4111111111111112").unwrap_err(),
        ValidationError::InvalidChecksum
    );

    let err = validate("4111111111111112").unwrap_err().to_string();
    assert!(err.to_lowercase().contains("checksum"));
}

#[test]
fn processor_test_cards_validate() {
    for card in [
        "4111111111111111",
        "4012888888881881",
        "4222222222222",
        "5500000000000004",
        "5105105105105100",
        "378282246310005",
        "371449635398431",
        "6011111111111117",
        "6011000990139424",
        "30569309025904",
        "3530111333300000",
    ] {
        assert!(is_valid(card), "{card} should validate");
    }
}

#[test]
fn deterministic_generation_round_trips() {
    for b in [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
        CardBrand::DinersClub,
        CardBrand::Jcb,
    ] {
        let card = fraudshield::generate::generate_card_deterministic(b);
        assert!(is_valid(&card), "{b:?}: {card}");
        assert_eq!(brand::classify(&card), b);
    }
}

#[test]
fn transaction_lifecycle() {
    let mut store = TransactionStore::new();

    let txn = Transaction::new(
        "txn-0001",
        TransactionInput {
            amount: 75_000.0,
            time: "2026-08-29T02:15".to_string(),
            location: "Mumbai, India".to_string(),
            merchant: "Electronics Bazaar".to_string(),
        },
        Prediction::new(true, 0.87, "large amount at unusual hour"),
    )
    .unwrap();

    store.upsert(txn);
    assert_eq!(store.len(), 1);

    let found = store.search("bazaar");
    assert_eq!(found.len(), 1);
    assert!(found[0].prediction.fraudulent);

    let stats = store.stats();
    assert_eq!(stats.flagged, 1);
    assert_eq!(stats.flagged_rate, 1.0);

    store.delete("txn-0001");
    assert!(store.is_empty());
}
