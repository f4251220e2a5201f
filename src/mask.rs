//! Masked display forms for card numbers.
//!
//! The dashboard shows masked numbers in the same shape it formats them:
//! digits grouped in fours with spaces, exactly what
//! [`crate::normalize::normalize`] produces. Masking keeps that grouping and
//! stars every digit that is not allowed to show. Full card numbers never
//! leave [`crate::ValidatedCard::number`].

use crate::normalize;
use crate::ValidatedCard;

const GROUP: usize = 4;

/// Stars out `digits`, keeping `show_first` leading and `show_last` trailing
/// positions visible, grouped in fours.
fn mask_digits(digits: &[u8], show_first: usize, show_last: usize) -> String {
    let len = digits.len();
    let hidden_end = len.saturating_sub(show_last);

    let mut out = String::with_capacity(len + len / GROUP);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && i % GROUP == 0 {
            out.push(' ');
        }
        if i < show_first || i >= hidden_end {
            out.push((b'0' + d) as char);
        } else {
            out.push('*');
        }
    }
    out
}

/// Masks a validated card showing only the last four digits.
///
/// Format: `**** **** **** 1234`, matching the dashboard's grouped display.
///
/// # Example
///
/// ```
/// use fraudshield::validate;
///
/// let card = validate("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.masked(), "**** **** **** 1111");
/// ```
#[inline]
pub fn mask_card(card: &ValidatedCard) -> String {
    mask_digits(card.digits(), 0, 4)
}

/// Masks a validated card keeping the six-digit BIN and last four visible.
///
/// Format: `4111 11** **** 1111`. Acceptable for some server-side logging.
/// Cards of ten digits or fewer fall back to [`mask_card`]; showing BIN plus
/// last four would leave nothing hidden.
///
/// # Example
///
/// ```
/// use fraudshield::validate;
///
/// let card = validate("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.masked_with_bin(), "4111 11** **** 1111");
/// ```
#[inline]
pub fn mask_with_bin(card: &ValidatedCard) -> String {
    let digits = card.digits();
    if digits.len() <= 10 {
        return mask_card(card);
    }
    mask_digits(digits, 6, 4)
}

/// Masks a raw card number string without validating it.
///
/// Runs the input through the normalizer first (strip non-digits, cap at 16),
/// then masks like [`mask_card`]. Inputs of four digits or fewer are starred
/// completely. Prefer [`mask_card`] when a validated card is available.
#[inline]
pub fn mask_string(input: &str) -> String {
    let normalized = normalize::normalize(input);
    let digits: Vec<u8> = normalized.digits.bytes().map(|b| b - b'0').collect();

    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }
    mask_digits(&digits, 0, 4)
}

/// Constant-time comparison of two byte slices.
///
/// Takes the same time regardless of where (or whether) the inputs differ;
/// use when comparing card numbers or tokens.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |diff, (x, y)| diff | (x ^ y))
        == 0
}

/// Constant-time comparison of two strings.
#[inline]
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
