//! Card input normalization and display formatting.
//!
//! Every keystroke in the card field runs through [`normalize`]: non-digits
//! are stripped, the digit count is capped at [`MAX_PAN_DIGITS`], and the
//! result is regrouped into blocks of four for display. The transform is
//! total (any input yields a result) and idempotent on its own formatted
//! output.

use crate::card::MAX_PAN_DIGITS;

/// Result of normalizing raw card input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Digit-only form, at most [`MAX_PAN_DIGITS`] characters.
    pub digits: String,
    /// Display form: the digits in blocks of four separated by single spaces.
    pub formatted: String,
}

/// Normalizes raw card input for validation and display.
///
/// Removes every character that is not an ASCII digit, truncates at
/// [`MAX_PAN_DIGITS`], and builds the space-grouped display string.
///
/// # Example
///
/// ```
/// use fraudshield::normalize::normalize;
///
/// let n = normalize("4111-1111 1111.1111");
/// assert_eq!(n.digits, "4111111111111111");
/// assert_eq!(n.formatted, "4111 1111 1111 1111");
///
/// // Idempotent: re-normalizing the display form changes nothing
/// assert_eq!(normalize(&n.formatted), n);
///
/// // Total: junk input yields an empty result
/// assert_eq!(normalize("no digits here").digits, "");
/// ```
pub fn normalize(raw: &str) -> Normalized {
    normalize_with_max(raw, MAX_PAN_DIGITS)
}

/// Normalizes with a caller-chosen digit cap.
///
/// The default cap is [`MAX_PAN_DIGITS`]; variants of the input widget have
/// shipped with other bounds, so the cap stays a parameter here.
pub fn normalize_with_max(raw: &str, max_digits: usize) -> Normalized {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect();

    let formatted = group_digits(&digits, " ");

    Normalized { digits, formatted }
}

/// Strips everything but ASCII digits, without a length cap.
///
/// # Example
///
/// ```
/// use fraudshield::normalize::strip_digits;
///
/// assert_eq!(strip_digits("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups a digit string into blocks of four joined by `separator`.
///
/// Non-digit characters in the input are ignored. A trailing partial block is
/// kept as-is, matching the as-you-type behavior of the card field.
///
/// # Example
///
/// ```
/// use fraudshield::normalize::group_digits;
///
/// assert_eq!(group_digits("41111", " "), "4111 1");
/// assert_eq!(group_digits("4111111111111111", "-"), "4111-1111-1111-1111");
/// assert_eq!(group_digits("", " "), "");
/// ```
pub fn group_digits(input: &str, separator: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::with_capacity(digits.len() + (digits.len() / 4) * separator.len());
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push_str(separator);
        }
        result.push(*c);
    }

    result
}
