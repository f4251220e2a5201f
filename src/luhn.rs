//! Luhn checksum validation for card numbers.
//!
//! The Luhn algorithm ("modulus 10") is the structural validity check applied
//! to every card number entered in the FraudShield dashboard. It is the one
//! invariant-bearing computation of the core: deterministic, dependent only on
//! the digit sequence, and total over its inputs.
//!
//! String-level checks fail closed: empty input or any non-digit character
//! yields `false`, never an error.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Avoids the branch and division in the inner loop.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string against the Luhn algorithm.
///
/// Fails closed: returns `false` for an empty string or any string containing
/// a character outside `0`-`9`. Callers that accept formatted input should
/// normalize first (see [`crate::normalize`]).
///
/// # Example
///
/// ```
/// use fraudshield::luhn;
///
/// assert!(luhn::check("4539148803436467"));
/// assert!(!luhn::check("4539148803436468"));
/// assert!(!luhn::check(""));
/// assert!(!luhn::check("4111 1111 1111 1111")); // not normalized
/// ```
#[inline]
pub fn check(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let mut sum: u32 = 0;
    let mut position = 0usize;

    // Walk right to left; position 0 is the check digit (not doubled).
    for b in input.bytes().rev() {
        if !b.is_ascii_digit() {
            return false;
        }
        let digit = b - b'0';
        if position % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        position += 1;
    }

    sum % 10 == 0
}

/// Checks a pre-parsed digit slice (values 0-9) against the Luhn algorithm.
///
/// Returns `false` for an empty slice.
///
/// # Example
///
/// ```
/// use fraudshield::luhn;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(luhn::check_digits(&digits));
/// ```
#[inline]
pub fn check_digits(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10) for a digit slice.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    let len = digits.len();
    let mut sum: u32 = 0;

    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];
        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    sum
}

/// Computes the check digit that completes a partial card number.
///
/// Given the digits of a card number without its final digit, returns the
/// digit that makes the full number pass [`check_digits`]. This is the other
/// half of the generator/validator round trip.
///
/// # Example
///
/// ```
/// use fraudshield::luhn;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(luhn::check_digit(&partial), 1);
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    let len = digits.len();
    let mut sum: u32 = 0;

    // In the completed number every current digit shifts one position left,
    // so the doubling parity flips relative to `checksum`.
    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];
        if i % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_numbers() {
        assert!(check("4539148803436467"));
        assert!(check("4111111111111111"));
        assert!(check("5500000000000004"));
        assert!(check("378282246310005"));
        assert!(check("6011111111111117"));
        assert!(check("30569309025904"));
    }

    #[test]
    fn single_digit_perturbation_fails() {
        assert!(!check("4539148803436468"));
        assert!(!check("4111111111111112"));
        assert!(!check("5111111111111111"));
    }

    #[test]
    fn fails_closed_on_bad_input() {
        assert!(!check(""));
        assert!(!check("abcd"));
        assert!(!check("4111-1111-1111-1111"));
        assert!(!check("4111 1111 1111 1111"));
        assert!(!check("411111111111111x"));
    }

    #[test]
    fn single_digit() {
        // Sum of a lone zero is 0, which is divisible by 10.
        assert!(check("0"));
        assert!(!check("1"));
        assert!(!check("5"));
    }

    #[test]
    fn digit_slice_check() {
        assert!(check_digits(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(!check_digits(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!check_digits(&[]));
    }

    #[test]
    fn check_digit_completes_number() {
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(check_digit(&partial), 1);

        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(check_digit(&partial), 4);

        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(check_digit(&partial), 5);
    }

    #[test]
    fn check_digit_round_trip() {
        let mut digits = vec![4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6];
        let check = check_digit(&digits);
        digits.push(check);
        assert!(check_digits(&digits));
    }

    #[test]
    fn string_and_slice_agree() {
        let cases = ["4111111111111111", "5500000000000004", "378282246310005"];
        for s in cases {
            let digits: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
            assert_eq!(check(s), check_digits(&digits));
        }
    }

    #[test]
    fn double_table_matches_definition() {
        for i in 0..10u8 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i as usize], expected);
        }
    }
}
