use crate::core::encoding::{Encoding, RADIX};

pub use super::errors::DecodeError;

/// Upper bound on base56 digits for a u64 (56^11 < 2^64 < 56^12).
const MAX_DIGITS: usize = 12;

/// Encodes `value` most significant digit first.
///
/// Zero encodes to the empty string; there are never leading zero digits.
pub fn encode(mut value: u64, encoding: &Encoding) -> String {
    let mut digits = Vec::with_capacity(MAX_DIGITS);

    while value > 0 {
        digits.push(encoding.symbol((value % RADIX) as usize));
        value /= RADIX;
    }

    digits.iter().rev().collect()
}

/// Decodes `encoded`, scanning from the least significant (last) character.
///
/// Values longer than 64 bits wrap modulo 2^64.
pub fn decode(encoded: &str, encoding: &Encoding) -> Result<u64, DecodeError> {
    let mut value = 0u64;
    let mut place = 1u64;

    for c in encoded.chars().rev() {
        let digit = encoding.value_of(c).ok_or(DecodeError::InvalidEncoding)?;
        value = value.wrapping_add(digit.wrapping_mul(place));
        place = place.wrapping_mul(RADIX);
    }

    Ok(value)
}

/// Like [`decode`] but fails with [`DecodeError::Overflow`] instead of wrapping.
///
/// The whole input is still validated: an invalid character anywhere yields
/// `InvalidEncoding` even if the digits scanned before it already overflowed.
pub fn decode_checked(encoded: &str, encoding: &Encoding) -> Result<u64, DecodeError> {
    let mut value = 0u64;
    // None once the place value itself no longer fits; only zero digits are
    // representable past that point.
    let mut place = Some(1u64);
    let mut overflowed = false;

    for c in encoded.chars().rev() {
        let digit = encoding.value_of(c).ok_or(DecodeError::InvalidEncoding)?;

        if digit != 0 && !overflowed {
            match place
                .and_then(|p| digit.checked_mul(p))
                .and_then(|term| value.checked_add(term))
            {
                Some(v) => value = v,
                None => overflowed = true,
            }
        }

        place = place.and_then(|p| p.checked_mul(RADIX));
    }

    if overflowed {
        return Err(DecodeError::Overflow);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoding::{ALT, PY3, STD};

    #[test]
    fn test_encode_zero_is_empty() {
        assert_eq!(encode(0, &STD), "");
        assert_eq!(decode("", &STD), Ok(0));
    }

    #[test]
    fn test_encode_single_digits() {
        assert_eq!(encode(1, &STD), "1");
        assert_eq!(encode(55, &STD), "z");
        assert_eq!(encode(56, &STD), "10");
        assert_eq!(encode(55, &ALT), "Z");
        assert_eq!(encode(56, &PY3), "32");
    }

    #[test]
    fn test_encode_max_value() {
        assert_eq!(encode(u64::MAX, &STD), "14psTsTZwTUG");
        assert_eq!(encode(u64::MAX, &ALT), "36PStStzWtuh");
        assert_eq!(encode(u64::MAX, &PY3), "36psTsTZwTUH");
        assert_eq!(encode(u64::MAX, &STD).len(), MAX_DIGITS);
    }

    #[test]
    fn test_decode_max_value() {
        assert_eq!(decode("14psTsTZwTUG", &STD), Ok(u64::MAX));
        assert_eq!(decode_checked("14psTsTZwTUG", &STD), Ok(u64::MAX));
    }

    #[test]
    fn test_decode_leading_zero_digits() {
        assert_eq!(decode("0001n", &STD), Ok(100));
        assert_eq!(decode("2223N", &ALT), Ok(100));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(decode("NoGood", &STD), Err(DecodeError::InvalidEncoding));
        assert_eq!(decode("1 n", &STD), Err(DecodeError::InvalidEncoding));
        // '0' and '1' are not digits in the alt/py3 alphabets
        assert_eq!(decode("10", &ALT), Err(DecodeError::InvalidEncoding));
        assert_eq!(decode("10", &PY3), Err(DecodeError::InvalidEncoding));
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        assert_eq!(decode("1né", &STD), Err(DecodeError::InvalidEncoding));
    }

    #[test]
    fn test_decode_wraps_on_overflow() {
        // 56^12 + (2^64 - 1) mod 2^64
        assert_eq!(decode("114psTsTZwTUG", &STD), Ok(10382066046226923519));
    }

    #[test]
    fn test_decode_checked_overflow() {
        assert_eq!(
            decode_checked("114psTsTZwTUG", &STD),
            Err(DecodeError::Overflow)
        );
        assert_eq!(
            decode_checked("zzzzzzzzzzzz", &STD),
            Err(DecodeError::Overflow)
        );
    }

    #[test]
    fn test_decode_checked_allows_long_zero_prefix() {
        let padded = format!("{}{}", "0".repeat(40), "14psTsTZwTUG");
        assert_eq!(decode_checked(&padded, &STD), Ok(u64::MAX));
        assert_eq!(decode_checked(&"0".repeat(100), &STD), Ok(0));
    }

    #[test]
    fn test_decode_checked_invalid_before_overflow() {
        assert_eq!(
            decode_checked("zzzzzzzzzzzzzo", &STD),
            Err(DecodeError::InvalidEncoding)
        );
        // Overflowing digits are scanned before the bad leading character.
        assert_eq!(
            decode_checked("ozzzzzzzzzzzzz", &STD),
            Err(DecodeError::InvalidEncoding)
        );
    }
}
