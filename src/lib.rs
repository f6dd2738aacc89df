//! Encode `u64` values as short, easily digestible base56 strings.
//!
//! Every [`Encoding`] is a 56 character alphabet with confusable characters
//! (such as `0`/`O` and `1`/`I`/`l`) left out. Three alphabets ship with the
//! crate and produce the same strings as the PHP, Java and Python base56
//! ports: [`STD`], [`ALT`] and [`PY3`].
//!
//! ```
//! use base56::{ALT, decode, encode, hashf};
//!
//! assert_eq!(encode(1540840132), "2nfvKM");
//! assert_eq!(decode("2nfvKM").unwrap(), 1540840132);
//! assert_eq!(ALT.encode(100), "3N");
//!
//! // Zero is the empty string, both ways.
//! assert_eq!(encode(0), "");
//! assert_eq!(decode("").unwrap(), 0);
//!
//! assert_eq!(hashf!("{}:{:04X}:{:08X}", "one", 2, 123456789), "ETcHHsXGBhs");
//! ```

use std::fmt;

pub mod core;
pub mod encoders;
pub mod features;
pub mod prelude;

pub use crate::core::config::{EncodingConfig, EncodingRegistry, Settings};
pub use crate::core::encoding::{
    ALPHABET_LEN, ALT, ALT_ALPHABET, Encoding, PY3, PY3_ALPHABET, STD, STD_ALPHABET,
};
pub use encoders::algorithms::{
    AlphabetError, DecodeError, EncodingNotFoundError, RegistryError, find_closest_encoding,
};
pub use features::hashing::Fnv1Hasher;

/// Encodes `value` with the standard encoding.
pub fn encode(value: u64) -> String {
    STD.encode(value)
}

/// Decodes `encoded` with the standard encoding.
///
/// Returns [`DecodeError::InvalidEncoding`] if any character is not a
/// standard base56 digit (`[0-9ABCE-HJ-NPR-Za-hj-np-z]`).
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    STD.decode(encoded)
}

/// Decodes with the standard encoding, rejecting values that overflow u64.
pub fn decode_checked(encoded: &str) -> Result<u64, DecodeError> {
    STD.decode_checked(encoded)
}

/// Hashes formatted arguments with FNV-1 and encodes the sum with the
/// standard encoding. Usually called through [`hashf!`].
pub fn hashf_args(args: fmt::Arguments<'_>) -> String {
    STD.hashf(args)
}

/// Formats its arguments like [`format!`], feeds the result through a 64-bit
/// FNV-1 hash and returns the sum as a standard base56 string.
#[macro_export]
macro_rules! hashf {
    ($($arg:tt)*) => {
        $crate::hashf_args(::std::format_args!($($arg)*))
    };
}

/// Like [`hashf!`] but encodes the sum with the given [`Encoding`].
///
/// ```
/// use base56::{ALT, hashf_with};
///
/// assert_eq!(hashf_with!(ALT, "{}:{:04X}:{:08X}", "one", 2, 123456789), "ftCiiSxhdHS");
/// ```
#[macro_export]
macro_rules! hashf_with {
    ($encoding:expr, $($arg:tt)*) => {
        $crate::Encoding::hashf(&$encoding, ::std::format_args!($($arg)*))
    };
}
