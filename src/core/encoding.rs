use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::encoders::algorithms::errors::{AlphabetError, DecodeError};
use crate::encoders::radix;
use crate::features::hashing::Fnv1Hasher;

/// Number of symbols in every base56 alphabet.
pub const ALPHABET_LEN: usize = 56;

pub(crate) const RADIX: u64 = ALPHABET_LEN as u64;

/// Numerals plus ASCII letters except `[DIOQio]`.
pub const STD_ALPHABET: &str = "0123456789ABCEFGHJKLMNPRSTUVWXYZabcdefghjklmnpqrstuvwxyz";

/// Numerals 2-9, lowercase then uppercase, without `[01lIoO]`.
pub const ALT_ALPHABET: &str = "23456789abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Numerals 2-9, uppercase then lowercase, without `[01IOlo]`.
pub const PY3_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";

/// The standard encoding, used by the crate-level `encode`/`decode`/`hashf!`.
pub static STD: LazyLock<Encoding> = LazyLock::new(|| Encoding::from_valid(STD_ALPHABET));

/// Digit-compatible with the PHP and Java base56 ports.
pub static ALT: LazyLock<Encoding> = LazyLock::new(|| Encoding::from_valid(ALT_ALPHABET));

/// Digit-compatible with the Python 3 base56 port.
pub static PY3: LazyLock<Encoding> = LazyLock::new(|| Encoding::from_valid(PY3_ALPHABET));

/// A base56 alphabet bound to its inverse lookup.
///
/// Symbols are stored least significant value first: `symbols[0]` is the zero
/// digit. Once built an `Encoding` is immutable and can be shared across
/// threads freely.
#[derive(Clone, PartialEq, Eq)]
pub struct Encoding {
    symbols: Vec<char>,
    values: HashMap<char, u64>,
}

impl Encoding {
    /// Creates an encoding from a string of exactly 56 distinct characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is not 56 characters long or contains
    /// a character more than once.
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if symbols.len() != ALPHABET_LEN {
            return Err(AlphabetError::Length {
                actual: symbols.len(),
            });
        }

        let mut values = HashMap::with_capacity(ALPHABET_LEN);
        for (i, &c) in symbols.iter().enumerate() {
            if values.insert(c, i as u64).is_some() {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
        }

        Ok(Encoding { symbols, values })
    }

    /// Builds one of the predefined alphabets, which are known to be valid.
    fn from_valid(alphabet: &'static str) -> Self {
        let symbols: Vec<char> = alphabet.chars().collect();
        let values = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u64))
            .collect();
        Encoding { symbols, values }
    }

    /// Encodes `value` as a base56 string. Zero encodes to `""`.
    pub fn encode(&self, value: u64) -> String {
        radix::encode(value, self)
    }

    /// Decodes a base56 string produced by [`Encoding::encode`].
    ///
    /// The empty string decodes to zero. Inputs longer than 64 bits wrap.
    pub fn decode(&self, encoded: &str) -> Result<u64, DecodeError> {
        radix::decode(encoded, self)
    }

    /// Decodes like [`Encoding::decode`] but rejects values that overflow u64.
    pub fn decode_checked(&self, encoded: &str) -> Result<u64, DecodeError> {
        radix::decode_checked(encoded, self)
    }

    /// Formats `args`, hashes the bytes with 64-bit FNV-1 and encodes the sum.
    ///
    /// ```
    /// use base56::PY3;
    ///
    /// let id = PY3.hashf(format_args!("{}:{:04X}:{:08X}", "one", 2, 123456789));
    /// assert_eq!(id, "FTcJJsXHDhs");
    /// ```
    pub fn hashf(&self, args: fmt::Arguments<'_>) -> String {
        self.encode(Fnv1Hasher::sum_fmt(args))
    }

    /// The alphabet, least significant digit first.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns true if `c` is a digit of this encoding.
    pub fn contains(&self, c: char) -> bool {
        self.values.contains_key(&c)
    }

    pub(crate) fn symbol(&self, digit: usize) -> char {
        self.symbols[digit]
    }

    pub(crate) fn value_of(&self, c: char) -> Option<u64> {
        self.values.get(&c).copied()
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoding")
            .field(&self.symbols.iter().collect::<String>())
            .finish()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Encoding {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
