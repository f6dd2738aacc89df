use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contains a character outside the encoding's alphabet.
    #[error("invalid base56 value")]
    InvalidEncoding,
    /// The decoded value does not fit in 64 bits (checked decoding only).
    #[error("base56 value overflows u64")]
    Overflow,
}

/// Errors raised while building an [`Encoding`](crate::Encoding) from an alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must contain exactly 56 characters, got {actual}")]
    Length { actual: usize },
    #[error("duplicate character in alphabet: '{0}'")]
    DuplicateSymbol(char),
}

/// Error when a named encoding is not known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl EncodingNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for EncodingNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encoding '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        write!(f, "; run `base56 list` to see all encodings")
    }
}

impl std::error::Error for EncodingNotFoundError {}

/// Errors from loading or resolving the encoding registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse encodings config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid encoding '{name}': {source}")]
    Alphabet {
        name: String,
        #[source]
        source: AlphabetError,
    },
    #[error(transparent)]
    NotFound(#[from] EncodingNotFoundError),
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching encoding name.
///
/// Only names within a small edit distance are suggested: 1 edit for
/// names shorter than 4 characters, 2 otherwise.
pub fn find_closest_encoding<S: AsRef<str>>(name: &str, available: &[S]) -> Option<String> {
    let threshold = if name.chars().count() < 4 { 1 } else { 2 };

    available
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            (levenshtein_distance(name, candidate), candidate)
        })
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.to_string())
}
