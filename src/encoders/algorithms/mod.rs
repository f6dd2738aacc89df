pub mod errors;
pub mod radix;

// Re-export error types for public API
pub use errors::{
    AlphabetError, DecodeError, EncodingNotFoundError, RegistryError, find_closest_encoding,
};
