//! Convenient re-exports for common usage.
//!
//! ```
//! use base56::prelude::*;
//!
//! let id = PY3.encode(1540840132);
//! assert_eq!(PY3.decode(&id).unwrap(), 1540840132);
//! ```

pub use crate::{
    ALT, DecodeError, Encoding, EncodingRegistry, PY3, STD, decode, encode, hashf, hashf_with,
};
