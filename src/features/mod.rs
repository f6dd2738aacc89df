//! Features built on top of the core encoding: FNV-1 hashing for `hashf` and
//! a runtime printf formatter for templates supplied on the command line.

pub mod hashing;
pub mod printf;

pub use hashing::{FNV1_OFFSET_BASIS, FNV1_PRIME, Fnv1Hasher};
pub use printf::sprintf;
