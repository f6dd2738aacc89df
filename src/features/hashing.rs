use std::fmt;
use std::hash::Hasher;
use std::io;

/// 64-bit FNV offset basis.
pub const FNV1_OFFSET_BASIS: u64 = 14695981039346656037;

/// 64-bit FNV prime.
pub const FNV1_PRIME: u64 = 1099511628211;

/// Streaming 64-bit FNV-1 hasher.
///
/// This is FNV-1, not FNV-1a: every byte is folded in by multiplying by the
/// prime first and XOR-ing second. The two variants produce different sums
/// and only FNV-1 matches the other base56 ports.
///
/// The hasher accepts input through [`Hasher::write`], [`fmt::Write`] and
/// [`io::Write`], none of which can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1Hasher {
    state: u64,
}

impl Fnv1Hasher {
    /// Creates a hasher whose state starts at the offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV1_OFFSET_BASIS,
        }
    }

    /// Hashes `data` in one call.
    pub fn sum(data: &[u8]) -> u64 {
        let mut hasher = Self::new();
        hasher.write(data);
        hasher.finish()
    }

    /// Hashes the formatted output of `args` without buffering it.
    pub fn sum_fmt(args: fmt::Arguments<'_>) -> u64 {
        let mut hasher = Self::new();
        // Infallible: write_str never returns an error.
        let _ = fmt::Write::write_fmt(&mut hasher, args);
        hasher.finish()
    }
}

impl Default for Fnv1Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1Hasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(FNV1_PRIME);
            self.state ^= u64::from(byte);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

impl fmt::Write for Fnv1Hasher {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Hasher::write(self, s.as_bytes());
        Ok(())
    }
}

impl io::Write for Fnv1Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Hasher::write(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
