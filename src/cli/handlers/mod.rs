pub mod decode;
pub mod encode;
pub mod hash;
pub mod list;

use std::io::{self, BufRead};

/// Reads stdin line by line with trailing whitespace removed.
fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect()
}
