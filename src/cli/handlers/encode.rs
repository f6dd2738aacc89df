use crate::cli::{args::EncodeArgs, config::create_encoding, global::GlobalArgs};
use base56::EncodingRegistry;
use std::io::{self, BufWriter, Write};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &EncodingRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = create_encoding(global, config)?;

    let values = if args.values.is_empty() {
        parse_values(&super::read_stdin_lines()?)?
    } else {
        args.values
    };
    tracing::debug!(count = values.len(), "encoding values");

    let mut out = BufWriter::new(io::stdout().lock());
    for value in values {
        // Zero encodes to an empty line.
        writeln!(out, "{}", encoding.encode(value))?;
    }
    out.flush()?;

    Ok(())
}

/// Parses one decimal u64 per line, skipping blank lines.
fn parse_values(lines: &[String]) -> Result<Vec<u64>, String> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim()
                .parse::<u64>()
                .map_err(|e| format!("line {}: invalid value '{}': {}", i + 1, line.trim(), e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_skips_blank_lines() {
        let lines = vec!["1".to_string(), "".to_string(), " 100 ".to_string()];
        assert_eq!(parse_values(&lines).unwrap(), vec![1, 100]);
    }

    #[test]
    fn test_parse_values_reports_line() {
        let lines = vec!["1".to_string(), "-5".to_string()];
        let err = parse_values(&lines).unwrap_err();
        assert!(err.starts_with("line 2: invalid value '-5'"));
    }
}
