use crate::cli::{args::DecodeArgs, config::create_encoding, global::GlobalArgs};
use base56::EncodingRegistry;
use std::io::{self, BufWriter, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &EncodingRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = create_encoding(global, config)?;

    // An empty line is the encoding of zero, so stdin lines are not filtered.
    let texts = if args.texts.is_empty() {
        super::read_stdin_lines()?
    } else {
        args.texts
    };
    tracing::debug!(count = texts.len(), checked = args.checked, "decoding values");

    // Decode everything first so a bad input leaves stdout empty.
    let values = texts
        .iter()
        .map(|text| {
            let decoded = if args.checked {
                encoding.decode_checked(text)
            } else {
                encoding.decode(text)
            };
            decoded.map_err(|e| format!("cannot decode '{}': {}", text, e))
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let mut out = BufWriter::new(io::stdout().lock());
    for value in values {
        writeln!(out, "{}", value)?;
    }
    out.flush()?;

    Ok(())
}
