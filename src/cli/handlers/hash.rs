use crate::cli::{args::HashArgs, config::create_encoding, global::GlobalArgs};
use base56::EncodingRegistry;
use base56::features::{Fnv1Hasher, sprintf};

pub fn handle(
    args: HashArgs,
    global: &GlobalArgs,
    config: &EncodingRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = create_encoding(global, config)?;

    let args_ref: Vec<&str> = args.args.iter().map(String::as_str).collect();
    let formatted = sprintf(&args.format, &args_ref);
    tracing::debug!(input = %formatted, "hashing formatted input");

    let sum = Fnv1Hasher::sum(formatted.as_bytes());
    println!("{}", encoding.encode(sum));

    Ok(())
}
