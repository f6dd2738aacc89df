use crate::cli::{args::ListArgs, config::encoding_name, global::GlobalArgs};
use base56::EncodingRegistry;

pub fn handle(
    args: ListArgs,
    global: &GlobalArgs,
    config: &EncodingRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.names_only {
        for name in config.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let selected = encoding_name(global, config).to_ascii_lowercase();

    println!("Available encodings:\n");
    for (name, encoding_config) in &config.encodings {
        let marker = if *name == selected { "*" } else { " " };
        let description = encoding_config.description.as_deref().unwrap_or("");
        println!(
            "{} {:<10} {}  {}",
            marker, name, encoding_config.chars, description
        );
    }

    Ok(())
}
