mod args;
mod config;
mod global;
mod handlers;

use args::{DecodeArgs, EncodeArgs, HashArgs, ListArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BASE56_LOG=debug`.
const LOG_ENV: &str = "BASE56_LOG";

#[derive(Parser)]
#[command(name = "base56")]
#[command(version)]
#[command(about = "Encode and decode u64 values as short, unambiguous base56 strings", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode integers as base56
    Encode(EncodeArgs),
    /// Decode base56 strings to integers
    Decode(DecodeArgs),
    /// Format a printf-style template, hash it with FNV-1 and encode the sum
    Hash(HashArgs),
    /// List available encodings
    List(ListArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let use_color = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .compact()
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    // Load encodings configuration with user overrides
    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::Hash(args) => handlers::hash::handle(args, &cli.global, &registry),
        Commands::List(args) => handlers::list::handle(args, &cli.global, &registry),
    }
}
