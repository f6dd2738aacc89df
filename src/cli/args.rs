use clap::Args;

/// Arguments for encoding integers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Unsigned 64-bit values (reads one per line from stdin if none given)
    #[arg(value_name = "VALUE")]
    pub values: Vec<u64>,
}

/// Arguments for decoding base56 strings
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Base56 strings (reads one per line from stdin if none given)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Fail on values that do not fit in 64 bits instead of wrapping
    #[arg(long)]
    pub checked: bool,
}

/// Arguments for hashing a formatted string
#[derive(Args, Debug)]
pub struct HashArgs {
    /// printf-style template, e.g. '%s:%04X:%08X'
    pub format: String,

    /// Values substituted into the template (put other values starting
    /// with '-' after `--`)
    #[arg(value_name = "ARG", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// Arguments for listing encodings
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print names only
    #[arg(short = 'n', long)]
    pub names_only: bool,
}
