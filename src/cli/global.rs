use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Encoding to use: std, alt, py3 or a configured name
    /// [default: settings.default_encoding, else std]
    #[arg(short = 'e', long, global = true, value_name = "NAME")]
    pub encoding: Option<String>,

    /// Extra encodings config file, merged over the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}
