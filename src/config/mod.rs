pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "currency-words")]
#[command(about = "Converts currency amounts into English words")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Stop at the first amount that cannot be converted")]
    pub stop_on_error: bool,

    /// Amounts to convert, e.g. "1234,56". Without any, an interactive prompt starts.
    pub amounts: Vec<String>,
}
