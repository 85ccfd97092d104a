mod commands;

pub use commands::*;

use clap::Parser;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "tagtrace")]
#[command(about = "Compute string field statistics and view tagged log files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.tagtrace", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
