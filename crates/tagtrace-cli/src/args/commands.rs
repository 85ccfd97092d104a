use clap::Subcommand;
use std::path::PathBuf;

use tagtrace_engine::Statistic;
use tagtrace_types::MessageLevel;

use crate::types::ViewerMode;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compute string statistics over a column or field of an input")]
    Stats {
        #[arg(help = "Input file (.csv, .jsonl, or plain lines); stdin when omitted")]
        input: Option<PathBuf>,

        #[arg(long, help = "CSV column to analyze, by header name or zero-based index")]
        column: Option<String>,

        #[arg(long, help = "JSONL top-level field to analyze")]
        field: Option<String>,

        #[arg(
            long = "stat",
            value_name = "KIND",
            help = "Statistic to compute (repeatable); all when omitted"
        )]
        stats: Vec<Statistic>,
    },

    #[command(about = "View a log file as per-tag tabs")]
    View {
        #[arg(help = "Log file, or a directory to pick the newest log file from")]
        path: PathBuf,

        #[arg(long, help = "Keep watching for appended lines and newer files")]
        follow: bool,

        #[arg(long, help = "Hide messages below this level")]
        min_level: Option<MessageLevel>,

        #[arg(long, value_name = "REGEX", help = "Only show tags matching this pattern")]
        tag: Option<String>,

        #[arg(
            long,
            default_value = "tui",
            help = "Display mode: tui (interactive) or console (streaming text)"
        )]
        mode: ViewerMode,
    },

    #[command(about = "Show the effective configuration")]
    Config,
}
