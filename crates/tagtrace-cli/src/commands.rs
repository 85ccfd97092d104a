use std::time::Duration;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use regex::Regex;

use tagtrace_runtime::Config;
use tagtrace_runtime::config::expand_tilde;

use super::args::{Cli, Commands};
use super::handlers;
use crate::handlers::view::ViewOptions;
use crate::types::ViewerMode;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let config = Config::load(&data_dir)?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Stats {
            input,
            column,
            field,
            stats,
        } => handlers::stats::handle(
            input.as_deref(),
            column.as_deref(),
            field.as_deref(),
            &stats,
            cli.format,
        ),

        Commands::View {
            path,
            follow,
            min_level,
            tag,
            mode,
        } => {
            let tag_filter = tag
                .map(|pattern| {
                    Regex::new(&pattern)
                        .with_context(|| format!("invalid --tag pattern: {}", pattern))
                })
                .transpose()?;

            let options = ViewOptions {
                follow,
                min_level: min_level.unwrap_or(config.viewer.min_level),
                tag_filter,
                capacity: config.viewer.max_messages_per_tab,
                poll_interval: Duration::from_millis(config.watch.poll_interval_ms),
                color: !cli.no_color && std::io::stdout().is_terminal(),
            };

            // The TUI needs a terminal; pipes get the streaming view
            let mode = if mode == ViewerMode::Tui && !std::io::stdout().is_terminal() {
                ViewerMode::Console
            } else {
                mode
            };

            match mode {
                ViewerMode::Tui => handlers::view_tui::handle(&path, &options),
                ViewerMode::Console => handlers::view_console::handle(&path, &options),
            }
        }

        Commands::Config => handlers::config::handle(&data_dir, &config, cli.format),
    }
}

fn show_guidance() {
    println!("tagtrace - string field statistics and tagged log viewing\n");
    println!("Common commands:");
    println!("  tagtrace stats data.csv --column name    Compute string statistics");
    println!("  tagtrace view logs/ --follow             Tail the newest log file in a TUI");
    println!("  tagtrace config                          Show the effective configuration");
    println!();
    println!("Run 'tagtrace --help' for the full command list.");
}
