use std::path::Path;

use anyhow::Result;
use serde_json::json;

use tagtrace_runtime::Config;

use crate::types::OutputFormat;

pub fn handle(data_dir: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let config_path = Config::path_in(data_dir);

    match format {
        OutputFormat::Json => {
            let payload = json!({
                "data_dir": data_dir.display().to_string(),
                "config_path": config_path.display().to_string(),
                "config_exists": config_path.exists(),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!("Data directory: {}", data_dir.display());
            if config_path.exists() {
                println!("Config file:    {}", config_path.display());
            } else {
                println!("Config file:    {} (not present, using defaults)", config_path.display());
            }
            println!();
            print!("{}", toml::to_string_pretty(config)?);
        }
    }

    Ok(())
}
