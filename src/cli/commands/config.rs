use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::Config;

#[derive(Debug, Serialize)]
struct ConfigEntry {
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ConfigOutput {
    config_path: Option<String>,
    values: BTreeMap<String, ConfigEntry>,
}

/// Print the effective configuration with per-key source attribution.
pub fn execute_config_command(config: &Config, json: bool) -> Result<()> {
    let config_path = config
        .config_path
        .as_ref()
        .map(|path| path.display().to_string());
    let effective = config.effective_config();

    if json {
        let output = ConfigOutput {
            config_path,
            values: effective
                .into_iter()
                .map(|(key, (value, source))| (key, ConfigEntry { value, source }))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to emit config JSON")?;
        println!("{json}");
        return Ok(());
    }

    println!("Effective configuration:");
    println!(
        "  config file: {}",
        config_path.as_deref().unwrap_or("(none)")
    );
    for (key, (value, source)) in &effective {
        println!("  {key} = {value} ({source})");
    }

    Ok(())
}
