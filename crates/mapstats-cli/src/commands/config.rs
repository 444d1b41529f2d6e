//! Config command implementation

use crate::config_loader::{load_config, resolve_config_path};
use crate::output::OutputWriter;
use crate::output_types::ConfigEntry;
use anyhow::Result;
use std::path::Path;

pub fn execute(output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        output.result(entries)?;
        return Ok(());
    }

    match resolve_config_path(config_path) {
        Some(path) => output.kv("Config file", path.display()),
        None => output.kv("Config file", "(none)"),
    }
    output.table(entries);

    Ok(())
}
