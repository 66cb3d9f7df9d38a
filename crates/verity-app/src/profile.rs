use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use verity_config::Config;

/// Load config from a JSON file, or from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file, reading environment");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Write the current environment config to `path` unless a file is already there
pub fn init_config(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        tracing::warn!("{} already exists, leaving it alone", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&Config::new())?)?;
    tracing::info!("Created config at {}", path.display());
    Ok(true)
}
