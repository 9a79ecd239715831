use std::{fs, path::Path};

use crate::domain::config::IntentDatasetConfig;
use crate::domain::error::Result;

/// Read an IntentDatasetConfig from a JSON file. Missing keys take
/// their defaults.
pub fn load_config(path: &Path) -> Result<IntentDatasetConfig> {
    let text   = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    tracing::debug!("Loaded dataset config from '{}'", path.display());
    Ok(config)
}
