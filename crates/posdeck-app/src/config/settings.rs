//! Settings loader for dashboard.toml

use posdeck_core::prelude::*;
use std::path::{Path, PathBuf};

use super::types::PersistedSettings;

const SETTINGS_FILENAME: &str = "dashboard.toml";
const POSDECK_DIR: &str = "posdeck";

/// Default settings file location: `<config_dir>/posdeck/dashboard.toml`.
pub fn default_settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(POSDECK_DIR).join(SETTINGS_FILENAME)
}

/// Load persisted settings from the given file.
///
/// A missing file is not an error: the panel starts from first-run defaults
/// (every widget visible, registry natural order). A present-but-corrupt
/// file is an error so a failed save never silently wipes configuration.
pub fn load_settings(path: &Path) -> Result<PersistedSettings> {
    if !path.exists() {
        debug!("No settings file at {}, using defaults", path.display());
        return Ok(PersistedSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))
}
