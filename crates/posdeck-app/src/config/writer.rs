//! Settings writer for dashboard.toml
//!
//! Writes the externally-shaped settings back to disk under an exclusive
//! file lock so two panel sessions saving at once cannot interleave writes.

use fs2::FileExt;
use posdeck_core::prelude::*;
use std::io::Write;
use std::path::Path;

use super::types::PersistedSettings;

/// Write settings to the given file, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &PersistedSettings) -> Result<()> {
    let content = toml::to_string(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::config(format!(
                "Failed to create {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::config(format!("Failed to open {}: {}", path.display(), e)))?;

    // Exclusive lock: blocks if another process holds it
    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {}: {}", path.display(), e)))?;

    let mut file = file;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush {}: {}", path.display(), e)))?;

    // Lock is released when the file handle drops
    info!("Saved dashboard settings to {}", path.display());
    Ok(())
}
