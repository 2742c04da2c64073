//! Configuration layer: persisted settings shape, loading, and writing.
//!
//! - `types`: `PersistedSettings` - the external wire shape
//! - `settings`: file location and tolerant loading
//! - `writer`: locked write-back

mod settings;
mod types;
mod writer;

pub use settings::{default_settings_path, load_settings};
pub use types::PersistedSettings;
pub use writer::save_settings;
