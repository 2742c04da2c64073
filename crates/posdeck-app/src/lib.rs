//! posdeck-app - Dashboard state and orchestration for posdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard customization panel: messages go in, the update function
//! mutates the panel state, and actions come out for the event loop to
//! perform (the single asynchronous one being the settings persist call).
//! It also carries the settings transform, the configuration store, and
//! the in-memory data layer the dashboard widgets read from.

pub mod config;
pub mod data;
pub mod filter;
pub mod handler;
pub mod message;
pub mod services;
pub mod snapshot;
pub mod state;
pub mod transform;

// Re-export primary types
pub use config::{default_settings_path, load_settings, save_settings, PersistedSettings};
pub use filter::filter_widgets;
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use snapshot::{SectionSettings, SettingsSnapshot};
pub use state::{ConfirmKind, PanelState, PendingConfirm, SaveState};
pub use transform::{to_external, to_internal};
