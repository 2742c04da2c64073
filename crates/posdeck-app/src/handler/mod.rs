//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `customize`: Visibility toggle, reorder, and search handlers
//! - `reset`: Section reset confirmation flow
//! - `save_close`: Save/close orchestration

pub(crate) mod customize;
pub(crate) mod reset;
pub(crate) mod save_close;
pub(crate) mod update;


use crate::config::PersistedSettings;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run the asynchronous persistence collaborator with the
    /// externally-shaped settings, then feed back `SaveCompleted` or
    /// `SaveFailed`.
    PersistSettings { settings: PersistedSettings },
}

/// Result of processing one message
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
