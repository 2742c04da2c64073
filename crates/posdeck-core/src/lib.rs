//! # posdeck-core - Core Domain Types
//!
//! Foundation crate for posdeck. Provides the dashboard domain types, the
//! widget registry, notification events, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SectionInfo`] - A named grouping of dashboard widgets
//! - [`WidgetInfo`] - Static display metadata for one widget
//! - [`WidgetSetting`] - Per-section, per-widget mutable state
//!
//! ### Registry (`registry`)
//! - [`WidgetRegistry`] - Read-only table of sections and widget descriptors
//! - [`registry::builtin()`] - The built-in dashboard widget table
//!
//! ### Events (`events`)
//! - [`PanelEvent`] - Fire-and-forget notifications from a panel session
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with recoverability classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use posdeck_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod registry;
pub mod types;

/// Prelude for common imports used throughout all posdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::PanelEvent;
pub use registry::{SectionEntry, WidgetRegistry};
pub use types::{SectionInfo, WidgetInfo, WidgetSetting};
