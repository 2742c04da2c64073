//! Message types for the customization panel (TEA pattern)

/// All possible messages/actions in a panel session.
///
/// Mutation messages are applied synchronously in dispatch order; the only
/// asynchronous boundary is the persistence call, which reports back via
/// `SaveCompleted` / `SaveFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Widget Customization
    // ─────────────────────────────────────────────────────────
    /// Set a widget's visibility (upserts the widget entry)
    SetWidgetVisible {
        section_id: String,
        widget_id: String,
        visible: bool,
    },

    /// Flip a widget's visibility
    ToggleWidget {
        section_id: String,
        widget_id: String,
    },

    /// Move a widget from one position to another within a section.
    /// Emitted per drag-hover midpoint crossing; duplicates are harmless.
    MoveWidget {
        section_id: String,
        from: usize,
        to: usize,
    },

    // ─────────────────────────────────────────────────────────
    // Search Filter
    // ─────────────────────────────────────────────────────────
    /// Update the search term
    SearchInput { text: String },
    /// Clear the search term
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // Section Reset
    // ─────────────────────────────────────────────────────────
    /// Ask to reset a section to its last-saved state (opens confirmation)
    RequestSectionReset { section_id: String },

    // ─────────────────────────────────────────────────────────
    // Save / Close
    // ─────────────────────────────────────────────────────────
    /// Persist current settings (rejected when clean or already saving)
    RequestSave,
    /// The persistence collaborator accepted the save
    SaveCompleted,
    /// The persistence collaborator rejected the save
    SaveFailed { reason: String },
    /// Close the panel (opens confirmation when dirty)
    RequestClose,

    // ─────────────────────────────────────────────────────────
    // Confirmation Prompts
    // ─────────────────────────────────────────────────────────
    /// Confirm the pending prompt (reset or discard-and-close)
    ConfirmPending,
    /// Cancel the pending prompt; no data changes
    CancelPending,
}
