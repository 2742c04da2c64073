//! Panel session state (Model in TEA pattern)
//!
//! One `PanelState` exists per open customization panel. It owns the
//! current and baseline snapshots exclusively; the registry is shared
//! read-only across sessions.

use std::sync::Arc;

use tokio::sync::mpsc;

use posdeck_core::prelude::*;
use posdeck_core::{PanelEvent, WidgetRegistry, WidgetSetting};

use crate::config::PersistedSettings;
use crate::snapshot::SettingsSnapshot;
use crate::transform;

/// What a pending confirmation prompt will do when confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Restore one section to its last-saved state.
    ResetSection { section_id: String },
    /// Discard unsaved edits and close the panel.
    DiscardAndClose,
}

/// A blocking confirmation prompt awaiting the user's decision.
///
/// No data is mutated while a confirmation is pending; cancelling simply
/// discards the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub title: String,
    pub message: String,
    pub kind: ConfirmKind,
}

impl PendingConfirm {
    /// Prompt for restoring a section to its last-saved state.
    pub fn reset_section(section_id: impl Into<String>, section_name: &str) -> Self {
        let section_id = section_id.into();
        Self {
            title: format!("Reset {section_name}?"),
            message: "This restores the section's widgets to their last saved configuration."
                .to_string(),
            kind: ConfirmKind::ResetSection { section_id },
        }
    }

    /// Prompt for closing with unsaved changes.
    pub fn discard_and_close() -> Self {
        Self {
            title: "Unsaved Changes".to_string(),
            message: "You have unsaved changes. Close anyway and discard them?".to_string(),
            kind: ConfirmKind::DiscardAndClose,
        }
    }
}

/// Save flow state: a single in-flight persistence call, no queueing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    /// A persist call is in flight; further save requests are rejected.
    Saving,
    /// The last save was rejected by the persistence collaborator.
    Failed { reason: String },
}

/// State for one customization panel session.
#[derive(Debug)]
pub struct PanelState {
    registry: Arc<WidgetRegistry>,

    /// Live-edited snapshot.
    pub current: SettingsSnapshot,

    /// Last-saved snapshot, used for the dirty check and section reset.
    pub baseline: SettingsSnapshot,

    /// Active search term; empty means no filter.
    pub search_term: String,

    /// Pending confirmation prompt, if any.
    pub confirm: Option<PendingConfirm>,

    /// Save flow state.
    pub save_state: SaveState,

    /// Set once the session has ended; the snapshots are dead weight after
    /// this and a fresh state is built next time the panel opens.
    pub closed: bool,

    /// Fire-and-forget notification channel. Send errors are ignored.
    notifier: Option<mpsc::UnboundedSender<PanelEvent>>,
}

impl PanelState {
    /// Open a panel session from persisted settings.
    pub fn open(registry: Arc<WidgetRegistry>, persisted: &PersistedSettings) -> Self {
        let current = transform::to_internal(persisted, &registry);
        let baseline = current.clone();
        Self {
            registry,
            current,
            baseline,
            search_term: String::new(),
            confirm: None,
            save_state: SaveState::default(),
            closed: false,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, tx: mpsc::UnboundedSender<PanelEvent>) -> Self {
        self.notifier = Some(tx);
        self
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Emit a notification event. Observational only; a dropped receiver
    /// is not an error.
    pub fn notify(&self, event: PanelEvent) {
        if let Some(tx) = &self.notifier {
            let _ = tx.send(event);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Change tracking
    // ─────────────────────────────────────────────────────────

    /// Deep structural comparison of current against baseline.
    ///
    /// Recomputed on every call; never cached.
    pub fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }

    /// Replace baseline wholesale with a deep copy of current.
    pub fn commit_baseline(&mut self) {
        self.baseline = self.current.clone();
    }

    /// Upsert a widget's visibility in the current snapshot.
    ///
    /// Creates the widget entry (and appends it to the order) when absent.
    /// Refuses unknown sections rather than corrupting the snapshot.
    pub fn set_visible(&mut self, section_id: &str, widget_id: &str, visible: bool) -> Result<()> {
        let section = self
            .current
            .section_mut(section_id)
            .ok_or_else(|| Error::unknown_section(section_id))?;

        section
            .widgets
            .insert(widget_id.to_string(), WidgetSetting { visible });
        if !section.order.contains(&widget_id.to_string()) {
            section.order.push(widget_id.to_string());
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Reorder engine
    // ─────────────────────────────────────────────────────────

    /// Move the widget at `from` to position `to` within a section's order.
    ///
    /// Standard array move: remove then insert, shifting everything between
    /// the two positions by one. `from == to` is a no-op so duplicate
    /// drag-hover commands are harmless. Out-of-range indices are refused;
    /// the order always remains a permutation of its prior contents.
    pub fn move_widget(&mut self, section_id: &str, from: usize, to: usize) -> Result<()> {
        let section = self
            .current
            .section_mut(section_id)
            .ok_or_else(|| Error::unknown_section(section_id))?;

        let len = section.order.len();
        if from >= len {
            return Err(Error::index_out_of_range(section_id, from, len));
        }
        if to >= len {
            return Err(Error::index_out_of_range(section_id, to, len));
        }
        if from == to {
            return Ok(());
        }

        let id = section.order.remove(from);
        section.order.insert(to, id);
        Ok(())
    }

    /// Widget id at a given position in a section's order.
    pub fn widget_at(&self, section_id: &str, index: usize) -> Option<&str> {
        self.current
            .section(section_id)?
            .order
            .get(index)
            .map(String::as_str)
    }

    // ─────────────────────────────────────────────────────────
    // Search filter
    // ─────────────────────────────────────────────────────────

    pub fn has_active_filter(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    // ─────────────────────────────────────────────────────────
    // Confirmation prompts
    // ─────────────────────────────────────────────────────────

    pub fn has_pending_confirm(&self) -> bool {
        self.confirm.is_some()
    }

    /// Discard any pending confirmation intent. No data changes.
    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    // ─────────────────────────────────────────────────────────
    // Session end
    // ─────────────────────────────────────────────────────────

    /// End the session. Always clears the search filter.
    pub fn close(&mut self, discarded_changes: bool) {
        self.closed = true;
        self.confirm = None;
        self.clear_search();
        self.notify(PanelEvent::PanelClosed { discarded_changes });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posdeck_core::registry::builtin;

    fn open_default() -> PanelState {
        PanelState::open(Arc::new(builtin()), &PersistedSettings::new())
    }

    #[test]
    fn test_open_is_clean() {
        let state = open_default();
        assert!(!state.is_dirty());
        assert!(!state.closed);
        assert_eq!(state.save_state, SaveState::Idle);
    }

    #[test]
    fn test_set_visible_marks_dirty_and_commit_clears() {
        let mut state = open_default();
        state.set_visible("general", "sales_summary", false).unwrap();
        assert!(state.is_dirty());

        state.commit_baseline();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_set_visible_same_value_stays_clean() {
        let mut state = open_default();
        // default-on policy: sales_summary is already visible
        state.set_visible("general", "sales_summary", true).unwrap();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_set_visible_creates_missing_widget_entry() {
        let mut state = open_default();
        state.set_visible("general", "gift_cards", true).unwrap();

        let general = state.current.section("general").unwrap();
        assert!(general.visible("gift_cards"));
        assert!(general.order.contains(&"gift_cards".to_string()));
        assert!(general.is_consistent());
    }

    #[test]
    fn test_set_visible_unknown_section_refused() {
        let mut state = open_default();
        let err = state.set_visible("reports", "sales_summary", true).unwrap_err();
        assert!(matches!(err, Error::UnknownSection { .. }));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_move_widget_is_an_array_move() {
        let mut state = open_default();
        let before = state.current.section("general").unwrap().order.clone();

        state.move_widget("general", 0, 2).unwrap();
        let after = &state.current.section("general").unwrap().order;

        assert_eq!(after[0], before[1]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[0]);
        assert_eq!(after.len(), before.len());
    }

    #[test]
    fn test_move_widget_preserves_permutation() {
        let mut state = open_default();
        let mut before = state.current.section("general").unwrap().order.clone();

        state.move_widget("general", 5, 1).unwrap();
        let mut after = state.current.section("general").unwrap().order.clone();

        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_move_widget_same_index_is_noop() {
        let mut state = open_default();
        let before = state.current.section("general").unwrap().order.clone();

        state.move_widget("general", 3, 3).unwrap();
        assert_eq!(state.current.section("general").unwrap().order, before);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_move_widget_out_of_range_refused() {
        let mut state = open_default();
        let len = state.current.section("general").unwrap().len();
        let before = state.current.section("general").unwrap().order.clone();

        let err = state.move_widget("general", len, 0).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { .. }));

        let err = state.move_widget("general", 0, len).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { .. }));

        assert_eq!(state.current.section("general").unwrap().order, before);
    }

    #[test]
    fn test_close_clears_search_filter() {
        let mut state = open_default();
        state.search_term = "chart".to_string();
        state.close(false);
        assert!(state.closed);
        assert!(!state.has_active_filter());
    }

    #[test]
    fn test_cancel_confirm_discards_intent_without_changes() {
        let mut state = open_default();
        state.set_visible("general", "sales_summary", false).unwrap();
        state.confirm = Some(PendingConfirm::discard_and_close());

        state.cancel_confirm();
        assert!(!state.has_pending_confirm());
        assert!(state.is_dirty());
        assert!(!state.closed);
    }

    #[test]
    fn test_notify_without_receiver_is_harmless() {
        let state = open_default();
        state.notify(PanelEvent::settings_saved());
    }

    #[test]
    fn test_notify_delivers_to_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let state = open_default().with_notifier(tx);
        state.notify(PanelEvent::SectionReset {
            section_id: "general".into(),
        });
        let ev = rx.try_recv().unwrap();
        assert!(matches!(ev, PanelEvent::SectionReset { .. }));
    }
}
