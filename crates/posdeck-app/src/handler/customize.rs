//! Visibility, reorder, and search handlers

use tracing::{debug, warn};

use posdeck_core::PanelEvent;

use crate::state::PanelState;

use super::UpdateResult;

/// Handle set widget visible message
pub fn handle_set_visible(
    state: &mut PanelState,
    section_id: &str,
    widget_id: &str,
    visible: bool,
) -> UpdateResult {
    match state.set_visible(section_id, widget_id, visible) {
        Ok(()) => {
            state.notify(PanelEvent::WidgetToggled {
                section_id: section_id.to_string(),
                widget_id: widget_id.to_string(),
                visible,
            });
        }
        Err(e) => warn!("Refused visibility change: {e}"),
    }
    UpdateResult::none()
}

/// Handle toggle widget message
///
/// Flips the widget's current effective visibility. A widget with no entry
/// yet is effectively hidden, so toggling it shows it.
pub fn handle_toggle(state: &mut PanelState, section_id: &str, widget_id: &str) -> UpdateResult {
    let currently_visible = match state.current.section(section_id) {
        Some(section) => section.visible(widget_id),
        None => {
            warn!("Refused toggle: unknown section '{section_id}'");
            return UpdateResult::none();
        }
    };
    handle_set_visible(state, section_id, widget_id, !currently_visible)
}

/// Handle move widget message
///
/// Refused while a search filter is active: drag indices computed against
/// the filtered render list do not map onto the true order, and remapping
/// silently would corrupt it.
pub fn handle_move_widget(
    state: &mut PanelState,
    section_id: &str,
    from: usize,
    to: usize,
) -> UpdateResult {
    if state.has_active_filter() {
        warn!("Refused reorder in '{section_id}': search filter active");
        return UpdateResult::none();
    }

    let widget_id = state.widget_at(section_id, from).map(str::to_string);
    match state.move_widget(section_id, from, to) {
        Ok(()) if from != to => {
            if let Some(widget_id) = widget_id {
                state.notify(PanelEvent::WidgetMoved {
                    section_id: section_id.to_string(),
                    widget_id,
                    from,
                    to,
                });
            }
        }
        Ok(()) => {} // duplicate hover event, nothing moved
        Err(e) => warn!("Refused reorder: {e}"),
    }
    UpdateResult::none()
}

/// Handle search input message
pub fn handle_search_input(state: &mut PanelState, text: String) -> UpdateResult {
    debug!("Search term: '{text}'");
    state.search_term = text;
    UpdateResult::none()
}

/// Handle clear search message
pub fn handle_clear_search(state: &mut PanelState) -> UpdateResult {
    state.clear_search();
    UpdateResult::none()
}
