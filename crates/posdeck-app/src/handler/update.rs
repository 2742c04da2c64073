//! Main update function - handles state transitions (TEA pattern)

use tracing::warn;

use crate::message::Message;
use crate::state::{ConfirmKind, PanelState};

use super::{customize, reset, save_close, UpdateResult};

/// Process a message and update state
///
/// Mutations are synchronous and applied in dispatch order. While a
/// confirmation prompt is pending, user-intent messages other than
/// confirm/cancel are ignored (the prompt is blocking); asynchronous save
/// completions are always processed.
pub fn update(state: &mut PanelState, message: Message) -> UpdateResult {
    if state.closed {
        warn!("Ignored message after panel close: {message:?}");
        return UpdateResult::none();
    }

    if state.has_pending_confirm() && !passes_confirm_gate(&message) {
        warn!("Ignored message while confirmation pending: {message:?}");
        return UpdateResult::none();
    }

    match message {
        // ─────────────────────────────────────────────────────────
        // Widget Customization
        // ─────────────────────────────────────────────────────────
        Message::SetWidgetVisible {
            section_id,
            widget_id,
            visible,
        } => customize::handle_set_visible(state, &section_id, &widget_id, visible),

        Message::ToggleWidget {
            section_id,
            widget_id,
        } => customize::handle_toggle(state, &section_id, &widget_id),

        Message::MoveWidget {
            section_id,
            from,
            to,
        } => customize::handle_move_widget(state, &section_id, from, to),

        // ─────────────────────────────────────────────────────────
        // Search Filter
        // ─────────────────────────────────────────────────────────
        Message::SearchInput { text } => customize::handle_search_input(state, text),
        Message::ClearSearch => customize::handle_clear_search(state),

        // ─────────────────────────────────────────────────────────
        // Section Reset
        // ─────────────────────────────────────────────────────────
        Message::RequestSectionReset { section_id } => {
            reset::handle_request_reset(state, &section_id)
        }

        // ─────────────────────────────────────────────────────────
        // Save / Close
        // ─────────────────────────────────────────────────────────
        Message::RequestSave => save_close::handle_request_save(state),
        Message::SaveCompleted => save_close::handle_save_completed(state),
        Message::SaveFailed { reason } => save_close::handle_save_failed(state, reason),
        Message::RequestClose => save_close::handle_request_close(state),

        // ─────────────────────────────────────────────────────────
        // Confirmation Prompts
        // ─────────────────────────────────────────────────────────
        Message::ConfirmPending => match state.confirm.take() {
            Some(pending) => match pending.kind {
                ConfirmKind::ResetSection { section_id } => reset::apply_reset(state, &section_id),
                ConfirmKind::DiscardAndClose => save_close::apply_discard_and_close(state),
            },
            None => {
                warn!("Ignored confirm: no prompt pending");
                UpdateResult::none()
            }
        },

        Message::CancelPending => {
            state.cancel_confirm();
            UpdateResult::none()
        }
    }
}

/// Messages allowed through while a confirmation prompt is blocking.
fn passes_confirm_gate(message: &Message) -> bool {
    matches!(
        message,
        Message::ConfirmPending
            | Message::CancelPending
            | Message::SaveCompleted
            | Message::SaveFailed { .. }
    )
}
