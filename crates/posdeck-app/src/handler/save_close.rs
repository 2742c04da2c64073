//! Save/close orchestration
//!
//! Save flow: idle -> saving -> (saved -> closed) or saving -> failed ->
//! idle-with-error. A single persistence call may be in flight; a second
//! save request while one is pending is rejected, not queued. Failure
//! leaves both snapshots untouched so the user can retry without
//! re-entering edits.

use tracing::{debug, info, warn};

use posdeck_core::PanelEvent;

use crate::state::{PanelState, PendingConfirm, SaveState};
use crate::transform;

use super::{UpdateAction, UpdateResult};

/// Handle request save message
pub fn handle_request_save(state: &mut PanelState) -> UpdateResult {
    if state.save_state == SaveState::Saving {
        warn!("Ignored save request: a save is already in flight");
        return UpdateResult::none();
    }
    if !state.is_dirty() {
        debug!("Ignored save request: no changes to save");
        return UpdateResult::none();
    }

    state.save_state = SaveState::Saving;
    let settings = transform::to_external(&state.current);
    UpdateResult::action(UpdateAction::PersistSettings { settings })
}

/// Handle save completed message
pub fn handle_save_completed(state: &mut PanelState) -> UpdateResult {
    if state.save_state != SaveState::Saving {
        warn!("Ignored save completion: no save in flight");
        return UpdateResult::none();
    }

    info!("Dashboard settings saved");
    state.save_state = SaveState::Idle;
    state.commit_baseline();
    state.notify(PanelEvent::settings_saved());
    state.close(false);
    UpdateResult::none()
}

/// Handle save failed message
pub fn handle_save_failed(state: &mut PanelState, reason: String) -> UpdateResult {
    if state.save_state != SaveState::Saving {
        warn!("Ignored save failure: no save in flight");
        return UpdateResult::none();
    }

    warn!("Dashboard settings save failed: {reason}");
    state.notify(PanelEvent::save_failed(reason.clone()));
    state.save_state = SaveState::Failed { reason };
    UpdateResult::none()
}

/// Handle request close message
pub fn handle_request_close(state: &mut PanelState) -> UpdateResult {
    if state.save_state == SaveState::Saving {
        warn!("Ignored close request: a save is in flight");
        return UpdateResult::none();
    }
    if state.has_pending_confirm() {
        warn!("Ignored close request: a confirmation is already pending");
        return UpdateResult::none();
    }

    if state.is_dirty() {
        state.confirm = Some(PendingConfirm::discard_and_close());
    } else {
        state.close(false);
    }
    UpdateResult::none()
}

/// Apply a confirmed discard-and-close.
pub fn apply_discard_and_close(state: &mut PanelState) -> UpdateResult {
    info!("Closing customization panel, discarding unsaved changes");
    state.close(true);
    UpdateResult::none()
}
