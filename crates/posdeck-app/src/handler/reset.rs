//! Section reset confirmation flow
//!
//! Per-request state machine: idle -> confirming -> (resetting -> idle),
//! or confirming -> idle on cancel. No data is touched until the user
//! confirms; the actual restore copies the section from the last-saved
//! baseline, not from registry defaults.

use tracing::{info, warn};

use posdeck_core::PanelEvent;

use crate::state::{PanelState, PendingConfirm};

use super::UpdateResult;

/// Handle request section reset message
pub fn handle_request_reset(state: &mut PanelState, section_id: &str) -> UpdateResult {
    if state.has_pending_confirm() {
        warn!("Ignored reset request for '{section_id}': a confirmation is already pending");
        return UpdateResult::none();
    }

    let section_name = match state.registry().section(section_id) {
        Some(entry) => entry.info.name.clone(),
        None => {
            warn!("Refused reset request: unknown section '{section_id}'");
            return UpdateResult::none();
        }
    };

    state.confirm = Some(PendingConfirm::reset_section(section_id, &section_name));
    UpdateResult::none()
}

/// Apply a confirmed section reset: restore the section from baseline.
pub fn apply_reset(state: &mut PanelState, section_id: &str) -> UpdateResult {
    match state.current.restore_section_from(&state.baseline, section_id) {
        Ok(()) => {
            info!("Section '{section_id}' restored to last-saved state");
            state.notify(PanelEvent::SectionReset {
                section_id: section_id.to_string(),
            });
        }
        Err(e) => warn!("Reset failed: {e}"),
    }
    UpdateResult::none()
}
