//! Account-opening wizard handlers

use tracing::info;

use wowbank_core::types::NotificationKind;

use crate::state::{AppState, UiMode};

use super::{toast, UpdateResult};

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.open_wizard();
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.close_wizard();
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.wizard.highlight_previous();
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.wizard.highlight_next();
    UpdateResult::none()
}

/// Advance the wizard. Step one requires a selection; past step one the
/// next control steps backward (see `WizardState::next`).
pub fn handle_next(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.wizard.next() {
        return toast::show_toast(state, e.to_string(), NotificationKind::Error);
    }
    UpdateResult::none()
}

pub fn handle_back(state: &mut AppState) -> UpdateResult {
    state.wizard.back();
    UpdateResult::none()
}

/// Submit from the review step; ignored anywhere else.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::WizardModal || !state.wizard.can_submit() {
        return UpdateResult::none();
    }
    info!(selected = ?state.wizard.selected, "wizard application submitted");
    state.close_wizard();
    toast::show_toast(
        state,
        "Account application submitted! We'll contact you within 24 hours.".to_string(),
        NotificationKind::Success,
    )
}
