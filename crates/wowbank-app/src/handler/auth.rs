//! Login/logout handlers

use tracing::info;

use wowbank_core::types::{NotificationKind, Section};

use crate::auth;
use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::AppState;

use super::{toast, UpdateAction, UpdateResult};

/// Validate the login form against the demo credentials.
///
/// On failure the modal stays open and the form keeps what the user
/// typed, so they can correct it.
pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    let form = &state.login_form;
    if let Err(e) = auth::check_credentials(&form.username, &form.password) {
        return toast::show_toast(state, e.to_string(), NotificationKind::Error);
    }

    info!("login accepted, routing to dashboard");
    state.logged_in = true;
    state.close_login_modal();
    state.route = Section::Dashboard;

    UpdateResult::actions(vec![
        UpdateAction::SaveSession { logged_in: true },
        UpdateAction::schedule(
            state.settings.timing.welcome_delay(),
            Message::WelcomeToast,
        ),
    ])
}

/// Welcome toast, delayed so the dashboard transition settles first.
pub fn handle_welcome_toast(state: &mut AppState) -> UpdateResult {
    if !state.logged_in {
        // User signed out again before the delay elapsed
        return UpdateResult::none();
    }
    toast::show_toast(
        state,
        "Welcome back to WowBank! Your account overview is ready.".to_string(),
        NotificationKind::Success,
    )
}

/// Ask for confirmation; signing out only happens on an explicit yes.
pub fn handle_request_logout(state: &mut AppState) -> UpdateResult {
    state.show_confirm_dialog(ConfirmDialogState::logout_confirmation());
    UpdateResult::none()
}

pub fn handle_confirm_logout(state: &mut AppState) -> UpdateResult {
    info!("signing out");
    state.hide_confirm_dialog();
    state.logged_in = false;
    state.route = Section::Home;
    state.transfer_form.reset();
    state.wizard.reset();

    let mut result = toast::show_toast(
        state,
        "Thank you for using WowBank!".to_string(),
        NotificationKind::Success,
    );
    result
        .actions
        .push(UpdateAction::SaveSession { logged_in: false });
    result
}

pub fn handle_cancel_logout(state: &mut AppState) -> UpdateResult {
    state.hide_confirm_dialog();
    UpdateResult::none()
}
