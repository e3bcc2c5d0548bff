//! Notification presenter handlers
//!
//! A toast's lifetime is driven entirely by scheduled messages carrying
//! its token. Showing a new toast replaces the current one; the replaced
//! toast's still-pending timers then miss on token match and do nothing.

use tracing::debug;

use wowbank_core::types::NotificationKind;

use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Show a toast and schedule its phase-advance and auto-dismiss timers.
pub fn show_toast(state: &mut AppState, message: String, kind: NotificationKind) -> UpdateResult {
    debug!(?kind, "toast: {message}");
    let token = state.toast.show(message, kind);
    let timing = &state.settings.timing;
    UpdateResult::actions(vec![
        UpdateAction::schedule(timing.toast_enter(), Message::ToastEnterElapsed { token }),
        UpdateAction::schedule(timing.toast_duration(), Message::ToastAutoDismiss { token }),
    ])
}

/// Slide-in finished; settle the toast into its visible phase.
pub fn handle_enter_elapsed(state: &mut AppState, token: u64) -> UpdateResult {
    state.toast.finish_enter(token);
    UpdateResult::none()
}

/// Auto-dismiss timer fired. Stale tokens are a no-op.
pub fn handle_auto_dismiss(state: &mut AppState, token: u64) -> UpdateResult {
    let token = state.toast.begin_leave(token);
    begin_leave(state, token)
}

/// User pressed the dismiss key; same animation path as the timer.
pub fn handle_manual_dismiss(state: &mut AppState) -> UpdateResult {
    let token = state.toast.dismiss_current();
    begin_leave(state, token)
}

/// Slide-out finished; drop the toast if it is still the live one.
pub fn handle_detach(state: &mut AppState, token: u64) -> UpdateResult {
    state.toast.detach(token);
    UpdateResult::none()
}

fn begin_leave(state: &mut AppState, token: Option<u64>) -> UpdateResult {
    match token {
        Some(token) => UpdateResult::action(UpdateAction::schedule(
            state.settings.timing.toast_exit(),
            Message::ToastDetach { token },
        )),
        None => UpdateResult::none(),
    }
}
