//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use wowbank_core::types::NotificationKind;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::AppState;

use super::{auth, keys::handle_key, toast, transfer, wizard, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::RequestQuit => {
            if state.settings.behavior.confirm_quit {
                state.show_confirm_dialog(ConfirmDialogState::quit_confirmation());
            } else {
                state.should_quit = true;
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.hide_confirm_dialog();
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.hide_confirm_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(section) => {
            debug!(?section, "navigate");
            state.show_section(section);
            UpdateResult::none()
        }

        Message::PlaceholderAction(text) => {
            toast::show_toast(state, text.to_string(), NotificationKind::Info)
        }

        // ─────────────────────────────────────────────────────────
        // Auth
        // ─────────────────────────────────────────────────────────
        Message::OpenLoginModal => {
            state.open_login_modal();
            UpdateResult::none()
        }

        Message::CloseLoginModal => {
            state.close_login_modal();
            UpdateResult::none()
        }

        Message::LoginInput(c) => {
            state.login_form.push_char(c);
            UpdateResult::none()
        }

        Message::LoginBackspace => {
            state.login_form.pop_char();
            UpdateResult::none()
        }

        Message::LoginFocusNext => {
            state.login_form.focus_next();
            UpdateResult::none()
        }

        Message::SubmitLogin => auth::handle_submit_login(state),
        Message::WelcomeToast => auth::handle_welcome_toast(state),
        Message::RequestLogout => auth::handle_request_logout(state),
        Message::ConfirmLogout => auth::handle_confirm_logout(state),
        Message::CancelLogout => auth::handle_cancel_logout(state),

        // ─────────────────────────────────────────────────────────
        // Account-opening wizard
        // ─────────────────────────────────────────────────────────
        Message::OpenWizard => wizard::handle_open(state),
        Message::CloseWizard => wizard::handle_close(state),
        Message::WizardSelectPrevious => wizard::handle_select_previous(state),
        Message::WizardSelectNext => wizard::handle_select_next(state),
        Message::WizardNext => wizard::handle_next(state),
        Message::WizardBack => wizard::handle_back(state),
        Message::WizardSubmit => wizard::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Transfers
        // ─────────────────────────────────────────────────────────
        Message::TransferFocusNext => transfer::handle_focus_next(state),
        Message::TransferFocusPrevious => transfer::handle_focus_previous(state),
        Message::TransferCycleAccount { forward } => transfer::handle_cycle_account(state, forward),
        Message::TransferInput(c) => transfer::handle_input(state, c),
        Message::TransferBackspace => transfer::handle_backspace(state),
        Message::SubmitTransfer => transfer::handle_submit(state),
        Message::TransferSettled {
            destination,
            amount,
        } => transfer::handle_settled(state, destination, amount),

        // ─────────────────────────────────────────────────────────
        // Toasts
        // ─────────────────────────────────────────────────────────
        Message::ShowToast { message, kind } => toast::show_toast(state, message, kind),
        Message::ToastEnterElapsed { token } => toast::handle_enter_elapsed(state, token),
        Message::ToastAutoDismiss { token } => toast::handle_auto_dismiss(state, token),
        Message::ToastDetach { token } => toast::handle_detach(state, token),
        Message::DismissToast => toast::handle_manual_dismiss(state),
    }
}
