//! Key event handlers for different UI modes

use wowbank_core::types::Section;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::wizard::WizardStep;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit and toast dismissal work from every mode
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('k') => return Some(Message::DismissToast),
        _ => {}
    }

    match state.ui_mode {
        UiMode::Browsing => handle_key_browsing(state, key),
        UiMode::LoginModal => handle_key_login_modal(key),
        UiMode::WizardModal => handle_key_wizard_modal(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
    }
}

/// Handle key events in confirmation dialogs.
///
/// The dialog's options carry their own messages, so 'y'/Enter fire the
/// affirmative option and 'n'/Esc the cancel option regardless of which
/// confirmation is showing.
fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog.as_ref()?;
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => {
            dialog.options.first().map(|(_, msg)| msg.clone())
        }
        InputKey::Char('n' | 'N') | InputKey::Esc => {
            dialog.options.get(1).map(|(_, msg)| msg.clone())
        }
        _ => None,
    }
}

/// Handle key events while the login modal is open
fn handle_key_login_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseLoginModal),
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginFocusNext)
        }
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

/// Handle key events while the account-opening wizard is open
fn handle_key_wizard_modal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseWizard),
        // The selection cursor only exists on the first step
        InputKey::Up if state.wizard.step == WizardStep::One => {
            Some(Message::WizardSelectPrevious)
        }
        InputKey::Down if state.wizard.step == WizardStep::One => {
            Some(Message::WizardSelectNext)
        }
        InputKey::Char('n') => Some(Message::WizardNext),
        InputKey::Char('b') => Some(Message::WizardBack),
        InputKey::Enter => {
            if state.wizard.can_submit() {
                Some(Message::WizardSubmit)
            } else {
                Some(Message::WizardNext)
            }
        }
        _ => None,
    }
}

/// Handle key events in the normal browsing mode
fn handle_key_browsing(state: &AppState, key: InputKey) -> Option<Message> {
    // Alt+1..4 shortcuts route sections, logged in only
    if let InputKey::CharAlt(c) = key {
        return if state.logged_in {
            section_for_digit(c).map(Message::Navigate)
        } else {
            None
        };
    }

    if !state.logged_in {
        return handle_key_public(key);
    }

    // The transfer form captures most keys for text entry
    if state.route == Section::Transfer {
        if let Some(msg) = handle_key_transfer_form(key) {
            return Some(msg);
        }
    }

    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Char('x') => Some(Message::RequestLogout),
        InputKey::Tab => Some(Message::Navigate(next_section(state.route))),
        InputKey::BackTab => Some(Message::Navigate(previous_section(state.route))),
        InputKey::Char(c @ '1'..='4') => section_for_digit(c).map(Message::Navigate),
        InputKey::Char(c) => section_action(state.route, c),
        _ => None,
    }
}

/// Public (logged-out) homepage keys
fn handle_key_public(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Char('l') => Some(Message::OpenLoginModal),
        InputKey::Char('o') => Some(Message::OpenWizard),
        InputKey::Char('a') => Some(Message::PlaceholderAction("About section coming soon!")),
        InputKey::Char('s') => Some(Message::PlaceholderAction("Services section coming soon!")),
        InputKey::Char('c') => Some(Message::PlaceholderAction("Contact section coming soon!")),
        _ => None,
    }
}

/// Keys owned by the transfer form while its section is active
fn handle_key_transfer_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::TransferFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::TransferFocusPrevious),
        InputKey::Left => Some(Message::TransferCycleAccount { forward: false }),
        InputKey::Right => Some(Message::TransferCycleAccount { forward: true }),
        InputKey::Enter => Some(Message::SubmitTransfer),
        InputKey::Backspace => Some(Message::TransferBackspace),
        // Digits type into the buffers here; section shortcuts remain
        // reachable via Alt+1..4.
        InputKey::Char(c) => Some(Message::TransferInput(c)),
        _ => None,
    }
}

/// Per-section quick-action keys (dashboard, accounts, profile)
fn section_action(route: Section, c: char) -> Option<Message> {
    match (route, c) {
        // Dashboard quick actions
        (Section::Dashboard, 't') => Some(Message::Navigate(Section::Transfer)),
        (Section::Dashboard, 'p') => {
            Some(Message::PlaceholderAction("Bill Pay feature coming soon!"))
        }
        (Section::Dashboard, 'm') => Some(Message::PlaceholderAction(
            "Mobile Deposit feature coming soon!",
        )),
        (Section::Dashboard, 'e') => {
            Some(Message::PlaceholderAction("Statements feature coming soon!"))
        }

        // Account card actions
        (Section::Accounts, 'v') => Some(Message::PlaceholderAction(
            "Transaction history feature coming soon!",
        )),
        (Section::Accounts, 't') => Some(Message::Navigate(Section::Transfer)),
        (Section::Accounts, 'h') => Some(Message::PlaceholderAction(
            "Investment holdings feature coming soon!",
        )),
        (Section::Accounts, 'i') => {
            Some(Message::PlaceholderAction("Investment feature coming soon!"))
        }

        // Profile card actions
        (Section::Profile, 'e') => Some(Message::PlaceholderAction(
            "Edit Profile feature coming soon!",
        )),
        (Section::Profile, 'p') => Some(Message::PlaceholderAction(
            "Change Password feature coming soon!",
        )),
        (Section::Profile, 'n') => Some(Message::PlaceholderAction(
            "Notification Settings feature coming soon!",
        )),

        _ => None,
    }
}

fn section_for_digit(c: char) -> Option<Section> {
    match c {
        '1' => Some(Section::Dashboard),
        '2' => Some(Section::Accounts),
        '3' => Some(Section::Transfer),
        '4' => Some(Section::Profile),
        _ => None,
    }
}

fn next_section(current: Section) -> Section {
    let order = Section::AUTHENTICATED;
    let pos = order.iter().position(|s| *s == current).unwrap_or(0);
    order[(pos + 1) % order.len()]
}

fn previous_section(current: Section) -> Section {
    let order = Section::AUTHENTICATED;
    let pos = order.iter().position(|s| *s == current).unwrap_or(0);
    order[(pos + order.len() - 1) % order.len()]
}
