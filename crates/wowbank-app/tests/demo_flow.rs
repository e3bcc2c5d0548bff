//! End-to-end exercise of the update loop through the public API:
//! a full demo session from the public homepage to sign-out.

use wowbank_app::handler::{update, UpdateAction};
use wowbank_app::message::Message;
use wowbank_app::state::{AppState, UiMode};
use wowbank_app::InputKey;
use wowbank_core::types::{NotificationKind, Section};

/// Feed a key through update, following follow-up messages, and return
/// the actions the runner would have executed.
fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(Message::Key(key));
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        actions.extend(result.actions);
        next = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

/// Deliver the scheduled messages from a batch of actions, as the
/// runner's timers eventually would.
fn deliver_scheduled(state: &mut AppState, actions: Vec<UpdateAction>) {
    for action in actions {
        if let UpdateAction::Schedule { message, .. } = action {
            update(state, *message);
        }
    }
}

#[test]
fn full_demo_session() {
    let mut state = AppState::new();

    // Public homepage: authenticated sections are gated
    assert_eq!(state.route, Section::Home);
    press(&mut state, InputKey::CharAlt('1'));
    assert_eq!(state.route, Section::Home);

    // Sign in with the demo credentials
    press(&mut state, InputKey::Char('l'));
    assert_eq!(state.ui_mode, UiMode::LoginModal);
    type_text(&mut state, "demo");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "demo123");
    let actions = press(&mut state, InputKey::Enter);

    assert!(state.logged_in);
    assert_eq!(state.route, Section::Dashboard);
    assert!(actions
        .iter()
        .any(|a| matches!(a, UpdateAction::SaveSession { logged_in: true })));

    // The delayed welcome toast lands on the dashboard
    deliver_scheduled(&mut state, actions);
    let toast = state.toast.current().expect("welcome toast");
    assert!(toast.message.starts_with("Welcome back to WowBank!"));

    // Fill and submit a transfer via the keyboard
    press(&mut state, InputKey::CharAlt('3'));
    assert_eq!(state.route, Section::Transfer);
    press(&mut state, InputKey::Right); // from: Checking
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right); // to: Checking
    press(&mut state, InputKey::Right); // to: Savings
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "250.50");
    let actions = press(&mut state, InputKey::Enter);
    assert!(state.transfer_form.submitting);

    // Settlement records the entry and confirms
    deliver_scheduled(&mut state, actions);
    let entry = state.feed.latest().expect("feed entry");
    assert_eq!(entry.title, "Transfer to High-Yield Savings");
    assert_eq!(entry.amount_label, "-$250.50");
    assert!(!state.transfer_form.submitting);
    assert_eq!(
        state.toast.current().expect("transfer toast").message,
        "Transfer of $250.50 scheduled successfully!"
    );

    // Sign out through the confirmation dialog
    press(&mut state, InputKey::CharAlt('1'));
    press(&mut state, InputKey::Char('x'));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    let actions = press(&mut state, InputKey::Char('y'));

    assert!(!state.logged_in);
    assert_eq!(state.route, Section::Home);
    assert!(actions
        .iter()
        .any(|a| matches!(a, UpdateAction::SaveSession { logged_in: false })));
    let toast = state.toast.current().expect("farewell toast");
    assert_eq!(toast.message, "Thank you for using WowBank!");
    assert_eq!(toast.kind, NotificationKind::Success);
}

#[test]
fn wizard_flow_from_public_homepage() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Char('o'));
    assert_eq!(state.ui_mode, UiMode::WizardModal);

    // Next without a selection is rejected
    press(&mut state, InputKey::Char('n'));
    assert_eq!(
        state.toast.current().expect("validation toast").message,
        "Please select an account type to continue"
    );

    // Select, then force the review step: Next moves backward past
    // step one, so step three is unreachable through the keyboard
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('n'));
    state.wizard.step = wowbank_app::wizard::WizardStep::Three;
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Browsing);
    assert!(state
        .toast
        .current()
        .expect("submission toast")
        .message
        .starts_with("Account application submitted!"));
}
