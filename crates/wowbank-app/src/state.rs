//! Application state (Model in TEA pattern)

use wowbank_core::feed::ActivityFeed;
use wowbank_core::types::Section;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::login_form::LoginForm;
use crate::toast::ToastState;
use crate::transfer::TransferForm;
use crate::wizard::WizardState;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal browsing - nav bar plus the active section
    #[default]
    Browsing,

    /// Login modal over the current section
    LoginModal,

    /// Open-account wizard modal
    WizardModal,

    /// Confirmation dialog (quit, sign out)
    ConfirmDialog,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Section currently shown
    pub route: Section,

    /// Whether the demo user is signed in
    pub logged_in: bool,

    /// Single-slot toast presenter
    pub toast: ToastState,

    /// Open-account wizard
    pub wizard: WizardState,

    /// Login modal fields
    pub login_form: LoginForm,

    /// Transfer form fields
    pub transfer_form: TransferForm,

    /// Recent transactions, newest first
    pub feed: ActivityFeed,

    /// Active confirmation dialog, when `ui_mode` is `ConfirmDialog`
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Loaded settings
    pub settings: Settings,

    /// Set when the main loop should exit
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), false)
    }

    pub fn with_settings(settings: Settings, logged_in: bool) -> Self {
        let mut feed = ActivityFeed::new(settings.limits.max_recent_transactions);
        seed_feed(&mut feed);

        Self {
            ui_mode: UiMode::default(),
            // A persisted session starts straight on the dashboard
            route: if logged_in { Section::Dashboard } else { Section::Home },
            logged_in,
            toast: ToastState::new(),
            wizard: WizardState::new(),
            login_form: LoginForm::new(),
            transfer_form: TransferForm::new(),
            feed,
            confirm_dialog: None,
            settings,
            should_quit: false,
        }
    }

    /// Switch to a section, bouncing to the login modal when the
    /// target requires a signed-in user.
    pub fn show_section(&mut self, section: Section) {
        if section.requires_login() && !self.logged_in {
            self.open_login_modal();
            return;
        }
        self.route = section;
    }

    pub fn open_login_modal(&mut self) {
        self.login_form.reset();
        self.ui_mode = UiMode::LoginModal;
    }

    pub fn close_login_modal(&mut self) {
        self.login_form.reset();
        self.ui_mode = UiMode::Browsing;
    }

    pub fn open_wizard(&mut self) {
        self.wizard.reset();
        self.ui_mode = UiMode::WizardModal;
    }

    pub fn close_wizard(&mut self) {
        self.wizard.reset();
        self.ui_mode = UiMode::Browsing;
    }

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn hide_confirm_dialog(&mut self) {
        self.confirm_dialog = None;
        self.ui_mode = UiMode::Browsing;
    }

    pub fn has_modal_open(&self) -> bool {
        self.ui_mode != UiMode::Browsing
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo transactions shown before the user makes any transfers.
fn seed_feed(feed: &mut ActivityFeed) {
    use wowbank_core::types::TransactionEntry;

    feed.record(TransactionEntry::new(
        "Grocery Store",
        "Yesterday, 6:42 PM",
        "-$86.47",
        false,
    ));
    feed.record(TransactionEntry::new(
        "Direct Deposit",
        "Yesterday, 9:00 AM",
        "+$2,450.00",
        true,
    ));
    feed.record(TransactionEntry::new(
        "Coffee Shop",
        "Today, 8:15 AM",
        "-$5.75",
        false,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_section_bounces_to_login() {
        let mut state = AppState::new();
        state.show_section(Section::Dashboard);
        assert_eq!(state.route, Section::Home);
        assert_eq!(state.ui_mode, UiMode::LoginModal);
    }

    #[test]
    fn test_protected_section_allowed_when_logged_in() {
        let mut state = AppState::new();
        state.logged_in = true;
        state.show_section(Section::Dashboard);
        assert_eq!(state.route, Section::Dashboard);
        assert_eq!(state.ui_mode, UiMode::Browsing);
    }

    #[test]
    fn test_public_section_never_gates() {
        let mut state = AppState::new();
        state.route = Section::Home;
        state.show_section(Section::Home);
        assert_eq!(state.route, Section::Home);
        assert_eq!(state.ui_mode, UiMode::Browsing);
    }

    #[test]
    fn test_persisted_session_starts_on_dashboard() {
        let state = AppState::with_settings(Settings::default(), true);
        assert!(state.logged_in);
        assert_eq!(state.route, Section::Dashboard);
        assert_eq!(state.ui_mode, UiMode::Browsing);
    }

    #[test]
    fn test_fresh_start_begins_on_homepage() {
        let state = AppState::with_settings(Settings::default(), false);
        assert!(!state.logged_in);
        assert_eq!(state.route, Section::Home);
    }

    #[test]
    fn test_close_wizard_resets_selection() {
        let mut state = AppState::new();
        state.open_wizard();
        state.wizard.select(wowbank_core::types::AccountType::Savings);
        state.close_wizard();
        assert!(state.wizard.selected.is_none());
    }

    #[test]
    fn test_seeded_feed_within_cap() {
        let state = AppState::new();
        assert!(state.feed.len() <= 5);
        assert!(!state.feed.is_empty());
    }
}
