//! Confirm dialog state.
//!
//! Data model for yes/no confirmations. The rendering widget lives in
//! wowbank-tui.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Sign-out confirmation: logout only takes effect on an explicit yes.
    pub fn logout_confirmation() -> Self {
        Self::new(
            "Sign out of WowBank?",
            "Are you sure you want to sign out?",
            vec![
                ("Sign Out", Message::ConfirmLogout),
                ("Cancel", Message::CancelLogout),
            ],
        )
    }

    /// Quit confirmation shown when leaving the demo.
    pub fn quit_confirmation() -> Self {
        Self::new(
            "Quit WowBank demo?",
            "The demo session flag is kept for next time.",
            vec![
                ("Quit", Message::ConfirmQuit),
                ("Cancel", Message::CancelQuit),
            ],
        )
    }
}
