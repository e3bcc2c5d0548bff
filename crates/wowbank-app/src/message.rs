//! Message types for the application (TEA pattern)

use wowbank_core::types::{AccountKind, NotificationKind, Section};

use crate::input_key::InputKey;
use crate::transfer::TransferRequest;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch to a section (gated by login for authenticated ones)
    Navigate(Section),

    /// A link that has no real destination; raises an info toast
    PlaceholderAction(&'static str),

    // ─────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────
    /// Open the login modal
    OpenLoginModal,

    /// Close the login modal without signing in
    CloseLoginModal,

    /// Character typed into the focused login field
    LoginInput(char),

    /// Backspace in the focused login field
    LoginBackspace,

    /// Move login focus between username and password
    LoginFocusNext,

    /// Validate the login form's credentials
    SubmitLogin,

    /// Welcome toast fired shortly after a successful login
    WelcomeToast,

    /// Ask for sign-out confirmation
    RequestLogout,

    /// Confirm sign-out from confirmation dialog
    ConfirmLogout,

    /// Cancel sign-out from confirmation dialog
    CancelLogout,

    // ─────────────────────────────────────────────────────────
    // Account-opening wizard
    // ─────────────────────────────────────────────────────────
    /// Open the wizard modal at step one
    OpenWizard,

    /// Close the wizard, resetting its state
    CloseWizard,

    /// Move wizard selection highlight up
    WizardSelectPrevious,

    /// Move wizard selection highlight down
    WizardSelectNext,

    /// Advance the wizard (validates the selection on step one)
    WizardNext,

    /// Step the wizard back one step
    WizardBack,

    /// Submit the wizard from the review step
    WizardSubmit,

    // ─────────────────────────────────────────────────────────
    // Transfers
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next transfer form field
    TransferFocusNext,

    /// Move focus to the previous transfer form field
    TransferFocusPrevious,

    /// Cycle the focused account field forward or backward
    TransferCycleAccount { forward: bool },

    /// Character typed into the focused transfer field
    TransferInput(char),

    /// Backspace in the focused transfer field
    TransferBackspace,

    /// Validate and submit the transfer form
    SubmitTransfer,

    /// Simulated processing finished for a submitted transfer
    TransferSettled {
        destination: AccountKind,
        amount: String,
    },

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────
    /// Show a toast, replacing any current one
    ShowToast {
        message: String,
        kind: NotificationKind,
    },

    /// The slide-in window for the toast with this token elapsed
    ToastEnterElapsed { token: u64 },

    /// Auto-dismiss timer fired for the toast with this token
    ToastAutoDismiss { token: u64 },

    /// The slide-out window elapsed; drop the toast entirely
    ToastDetach { token: u64 },

    /// User dismissed the current toast manually
    DismissToast,
}

impl Message {
    /// Convenience for `ShowToast` with owned conversion.
    pub fn toast(message: impl Into<String>, kind: NotificationKind) -> Self {
        Message::ShowToast {
            message: message.into(),
            kind,
        }
    }

    /// Message delivered once a submitted request's simulated
    /// processing has "completed".
    pub fn settled(request: &TransferRequest) -> Self {
        Message::TransferSettled {
            destination: request.to,
            amount: request.amount.clone(),
        }
    }
}
