//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Session Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Session store error: {message}")]
    Store { message: String },

    #[error("No writable data directory available")]
    NoDataDir,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Validation Errors (user input, never fatal)
// ─────────────────────────────────────────────────────────────────

/// User-input validation failures.
///
/// Every variant is surfaced through the notification presenter as an
/// error toast; none is retried automatically and none crashes the app.
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid credentials. Try demo@wowbank.com / demo123")]
    InvalidCredentials,

    #[error("Please select an account type to continue")]
    NoAccountTypeSelected,

    #[error("Please fill in all required fields")]
    MissingTransferFields,

    #[error("Cannot transfer to the same account")]
    SameAccountTransfer,

    #[error("Transfer amount must be greater than $0")]
    NonPositiveAmount,
}
