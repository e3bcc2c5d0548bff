//! # wowbank-core - Core Domain Types
//!
//! Foundation crate for the WowBank terminal demo. Provides domain types,
//! error handling, the validation taxonomy, the bounded activity feed, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Section`] - A routable screen, split into public and authenticated contexts
//! - [`AccountKind`] - Transfer source/destination accounts with display labels
//! - [`AccountType`] - Account products offered by the opening wizard
//! - [`NotificationKind`] - Toast severity (Success, Error, Info)
//! - [`TransactionEntry`] - A synthetic, display-only transaction record
//!
//! ### Activity Feed (`feed`)
//! - [`ActivityFeed`] - Bounded most-recent-first list of transactions
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`] - Infrastructure errors (IO, terminal, store)
//! - [`ValidationError`] - User-input failures surfaced as error toasts
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use wowbank_core::prelude::*;
//! ```

pub mod error;
pub mod feed;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all WowBank crates
pub mod prelude {
    pub use super::error::{Error, Result, ValidationError};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ValidationError};
pub use feed::ActivityFeed;
pub use types::{AccountKind, AccountType, NotificationKind, Section, TransactionEntry};
