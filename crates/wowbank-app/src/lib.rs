//! wowbank-app - Application state and update logic for the WowBank demo
//!
//! This crate implements the TEA (The Elm Architecture) pattern: `AppState`
//! is the Model, [`Message`] the event vocabulary, and [`handler::update`]
//! the pure update function. Side effects (timers, the persisted session
//! flag) are returned as [`UpdateAction`]s and executed by the TUI runner,
//! so every state transition here is testable without a terminal.

pub mod auth;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod login_form;
pub mod message;
pub mod session_store;
pub mod state;
pub mod toast;
pub mod transfer;
pub mod wizard;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use session_store::SessionStore;
pub use state::{AppState, UiMode};
