//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `auth`: Login/logout handlers
//! - `wizard`: Account-opening wizard handlers
//! - `transfer`: Transfer form handlers
//! - `toast`: Notification presenter handlers

pub(crate) mod auth;
pub(crate) mod keys;
pub(crate) mod toast;
pub(crate) mod transfer;
pub(crate) mod update;
pub(crate) mod wizard;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Deliver a message back through the channel after a delay.
    ///
    /// All timer-driven behaviour goes through this: toast phase
    /// advances, auto-dismiss, the welcome toast, simulated transfer
    /// processing. Cancellation is by token mismatch at delivery time,
    /// never by aborting the timer itself.
    Schedule { delay: Duration, message: Box<Message> },

    /// Persist the session flag to disk
    SaveSession { logged_in: bool },
}

impl UpdateAction {
    pub fn schedule(delay: Duration, message: Message) -> Self {
        UpdateAction::Schedule {
            delay,
            message: Box::new(message),
        }
    }
}

/// Result of processing a message
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
