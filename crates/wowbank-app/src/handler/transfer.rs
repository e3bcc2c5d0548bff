//! Transfer form handlers
//!
//! Submission is two-stage: `SubmitTransfer` validates and starts a
//! simulated processing delay, `TransferSettled` lands the entry in the
//! feed and resets the form. Nothing ever moves real money.

use tracing::{debug, info};

use wowbank_core::types::{AccountKind, NotificationKind, TransactionEntry};

use crate::message::Message;
use crate::state::AppState;

use super::{toast, UpdateAction, UpdateResult};

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.transfer_form.focus_next();
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    state.transfer_form.focus_previous();
    UpdateResult::none()
}

pub fn handle_cycle_account(state: &mut AppState, forward: bool) -> UpdateResult {
    state.transfer_form.cycle_account(forward);
    UpdateResult::none()
}

/// Edit the focused field. Crossing the large-amount threshold raises a
/// non-blocking advisory; it never gates submission.
pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    let threshold = state.settings.limits.large_transfer_threshold;
    let exceeded_before = state.transfer_form.amount_exceeds_advisory(threshold);
    state.transfer_form.push_char(c);
    advisory_if_crossed(state, exceeded_before)
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    let threshold = state.settings.limits.large_transfer_threshold;
    let exceeded_before = state.transfer_form.amount_exceeds_advisory(threshold);
    state.transfer_form.pop_char();
    advisory_if_crossed(state, exceeded_before)
}

fn advisory_if_crossed(state: &mut AppState, exceeded_before: bool) -> UpdateResult {
    let threshold = state.settings.limits.large_transfer_threshold;
    if !exceeded_before && state.transfer_form.amount_exceeds_advisory(threshold) {
        return toast::show_toast(
            state,
            "Large transfers may require additional verification".to_string(),
            NotificationKind::Info,
        );
    }
    UpdateResult::none()
}

/// Validate and start the simulated processing window.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.transfer_form.submitting {
        debug!("transfer submit ignored, already processing");
        return UpdateResult::none();
    }

    let request = match state.transfer_form.validate() {
        Ok(request) => request,
        Err(e) => return toast::show_toast(state, e.to_string(), NotificationKind::Error),
    };

    info!(from = %request.from, to = %request.to, amount = %request.amount, "transfer submitted");
    state.transfer_form.submitting = true;
    UpdateResult::action(UpdateAction::schedule(
        state.settings.timing.transfer_processing(),
        Message::settled(&request),
    ))
}

/// Simulated processing finished: record the entry, reset the form and
/// confirm with a success toast quoting the amount exactly as entered.
pub fn handle_settled(
    state: &mut AppState,
    destination: AccountKind,
    amount: String,
) -> UpdateResult {
    state
        .feed
        .record(TransactionEntry::transfer(Some(destination), &amount));
    state.transfer_form.reset();
    toast::show_toast(
        state,
        format!("Transfer of ${amount} scheduled successfully!"),
        NotificationKind::Success,
    )
}
