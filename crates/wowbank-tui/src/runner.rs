//! Main TUI runner - entry point and event loop
//!
//! Owns the message channel, executes the side effects the update
//! function requests, and drains/draws at a fixed cadence.

use std::time::Duration;

use tokio::sync::mpsc;

use wowbank_app::handler;
use wowbank_app::message::Message;
use wowbank_app::state::AppState;
use wowbank_app::{Settings, SessionStore, UpdateAction};
use wowbank_core::prelude::*;

use crate::{event, render, signals, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // The persisted flag decides whether we start on the dashboard
    let store = SessionStore::new()?;
    let logged_in = store.load();
    info!("Starting TUI, persisted session: {logged_in}");

    let mut state = AppState::with_settings(settings, logged_in);

    let mut term = ratatui::init();

    // Unified message channel (terminal events, timers, signals)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // SIGINT/SIGTERM arrive as Message::Quit through the same channel
    signals::spawn_signal_handler(msg_tx.clone());

    schedule_resume_welcome(&state, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &store);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    store: &SessionStore,
) -> Result<()> {
    while !state.should_quit {
        // Drain external messages (timers, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, store);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (blocks up to the poll timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, store);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, following
/// follow-up messages and executing requested actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    store: &SessionStore,
) {
    let mut msg = Some(message);
    while let Some(m) = msg.take() {
        let result = handler::update(state, m);
        for action in result.actions {
            handle_action(action, msg_tx, store);
        }
        msg = result.message;
    }
}

/// Execute a side effect requested by the update function
fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, store: &SessionStore) {
    match action {
        UpdateAction::Schedule { delay, message } => {
            schedule_message(msg_tx, delay, *message);
        }
        UpdateAction::SaveSession { logged_in } => {
            // Logging out removes the flag file rather than writing false
            let result = if logged_in {
                store.save(true)
            } else {
                store.clear()
            };
            if let Err(e) = result {
                warn!("Failed to persist session flag: {e}");
            }
        }
    }
}

/// A returning session gets the same delayed welcome as a fresh login.
fn schedule_resume_welcome(state: &AppState, msg_tx: &mpsc::Sender<Message>) {
    if state.logged_in {
        schedule_message(
            msg_tx,
            state.settings.timing.welcome_delay(),
            Message::WelcomeToast,
        );
    }
}

/// Deliver a message through the channel after a delay.
///
/// The timer itself is never cancelled; staleness is decided at
/// delivery time by the receiving handler (token mismatch).
fn schedule_message(msg_tx: &mpsc::Sender<Message>, delay: Duration, message: Message) {
    let tx = msg_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(message).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wowbank_core::types::Section;

    fn test_store(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::with_base_dir(dir.path())
    }

    #[tokio::test]
    async fn test_process_message_follows_chain_to_state_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);
        let (tx, _rx) = mpsc::channel::<Message>(16);
        let mut state = AppState::new();
        state.logged_in = true;

        // A raw key event resolves through handle_key to navigation
        process_message(
            &mut state,
            Message::Key(wowbank_app::InputKey::Char('3')),
            &tx,
            &store,
        );
        assert_eq!(state.route, Section::Transfer);
    }

    #[tokio::test]
    async fn test_save_session_action_persists_flag() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);
        let (tx, _rx) = mpsc::channel::<Message>(16);

        handle_action(UpdateAction::SaveSession { logged_in: true }, &tx, &store);
        assert!(store.load());

        handle_action(UpdateAction::SaveSession { logged_in: false }, &tx, &store);
        assert!(!store.load());
    }

    #[tokio::test]
    async fn test_persisted_session_schedules_welcome_toast() {
        let mut settings = Settings::default();
        settings.timing.welcome_delay_ms = 1;
        let state = AppState::with_settings(settings, true);
        let (tx, mut rx) = mpsc::channel::<Message>(16);

        schedule_resume_welcome(&state, &tx);
        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(matches!(msg, Some(Message::WelcomeToast)));
    }

    #[tokio::test]
    async fn test_fresh_start_schedules_no_welcome_toast() {
        let state = AppState::with_settings(Settings::default(), false);
        let (tx, mut rx) = mpsc::channel::<Message>(16);

        schedule_resume_welcome(&state, &tx);
        drop(tx);
        // With no timer spawned the channel closes empty
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_schedule_action_delivers_message() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);
        let (tx, mut rx) = mpsc::channel::<Message>(16);

        handle_action(
            UpdateAction::schedule(Duration::from_millis(1), Message::Tick),
            &tx,
            &store,
        );
        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(matches!(msg, Some(Message::Tick)));
    }
}
