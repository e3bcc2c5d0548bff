//! Main render/view function (View in TEA pattern)

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use wowbank_app::state::{AppState, UiMode};
use wowbank_core::types::Section;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets;
use crate::widgets::modal_overlay::dim_background;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: derives everything from the state, mutates nothing.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state), areas.header);

    match state.route {
        Section::Home => frame.render_widget(widgets::HomeView, areas.body),
        Section::Dashboard => {
            frame.render_widget(widgets::DashboardView::new(state), areas.body)
        }
        Section::Accounts => frame.render_widget(widgets::AccountsView, areas.body),
        Section::Transfer => frame.render_widget(
            widgets::TransferFormView::new(&state.transfer_form),
            areas.body,
        ),
        Section::Profile => frame.render_widget(widgets::ProfileView, areas.body),
    }

    frame.render_widget(
        Paragraph::new(hint_line(state)).alignment(Alignment::Center),
        areas.footer,
    );

    // Modals over the dimmed base view
    if state.ui_mode != UiMode::Browsing {
        dim_background(frame.buffer_mut(), area);
    }
    match state.ui_mode {
        UiMode::Browsing => {}
        UiMode::LoginModal => {
            frame.render_widget(widgets::LoginModal::new(&state.login_form), area)
        }
        UiMode::WizardModal => {
            frame.render_widget(widgets::WizardModal::new(&state.wizard), area)
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
    }

    // The toast floats above everything, modals included
    if let Some(toast) = state.toast.current() {
        frame.render_widget(widgets::ToastView::new(toast), area);
    }
}

/// Context-sensitive hints for the footer line
fn hint_line(state: &AppState) -> Line<'static> {
    let hints: &[(&str, &str)] = match state.ui_mode {
        UiMode::LoginModal | UiMode::WizardModal => &[("Esc", "close"), ("Ctrl+K", "dismiss toast")],
        UiMode::ConfirmDialog => &[("y", "confirm"), ("n", "cancel")],
        UiMode::Browsing if state.route == Section::Transfer => &[
            ("Tab", "next field"),
            ("←/→", "pick account"),
            ("Enter", "submit"),
            ("Alt+1-4", "sections"),
        ],
        UiMode::Browsing if state.logged_in => &[
            ("Tab", "sections"),
            ("1-4", "jump"),
            ("x", "sign out"),
            ("q", "quit"),
        ],
        UiMode::Browsing => &[("l", "login"), ("o", "open account"), ("q", "quit")],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key} "), styles::keybinding()));
        spans.push(Span::styled(format!("{action} "), styles::text_muted()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_view_renders_public_home() {
        let state = AppState::new();
        let content = draw_to_string(&state);
        assert!(content.contains("WowBank"));
        assert!(content.contains("Banking Made Simple"));
    }

    #[test]
    fn test_view_renders_dashboard_when_logged_in() {
        let mut state = AppState::new();
        state.logged_in = true;
        state.route = Section::Dashboard;
        let content = draw_to_string(&state);
        assert!(content.contains("Recent Activity"));
    }

    #[test]
    fn test_view_renders_login_modal_over_home() {
        let mut state = AppState::new();
        state.open_login_modal();
        let content = draw_to_string(&state);
        assert!(content.contains("Login to WowBank"));
    }

    #[test]
    fn test_view_renders_toast_above_everything() {
        let mut state = AppState::new();
        state.open_login_modal();
        state.toast.show("hello there", wowbank_core::types::NotificationKind::Info);
        let content = draw_to_string(&state);
        assert!(content.contains("hello there"));
    }

    #[test]
    fn test_view_survives_tiny_terminal() {
        let state = AppState::new();
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, &state)).unwrap();
    }
}
