//! Login modal widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use wowbank_app::login_form::{LoginField, LoginForm};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

/// Demo login modal
pub struct LoginModal<'a> {
    form: &'a LoginForm,
}

impl<'a> LoginModal<'a> {
    pub fn new(form: &'a LoginForm) -> Self {
        Self { form }
    }

    fn field_line(&self, field: LoginField, label: &'static str, value: String) -> Line<'static> {
        let focused = self.form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(marker.to_string(), styles::accent()),
            Span::styled(
                format!("{label:<10}"),
                if focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(value, styles::text_primary()),
        ])
    }
}

impl Widget for LoginModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(48, 10, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Login to WowBank ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Username
            Constraint::Length(1), // Password
            Constraint::Length(1),
            Constraint::Length(1), // Demo hint
            Constraint::Length(1),
            Constraint::Length(1), // Key hints
            Constraint::Min(0),
        ])
        .split(inner);

        self.field_line(
            LoginField::Username,
            "Username",
            self.form.username.clone(),
        )
        .render(rows[1], buf);
        // Never echo the password itself
        self.field_line(
            LoginField::Password,
            "Password",
            "•".repeat(self.form.password.chars().count()),
        )
        .render(rows[2], buf);

        Paragraph::new("Demo: demo@wowbank.com / demo123")
            .alignment(Alignment::Center)
            .style(styles::text_muted())
            .render(rows[4], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" sign in   ", styles::text_secondary()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" switch   ", styles::text_secondary()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(rows[6], buf);
    }
}
