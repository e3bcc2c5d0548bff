//! Public homepage section

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Marketing hero shown while logged out
pub struct HomeView;

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Tagline
            Constraint::Length(2),
            Constraint::Length(1), // Feature row
            Constraint::Length(2),
            Constraint::Length(1), // Call to action
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new("Banking Made Simple")
            .alignment(Alignment::Center)
            .style(styles::accent_bold())
            .render(chunks[1], buf);

        Paragraph::new("Experience the future of digital banking with WowBank")
            .alignment(Alignment::Center)
            .style(styles::text_secondary())
            .render(chunks[2], buf);

        Paragraph::new("No hidden fees   ·   24/7 support   ·   Instant transfers")
            .alignment(Alignment::Center)
            .style(styles::text_muted())
            .render(chunks[4], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("l", styles::keybinding()),
            Span::styled(" login    ", styles::text_secondary()),
            Span::styled("o", styles::keybinding()),
            Span::styled(" open an account", styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);
    }
}
