//! Confirmation dialog widget for quit/sign-out confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use wowbank_app::confirm_dialog::ConfirmDialogState;

use crate::theme::{palette, styles};

use super::modal_overlay::centered_rect;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(50, 7, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(chunks[1], buf);

        // Option labels with their keys: first option confirms, second cancels
        let mut spans: Vec<Span> = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let key = if i == 0 { "y" } else { "n" };
            spans.push(Span::styled(format!("[{key}] "), styles::keybinding()));
            spans.push(Span::styled(
                label.as_str(),
                Style::default().fg(palette::TEXT_PRIMARY),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_renders_title_and_options() {
        let state = ConfirmDialogState::quit_confirmation();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ConfirmDialog::new(&state).render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Quit"));
        assert!(content.contains("[y]"));
        assert!(content.contains("[n]"));
    }
}
