//! Header bar widget
//!
//! Brand on the left, the nav for the current context on the right. The
//! header has two faces: the public marketing nav and the authenticated
//! section nav, switched by the login state.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use wowbank_app::state::AppState;
use wowbank_core::types::Section;

use crate::theme::{palette, styles};

/// Main header showing the brand and context-dependent nav
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn nav_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            " WowBank ",
            styles::accent_bold(),
        )];
        spans.push(Span::styled("│ ", styles::text_muted()));

        if self.state.logged_in {
            for (i, section) in Section::AUTHENTICATED.iter().enumerate() {
                // Highlight is derived from the active route; they can
                // never disagree
                let style = if *section == self.state.route {
                    styles::focused_selected()
                } else {
                    styles::text_secondary()
                };
                spans.push(Span::styled(
                    format!(" {} {} ", i + 1, section.nav_label()),
                    style,
                ));
            }
            spans.push(Span::styled("│ ", styles::text_muted()));
            spans.push(Span::styled(" x ", styles::keybinding()));
            spans.push(Span::styled("Sign Out", styles::text_secondary()));
        } else {
            spans.push(Span::styled(" Home ", styles::focused_selected()));
            for (key, label) in [("a", "About"), ("s", "Services"), ("c", "Contact")] {
                spans.push(Span::styled(format!(" {key} "), styles::keybinding()));
                spans.push(Span::styled(
                    label.to_string(),
                    styles::text_secondary(),
                ));
            }
            spans.push(Span::styled("│ ", styles::text_muted()));
            spans.push(Span::styled(" l ", styles::keybinding()));
            spans.push(Span::styled("Login", styles::text_secondary()));
        }

        Line::from(spans)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.nav_line())
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}
