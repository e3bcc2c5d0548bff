//! Toast notification widget
//!
//! Renders the single live toast in the top-right corner, over whatever
//! else is on screen. The entering/leaving phases dim the border, the
//! closest a cell grid gets to a slide animation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use wowbank_app::toast::{Toast, ToastPhase};

use crate::theme::styles;

const MAX_WIDTH: u16 = 46;

/// Single-slot toast widget
pub struct ToastView<'a> {
    toast: &'a Toast,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, style) = styles::notification_indicator(self.toast.kind);

        let text_width = self.toast.message.chars().count() as u16 + 4;
        let width = text_width.min(MAX_WIDTH).min(area.width);
        if width < 6 || area.height < 3 {
            return;
        }
        let x = area.x + area.width - width;
        let toast_area = Rect::new(x, area.y, width, 3);

        Clear.render(toast_area, buf);

        let settled = self.toast.phase == ToastPhase::Visible;
        let block = styles::card_block(settled).border_style(if settled {
            style
        } else {
            styles::border_inactive()
        });
        let inner = block.inner(toast_area);
        block.render(toast_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(self.toast.message.as_str(), styles::text_primary()),
        ]))
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wowbank_app::toast::ToastState;
    use wowbank_core::types::NotificationKind;

    #[test]
    fn test_toast_renders_message() {
        let mut state = ToastState::new();
        state.show("saved", NotificationKind::Success);
        let toast = state.current().unwrap();

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        ToastView::new(toast).render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("saved"));
        assert!(content.contains("✓"));
    }

    #[test]
    fn test_toast_skips_tiny_areas() {
        let mut state = ToastState::new();
        state.show("saved", NotificationKind::Info);
        let toast = state.current().unwrap();

        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        // Must not panic on areas too small to hold the box
        ToastView::new(toast).render(area, &mut buf);
    }
}
