//! Profile section

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Profile settings cards; every action is a placeholder
pub struct ProfileView;

impl Widget for ProfileView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(7), Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let info = styles::card_block(false).title(" Personal Information ");
        let inner = info.inner(rows[0]);
        info.render(rows[0], buf);
        Paragraph::new(vec![
            detail_line("Name", "John Demo"),
            detail_line("Email", "demo@wowbank.com"),
            detail_line("Phone", "(555) 010-4521"),
            detail_line("Member since", "2019"),
        ])
        .render(inner, buf);

        let security = styles::card_block(false).title(" Settings ");
        let inner = security.inner(rows[1]);
        security.render(rows[1], buf);
        let mut spans: Vec<Span> = Vec::new();
        for (key, label) in [
            ("e", "Edit Profile"),
            ("p", "Change Password"),
            ("n", "Notification Settings"),
        ] {
            spans.push(Span::styled(format!("  {key} "), styles::keybinding()));
            spans.push(Span::styled(label, styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

fn detail_line(label: &'static str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_renders_demo_identity() {
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        ProfileView.render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("John Demo"));
        assert!(content.contains("demo@wowbank.com"));
        assert!(content.contains("Change Password"));
    }
}
