//! Semantic style builders for the WowBank theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use wowbank_core::types::NotificationKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Money styles ---
pub fn amount(is_credit: bool) -> Style {
    Style::default()
        .fg(if is_credit {
            palette::AMOUNT_CREDIT
        } else {
            palette::AMOUNT_DEBIT
        })
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Notification kind mapping ---

/// `(icon, Style)` pair for a toast of the given kind.
pub fn notification_indicator(kind: NotificationKind) -> (&'static str, Style) {
    let color = match kind {
        NotificationKind::Success => palette::NOTIFY_SUCCESS,
        NotificationKind::Error => palette::NOTIFY_ERROR,
        NotificationKind::Info => palette::NOTIFY_INFO,
    };
    let icon = match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
        NotificationKind::Info => "ℹ",
    };
    (icon, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_notification_colors_per_kind() {
        assert_eq!(
            notification_indicator(NotificationKind::Success).1.fg,
            Some(palette::NOTIFY_SUCCESS)
        );
        assert_eq!(
            notification_indicator(NotificationKind::Error).1.fg,
            Some(palette::NOTIFY_ERROR)
        );
        assert_eq!(
            notification_indicator(NotificationKind::Info).1.fg,
            Some(palette::NOTIFY_INFO)
        );
    }

    #[test]
    fn test_amount_styles() {
        assert_eq!(amount(true).fg, Some(palette::AMOUNT_CREDIT));
        assert_eq!(amount(false).fg, Some(palette::AMOUNT_DEBIT));
    }
}
