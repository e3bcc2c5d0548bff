//! Accounts section: per-account detail cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

struct AccountCard {
    name: &'static str,
    number: &'static str,
    balance: &'static str,
    detail: &'static str,
    actions: &'static [(&'static str, &'static str)],
}

const CARDS: [AccountCard; 3] = [
    AccountCard {
        name: "Premium Checking",
        number: "Account ****4521",
        balance: "$12,456.78",
        detail: "No monthly fees · Unlimited transactions",
        actions: &[("v", "View Transactions"), ("t", "Transfer Funds")],
    },
    AccountCard {
        name: "High-Yield Savings",
        number: "Account ****8832",
        balance: "$45,230.12",
        detail: "4.5% APY · Interest compounds daily",
        actions: &[("v", "View Transactions"), ("t", "Transfer Funds")],
    },
    AccountCard {
        name: "Investment Portfolio",
        number: "Account ****2901",
        balance: "$128,450.00",
        detail: "+12.3% this year",
        actions: &[("h", "View Holdings"), ("i", "Make Investment")],
    },
];

/// Per-account detail cards with their action hints
pub struct AccountsView;

impl Widget for AccountsView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

        for (i, card) in CARDS.iter().enumerate() {
            let block = styles::card_block(false).title(format!(" {} ", card.name));
            let inner = block.inner(rows[i]);
            block.render(rows[i], buf);

            let mut action_spans: Vec<Span> = Vec::new();
            for (key, label) in card.actions {
                action_spans.push(Span::styled(format!("{key} "), styles::keybinding()));
                action_spans.push(Span::styled(*label, styles::text_secondary()));
                action_spans.push(Span::raw("   "));
            }

            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(card.number, styles::text_muted()),
                    Span::raw("   "),
                    Span::styled(card.balance, styles::accent_bold()),
                ]),
                Line::from(Span::styled(card.detail, styles::text_secondary())),
                Line::default(),
                Line::from(action_spans),
            ])
            .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_render_all_cards() {
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);
        AccountsView.render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Premium Checking"));
        assert!(content.contains("High-Yield Savings"));
        assert!(content.contains("Investment Portfolio"));
        assert!(content.contains("Transfer Funds"));
    }
}
