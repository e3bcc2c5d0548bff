//! Dashboard section: balances, quick actions, recent activity

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use wowbank_app::state::AppState;

use crate::theme::styles;

/// Display-only balances matching the demo's static account data.
pub const ACCOUNT_SUMMARIES: [(&str, &str, &str); 3] = [
    ("Premium Checking", "****4521", "$12,456.78"),
    ("High-Yield Savings", "****8832", "$45,230.12"),
    ("Investment Portfolio", "****2901", "$128,450.00"),
];

/// Account overview with quick actions and the activity feed
pub struct DashboardView<'a> {
    state: &'a AppState,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_balances(&self, area: Rect, buf: &mut Buffer) {
        let cards = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for (i, (name, number, balance)) in ACCOUNT_SUMMARIES.iter().enumerate() {
            let block = styles::card_block(false);
            let inner = block.inner(cards[i]);
            block.render(cards[i], buf);

            let rows = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
            Paragraph::new(*name)
                .style(styles::text_secondary())
                .render(rows[0], buf);
            Paragraph::new(*number)
                .style(styles::text_muted())
                .render(rows[1], buf);
            Paragraph::new(*balance)
                .style(styles::accent_bold())
                .render(rows[2], buf);
        }
    }

    fn render_quick_actions(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title(" Quick Actions ");
        let inner = block.inner(area);
        block.render(area, buf);

        let actions = [
            ("t", "Transfer Money"),
            ("p", "Pay Bills"),
            ("m", "Mobile Deposit"),
            ("e", "View Statements"),
        ];
        let mut spans: Vec<Span> = Vec::new();
        for (key, label) in actions {
            spans.push(Span::styled(format!("  {key} "), styles::keybinding()));
            spans.push(Span::styled(label, styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .render(inner, buf);
    }

    fn render_feed(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title(" Recent Activity ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.feed.is_empty() {
            Paragraph::new("No recent transactions")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .state
            .feed
            .entries()
            .map(|entry| {
                let width = inner.width as usize;
                let left = format!("{}  {}", entry.title, entry.time_label);
                let pad = width
                    .saturating_sub(left.chars().count() + entry.amount_label.chars().count());
                Line::from(vec![
                    Span::styled(entry.title.clone(), styles::text_primary()),
                    Span::styled(format!("  {}", entry.time_label), styles::text_muted()),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(entry.amount_label.clone(), styles::amount(entry.is_credit)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(5), // Balance cards
            Constraint::Length(3), // Quick actions
            Constraint::Min(4),    // Recent activity
        ])
        .split(area);

        self.render_balances(chunks[0], buf);
        self.render_quick_actions(chunks[1], buf);
        self.render_feed(chunks[2], buf);
    }
}
