//! Account-opening wizard modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use wowbank_app::wizard::{StepMark, WizardState, WizardStep};
use wowbank_core::types::AccountType;

use crate::theme::styles;

use super::modal_overlay::centered_rect;

const STEP_TITLES: [&str; 3] = ["Choose Account Type", "Personal Information", "Review & Confirm"];

/// Three-step account-opening wizard
pub struct WizardModal<'a> {
    wizard: &'a WizardState,
}

impl<'a> WizardModal<'a> {
    pub fn new(wizard: &'a WizardState) -> Self {
        Self { wizard }
    }

    fn progress_line(&self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        for (i, title) in STEP_TITLES.iter().enumerate() {
            let index = i + 1;
            let (marker, style) = match self.wizard.mark_for(index) {
                StepMark::Completed => ("●", styles::accent()),
                StepMark::Active => ("●", styles::accent_bold()),
                StepMark::Upcoming => ("○", styles::text_muted()),
            };
            if i > 0 {
                spans.push(Span::styled("──", styles::text_muted()));
            }
            spans.push(Span::styled(format!(" {marker} {index}. {title} "), style));
        }
        Line::from(spans)
    }

    fn step_body(&self) -> Vec<Line<'static>> {
        match self.wizard.step {
            WizardStep::One => AccountType::ALL
                .iter()
                .enumerate()
                .map(|(i, account_type)| {
                    let highlighted = i == self.wizard.highlighted;
                    let selected = self.wizard.selected == Some(*account_type);
                    let marker = if selected { "◉" } else { "○" };
                    let style = if highlighted {
                        styles::focused_selected()
                    } else {
                        styles::text_primary()
                    };
                    Line::from(Span::styled(
                        format!(" {marker} {} ", account_type.display_label()),
                        style,
                    ))
                })
                .collect(),
            WizardStep::Two => vec![
                Line::from(Span::styled(
                    "We have your details on file for this demo:",
                    styles::text_secondary(),
                )),
                Line::default(),
                Line::from(Span::styled("   John Demo", styles::text_primary())),
                Line::from(Span::styled("   demo@wowbank.com", styles::text_primary())),
                Line::from(Span::styled("   (555) 010-4521", styles::text_primary())),
            ],
            WizardStep::Three => {
                let selected = self
                    .wizard
                    .selected
                    .map(|t| t.display_label())
                    .unwrap_or("—");
                vec![
                    Line::from(vec![
                        Span::styled("Account type:  ", styles::text_secondary()),
                        Span::styled(selected, styles::accent_bold()),
                    ]),
                    Line::default(),
                    Line::from(Span::styled(
                        "Press Enter to submit your application.",
                        styles::text_secondary(),
                    )),
                ]
            }
        }
    }

    fn controls_line(&self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        if self.wizard.back_visible() {
            spans.push(Span::styled("b", styles::keybinding()));
            spans.push(Span::styled(" back   ", styles::text_secondary()));
        }
        if self.wizard.next_visible() {
            spans.push(Span::styled("n", styles::keybinding()));
            spans.push(Span::styled(" next   ", styles::text_secondary()));
        }
        if self.wizard.can_submit() {
            spans.push(Span::styled("Enter", styles::keybinding()));
            spans.push(Span::styled(" submit   ", styles::text_secondary()));
        }
        spans.push(Span::styled("Esc", styles::keybinding()));
        spans.push(Span::styled(" close", styles::text_secondary()));
        Line::from(spans)
    }
}

impl Widget for WizardModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(64, 13, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Open a New Account ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // Progress
            Constraint::Length(1),
            Constraint::Min(5), // Step content
            Constraint::Length(1),
            Constraint::Length(1), // Controls
        ])
        .split(inner);

        Paragraph::new(self.progress_line())
            .alignment(Alignment::Center)
            .render(rows[0], buf);
        Paragraph::new(self.step_body()).render(rows[2], buf);
        Paragraph::new(self.controls_line())
            .alignment(Alignment::Center)
            .render(rows[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(wizard: &WizardState) -> String {
        let area = Rect::new(0, 0, 80, 16);
        let mut buf = Buffer::empty(area);
        WizardModal::new(wizard).render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_step_one_lists_account_types() {
        let wizard = WizardState::new();
        let content = render_to_string(&wizard);
        assert!(content.contains("Premium Checking"));
        assert!(content.contains("High-Yield Savings"));
        assert!(content.contains("Investment Account"));
        // Back is hidden on the first step
        assert!(!content.contains("b back"));
    }

    #[test]
    fn test_final_step_shows_selection_and_submit() {
        let mut wizard = WizardState::new();
        wizard.select(AccountType::Savings);
        wizard.step = WizardStep::Three;
        let content = render_to_string(&wizard);
        assert!(content.contains("High-Yield Savings"));
        assert!(content.contains("submit"));
        // Next is hidden on the final step
        assert!(!content.contains("n next"));
    }
}
