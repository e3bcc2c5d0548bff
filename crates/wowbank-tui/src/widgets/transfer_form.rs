//! Transfer form section

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use wowbank_app::transfer::{TransferField, TransferForm};
use wowbank_core::types::AccountKind;

use crate::theme::styles;

/// Funds transfer form
pub struct TransferFormView<'a> {
    form: &'a TransferForm,
}

impl<'a> TransferFormView<'a> {
    pub fn new(form: &'a TransferForm) -> Self {
        Self { form }
    }

    fn account_value(kind: Option<AccountKind>) -> String {
        match kind {
            Some(kind) => format!("◂ {} ▸", kind.display_label()),
            None => "◂ select account ▸".to_string(),
        }
    }

    fn field_line(&self, field: TransferField, value: String) -> Line<'static> {
        let focused = self.form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let value_style = if focused {
            styles::text_primary()
        } else {
            styles::text_muted()
        };
        Line::from(vec![
            Span::styled(marker.to_string(), styles::accent()),
            Span::styled(format!("{:<14}", field.label()), label_style),
            Span::styled(value, value_style),
        ])
    }
}

impl Widget for TransferFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(true).title(" Transfer Funds ");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // From
            Constraint::Length(1), // To
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Memo
            Constraint::Length(1), // Date
            Constraint::Length(1),
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

        let amount = if self.form.amount.is_empty() {
            "0.00".to_string()
        } else {
            self.form.amount.clone()
        };

        self.field_line(TransferField::From, Self::account_value(self.form.from))
            .render(rows[1], buf);
        self.field_line(TransferField::To, Self::account_value(self.form.to))
            .render(rows[2], buf);
        self.field_line(TransferField::Amount, format!("${amount}"))
            .render(rows[3], buf);
        self.field_line(TransferField::Memo, self.form.memo.clone())
            .render(rows[4], buf);
        self.field_line(TransferField::Date, self.form.date.clone())
            .render(rows[5], buf);

        // Mirrors the button swapping to "Processing..." while disabled
        let submit = if self.form.submitting {
            Span::styled("[ Processing... ]", styles::text_muted())
        } else {
            Span::styled("[ Enter: Transfer Funds ]", styles::focused_selected())
        };
        Paragraph::new(Line::from(submit)).render(rows[7], buf);
    }
}
