//! Transfer form state and validation.

use chrono::Local;
use wowbank_core::{AccountKind, ValidationError};

/// Focusable transfer form field, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferField {
    #[default]
    From,
    To,
    Amount,
    Memo,
    Date,
}

impl TransferField {
    pub fn next(&self) -> TransferField {
        match self {
            TransferField::From => TransferField::To,
            TransferField::To => TransferField::Amount,
            TransferField::Amount => TransferField::Memo,
            TransferField::Memo => TransferField::Date,
            TransferField::Date => TransferField::From,
        }
    }

    pub fn previous(&self) -> TransferField {
        match self {
            TransferField::From => TransferField::Date,
            TransferField::To => TransferField::From,
            TransferField::Amount => TransferField::To,
            TransferField::Memo => TransferField::Amount,
            TransferField::Date => TransferField::Memo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransferField::From => "From Account",
            TransferField::To => "To Account",
            TransferField::Amount => "Amount",
            TransferField::Memo => "Memo (optional)",
            TransferField::Date => "Transfer Date",
        }
    }
}

/// A validated transfer request; exists only for the duration of the
/// submission handling (never persisted).
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub from: AccountKind,
    pub to: AccountKind,
    /// Amount exactly as entered (already validated to parse > 0)
    pub amount: String,
    pub memo: String,
}

/// Transfer form buffers, focus, and the processing flag.
#[derive(Debug, Clone)]
pub struct TransferForm {
    pub from: Option<AccountKind>,
    pub to: Option<AccountKind>,
    pub amount: String,
    pub memo: String,
    /// ISO date buffer; defaults to today and resets to today.
    pub date: String,
    pub focus: TransferField,
    /// True while the simulated processing delay is in flight; the submit
    /// control is disabled and further submissions are ignored.
    pub submitting: bool,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            amount: String::new(),
            memo: String::new(),
            date: today(),
            focus: TransferField::From,
            submitting: false,
        }
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

impl TransferForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all fields; the date defaults back to the current day.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Cycle the focused account field through its options.
    pub fn cycle_account(&mut self, forward: bool) {
        let slot = match self.focus {
            TransferField::From => &mut self.from,
            TransferField::To => &mut self.to,
            _ => return,
        };
        let len = AccountKind::ALL.len();
        let idx = match *slot {
            None => {
                if forward {
                    0
                } else {
                    len - 1
                }
            }
            Some(kind) => {
                let pos = AccountKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                if forward {
                    (pos + 1) % len
                } else {
                    (pos + len - 1) % len
                }
            }
        };
        *slot = Some(AccountKind::ALL[idx]);
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            TransferField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount.push(c);
                }
            }
            TransferField::Memo => self.memo.push(c),
            TransferField::Date => {
                if c.is_ascii_digit() || c == '-' {
                    self.date.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            TransferField::Amount => {
                self.amount.pop();
            }
            TransferField::Memo => {
                self.memo.pop();
            }
            TransferField::Date => {
                self.date.pop();
            }
            _ => {}
        }
    }

    /// Parsed amount, if the buffer holds a number.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }

    /// True while the typed amount exceeds the soft advisory threshold
    /// (`limits.large_transfer_threshold` in the settings). The advisory
    /// raises a hint toast while typing; it never prevents submission.
    pub fn amount_exceeds_advisory(&self, threshold: f64) -> bool {
        self.parsed_amount()
            .map(|a| a > threshold)
            .unwrap_or(false)
    }

    /// Validate the form. First failing check wins:
    /// 1. from, to and amount must all be present;
    /// 2. from and to must differ;
    /// 3. the parsed amount must be greater than zero.
    pub fn validate(&self) -> Result<TransferRequest, ValidationError> {
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return Err(ValidationError::MissingTransferFields);
        };
        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingTransferFields);
        }
        if from == to {
            return Err(ValidationError::SameAccountTransfer);
        }
        match self.parsed_amount() {
            Some(amount) if amount > 0.0 => Ok(TransferRequest {
                from,
                to,
                amount: self.amount.trim().to_string(),
                memo: self.memo.clone(),
            }),
            _ => Err(ValidationError::NonPositiveAmount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(from: AccountKind, to: AccountKind, amount: &str) -> TransferForm {
        TransferForm {
            from: Some(from),
            to: Some(to),
            amount: amount.to_string(),
            ..TransferForm::default()
        }
    }

    #[test]
    fn test_missing_fields_rejected_first() {
        let form = TransferForm::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingTransferFields));

        // Missing amount also counts as a missing field, even when the
        // accounts would already fail the same-account check.
        let form = filled(AccountKind::Checking, AccountKind::Checking, "");
        assert_eq!(form.validate(), Err(ValidationError::MissingTransferFields));
    }

    #[test]
    fn test_same_account_rejected() {
        let form = filled(AccountKind::Checking, AccountKind::Checking, "100");
        assert_eq!(form.validate(), Err(ValidationError::SameAccountTransfer));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let form = filled(AccountKind::Checking, AccountKind::Savings, "0");
        assert_eq!(form.validate(), Err(ValidationError::NonPositiveAmount));

        let form = filled(AccountKind::Checking, AccountKind::Savings, "0.00");
        assert_eq!(form.validate(), Err(ValidationError::NonPositiveAmount));

        // Unparseable amounts fail the positivity check too
        let form = filled(AccountKind::Checking, AccountKind::Savings, "12.3.4");
        assert_eq!(form.validate(), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_valid_transfer_keeps_literal_amount() {
        let form = filled(AccountKind::Checking, AccountKind::Savings, "250.50");
        let request = form.validate().unwrap();
        assert_eq!(request.from, AccountKind::Checking);
        assert_eq!(request.to, AccountKind::Savings);
        assert_eq!(request.amount, "250.50");
    }

    #[test]
    fn test_advisory_threshold_is_soft() {
        let form = filled(AccountKind::Checking, AccountKind::Savings, "50001");
        assert!(form.amount_exceeds_advisory(50_000.0));
        // Still validates: the advisory never blocks submission
        assert!(form.validate().is_ok());

        let form = filled(AccountKind::Checking, AccountKind::Savings, "50000");
        assert!(!form.amount_exceeds_advisory(50_000.0));
    }

    #[test]
    fn test_reset_restores_today() {
        let mut form = filled(AccountKind::Checking, AccountKind::Savings, "10");
        form.date = "1999-01-01".to_string();
        form.memo = "rent".to_string();
        form.submitting = true;
        form.reset();
        assert_eq!(form.from, None);
        assert_eq!(form.amount, "");
        assert_eq!(form.memo, "");
        assert!(!form.submitting);
        assert_eq!(form.date, Local::now().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_account_cycling_covers_all_options() {
        let mut form = TransferForm::new();
        form.cycle_account(true);
        assert_eq!(form.from, Some(AccountKind::Checking));
        form.cycle_account(true);
        assert_eq!(form.from, Some(AccountKind::Savings));
        form.cycle_account(true);
        assert_eq!(form.from, Some(AccountKind::External));
        form.cycle_account(true);
        assert_eq!(form.from, Some(AccountKind::Checking));
        form.cycle_account(false);
        assert_eq!(form.from, Some(AccountKind::External));
    }

    #[test]
    fn test_amount_input_filters_non_numeric() {
        let mut form = TransferForm::new();
        form.focus = TransferField::Amount;
        for c in "1a2.b5".chars() {
            form.push_char(c);
        }
        assert_eq!(form.amount, "12.5");
    }
}
