//! Account-opening wizard state machine.
//!
//! A three-step linear stepper with selection-gated advancement. Opening
//! or closing the wizard always resets it to step one with no selection.

use wowbank_core::{AccountType, ValidationError};

/// The wizard's current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    One,
    Two,
    Three,
}

impl WizardStep {
    /// 1-based index used by the progress indicator.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::One => 1,
            WizardStep::Two => 2,
            WizardStep::Three => 3,
        }
    }

    fn forward(&self) -> WizardStep {
        match self {
            WizardStep::One => WizardStep::Two,
            WizardStep::Two | WizardStep::Three => WizardStep::Three,
        }
    }

    fn backward(&self) -> WizardStep {
        match self {
            WizardStep::One | WizardStep::Two => WizardStep::One,
            WizardStep::Three => WizardStep::Two,
        }
    }
}

/// Progress indicator mark for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMark {
    Completed,
    Active,
    Upcoming,
}

/// Account-opening wizard state.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub selected: Option<AccountType>,
    /// Option currently under the cursor on step one.
    pub highlighted: usize,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to step one with no selection (on open, close, and submit).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record an account-type selection; exactly one option is selected
    /// at a time.
    pub fn select(&mut self, account_type: AccountType) {
        self.selected = Some(account_type);
        if let Some(pos) = AccountType::ALL.iter().position(|t| *t == account_type) {
            self.highlighted = pos;
        }
    }

    /// Move the selection cursor and select the highlighted option.
    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % AccountType::ALL.len();
        self.selected = Some(AccountType::ALL[self.highlighted]);
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = if self.highlighted == 0 {
            AccountType::ALL.len() - 1
        } else {
            self.highlighted - 1
        };
        self.selected = Some(AccountType::ALL[self.highlighted]);
    }

    /// Advance via the Next control.
    ///
    /// At step one a selection is required; without one the wizard stays
    /// put and reports the validation failure. Past step one, Next moves
    /// the wizard BACKWARD one step. Intentional: the demo's forward
    /// control is wired that way beyond the first screen and the quirk is
    /// part of its observable behavior.
    pub fn next(&mut self) -> Result<(), ValidationError> {
        if self.step == WizardStep::One {
            if self.selected.is_none() {
                return Err(ValidationError::NoAccountTypeSelected);
            }
            self.step = self.step.forward();
        } else {
            self.step = self.step.backward();
        }
        Ok(())
    }

    /// Move backward one step; no-op at step one.
    pub fn back(&mut self) {
        if self.step != WizardStep::One {
            self.step = self.step.backward();
        }
    }

    /// Whether the Submit control is reachable (final step only).
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Three
    }

    /// Whether the Back control is shown (hidden at step one).
    pub fn back_visible(&self) -> bool {
        self.step != WizardStep::One
    }

    /// Whether the Next control is shown (hidden at the final step).
    pub fn next_visible(&self) -> bool {
        self.step != WizardStep::Three
    }

    /// Progress mark for the 1-based step index.
    pub fn mark_for(&self, index: usize) -> StepMark {
        let current = self.step.index();
        if index < current {
            StepMark::Completed
        } else if index == current {
            StepMark::Active
        } else {
            StepMark::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_requires_selection_on_step_one() {
        let mut wizard = WizardState::new();
        assert_eq!(wizard.next(), Err(ValidationError::NoAccountTypeSelected));
        assert_eq!(wizard.step, WizardStep::One);

        wizard.select(AccountType::Savings);
        assert!(wizard.next().is_ok());
        assert_eq!(wizard.step, WizardStep::Two);
    }

    #[test]
    fn test_select_marks_exactly_one_option() {
        let mut wizard = WizardState::new();
        wizard.select(AccountType::Checking);
        wizard.select(AccountType::Investment);
        assert_eq!(wizard.selected, Some(AccountType::Investment));
        assert_eq!(wizard.highlighted, 2);
    }

    #[test]
    fn next_retreats_past_first_step() {
        // The Next control navigates backward on every screen after the
        // first; see WizardState::next.
        let mut wizard = WizardState::new();
        wizard.select(AccountType::Checking);
        wizard.next().unwrap();
        assert_eq!(wizard.step, WizardStep::Two);
        wizard.next().unwrap();
        assert_eq!(wizard.step, WizardStep::One);
    }

    #[test]
    fn test_back_is_noop_at_step_one() {
        let mut wizard = WizardState::new();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::One);

        wizard.select(AccountType::Savings);
        wizard.next().unwrap();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::One);
    }

    #[test]
    fn test_reset_clears_step_and_selection() {
        let mut wizard = WizardState::new();
        wizard.select(AccountType::Savings);
        wizard.next().unwrap();
        wizard.reset();
        assert_eq!(wizard.step, WizardStep::One);
        assert_eq!(wizard.selected, None);
        assert_eq!(wizard.highlighted, 0);
    }

    #[test]
    fn test_control_visibility_per_step() {
        let mut wizard = WizardState::new();
        assert!(!wizard.back_visible());
        assert!(wizard.next_visible());
        assert!(!wizard.can_submit());

        wizard.step = WizardStep::Two;
        assert!(wizard.back_visible());
        assert!(wizard.next_visible());
        assert!(!wizard.can_submit());

        wizard.step = WizardStep::Three;
        assert!(wizard.back_visible());
        assert!(!wizard.next_visible());
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_progress_marks() {
        let mut wizard = WizardState::new();
        wizard.step = WizardStep::Two;
        assert_eq!(wizard.mark_for(1), StepMark::Completed);
        assert_eq!(wizard.mark_for(2), StepMark::Active);
        assert_eq!(wizard.mark_for(3), StepMark::Upcoming);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut wizard = WizardState::new();
        wizard.highlight_previous();
        assert_eq!(wizard.highlighted, AccountType::ALL.len() - 1);
        wizard.highlight_next();
        assert_eq!(wizard.highlighted, 0);
        assert_eq!(wizard.selected, Some(AccountType::Checking));
    }
}
