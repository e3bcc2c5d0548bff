//! Core domain type definitions

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A routable screen of the application.
///
/// Sections are split into two independent navigation contexts: the public
/// context (shown while logged out) and the authenticated context. The
/// about/services/contact links of the public header are deliberately not
/// sections -- they only raise placeholder toasts and never route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Public marketing homepage
    #[default]
    Home,
    /// Account overview with quick actions and recent activity
    Dashboard,
    /// Per-account detail cards
    Accounts,
    /// Funds transfer form
    Transfer,
    /// Profile settings (all actions are placeholders)
    Profile,
}

impl Section {
    /// Resolve a section by its routing name.
    ///
    /// Unknown names yield `None`; callers treat that as a silent no-op.
    /// This is the permissive routing policy used throughout the app.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "homepage" => Some(Section::Home),
            "dashboard" => Some(Section::Dashboard),
            "accounts" => Some(Section::Accounts),
            "transfer" => Some(Section::Transfer),
            "profile" => Some(Section::Profile),
            _ => None,
        }
    }

    /// Whether this section belongs to the authenticated context.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Section::Home)
    }

    /// Nav label shown in the header for this section.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Dashboard => "Dashboard",
            Section::Accounts => "Accounts",
            Section::Transfer => "Transfer",
            Section::Profile => "Profile",
        }
    }

    /// The authenticated nav bar, in display order.
    pub const AUTHENTICATED: [Section; 4] = [
        Section::Dashboard,
        Section::Accounts,
        Section::Transfer,
        Section::Profile,
    ];
}

/// A transfer source/destination account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    External,
}

impl AccountKind {
    /// Display label used on transaction entries and in the form.
    pub fn display_label(&self) -> &'static str {
        match self {
            AccountKind::Checking => "Premium Checking",
            AccountKind::Savings => "High-Yield Savings",
            AccountKind::External => "External Account",
        }
    }

    /// Resolve an account by its form value; unknown values yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "checking" => Some(AccountKind::Checking),
            "savings" => Some(AccountKind::Savings),
            "external" => Some(AccountKind::External),
            _ => None,
        }
    }

    /// Display label for a possibly-unrecognized destination.
    ///
    /// Unknown destinations fall back to the generic external label.
    pub fn label_or_generic(kind: Option<AccountKind>) -> &'static str {
        kind.map(|k| k.display_label())
            .unwrap_or(AccountKind::External.display_label())
    }

    /// All options a transfer form field cycles through, in display order.
    pub const ALL: [AccountKind; 3] = [
        AccountKind::Checking,
        AccountKind::Savings,
        AccountKind::External,
    ];
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_label())
    }
}

/// An account product offered by the opening wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Checking,
    Savings,
    Investment,
}

impl AccountType {
    /// Option label shown on the wizard's selection cards.
    pub fn display_label(&self) -> &'static str {
        match self {
            AccountType::Checking => "Premium Checking",
            AccountType::Savings => "High-Yield Savings",
            AccountType::Investment => "Investment Account",
        }
    }

    /// Wizard options in display order.
    pub const ALL: [AccountType; 3] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Investment,
    ];
}

/// Toast severity, controlling the colour treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Resolve a kind by name; unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }
}

/// A synthetic, display-only transaction record.
///
/// Never persisted -- these exist purely to populate the recent-activity
/// feed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    /// Feed line title, e.g. "Transfer to High-Yield Savings"
    pub title: String,
    /// Human-readable time label, e.g. "Today, 3:42 PM"
    pub time_label: String,
    /// Signed amount exactly as displayed, e.g. "-$250.50"
    pub amount_label: String,
    /// Whether the amount is a credit (rendered green) or debit
    pub is_credit: bool,
}

impl TransactionEntry {
    /// Build an arbitrary feed entry (used for the seeded demo activity).
    pub fn new(
        title: impl Into<String>,
        time_label: impl Into<String>,
        amount_label: impl Into<String>,
        is_credit: bool,
    ) -> Self {
        Self {
            title: title.into(),
            time_label: time_label.into(),
            amount_label: amount_label.into(),
            is_credit,
        }
    }

    /// Build a debit entry for a transfer happening now.
    ///
    /// The amount is rendered exactly as the user typed it, not
    /// reformatted.
    pub fn transfer(destination: Option<AccountKind>, amount: &str) -> Self {
        Self::transfer_at(destination, amount, Local::now())
    }

    /// Build a transfer entry with an explicit timestamp (used by tests).
    pub fn transfer_at(destination: Option<AccountKind>, amount: &str, at: DateTime<Local>) -> Self {
        Self {
            title: format!("Transfer to {}", AccountKind::label_or_generic(destination)),
            time_label: format!("Today, {}", at.format("%-I:%M %p")),
            amount_label: format!("-${amount}"),
            is_credit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_name() {
        assert_eq!(Section::from_name("dashboard"), Some(Section::Dashboard));
        assert_eq!(Section::from_name("homepage"), Some(Section::Home));
        assert_eq!(Section::from_name("transfer"), Some(Section::Transfer));
        // Unknown sections are a silent no-op at call sites
        assert_eq!(Section::from_name("vault"), None);
        assert_eq!(Section::from_name(""), None);
    }

    #[test]
    fn test_section_login_context() {
        assert!(!Section::Home.requires_login());
        assert!(Section::Dashboard.requires_login());
        assert!(Section::Profile.requires_login());
    }

    #[test]
    fn test_account_kind_labels() {
        assert_eq!(AccountKind::Checking.display_label(), "Premium Checking");
        assert_eq!(AccountKind::Savings.display_label(), "High-Yield Savings");
        assert_eq!(AccountKind::External.display_label(), "External Account");
    }

    #[test]
    fn test_account_kind_unknown_falls_back_to_generic() {
        assert_eq!(AccountKind::from_name("bitcoin"), None);
        assert_eq!(AccountKind::label_or_generic(None), "External Account");
        assert_eq!(
            AccountKind::label_or_generic(Some(AccountKind::Savings)),
            "High-Yield Savings"
        );
    }

    #[test]
    fn test_notification_kind_unknown_is_info() {
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_name("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_name("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name(""), NotificationKind::Info);
    }

    #[test]
    fn test_transaction_entry_title_and_labels() {
        let at = Local::now();
        let entry = TransactionEntry::transfer_at(Some(AccountKind::Savings), "250.50", at);
        assert_eq!(entry.title, "Transfer to High-Yield Savings");
        assert_eq!(entry.amount_label, "-$250.50");
        assert!(!entry.is_credit);
        assert!(entry.time_label.starts_with("Today, "));

        let entry = TransactionEntry::transfer_at(None, "10", at);
        assert_eq!(entry.title, "Transfer to External Account");
    }
}
