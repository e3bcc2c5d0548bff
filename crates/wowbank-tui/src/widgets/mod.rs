//! Custom widget components

mod accounts;
mod confirm_dialog;
mod dashboard;
mod header;
mod home;
mod login_modal;
pub mod modal_overlay;
mod profile;
mod toast;
mod transfer_form;
mod wizard_modal;

pub use accounts::AccountsView;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard::DashboardView;
pub use header::Header;
pub use home::HomeView;
pub use login_modal::LoginModal;
pub use profile::ProfileView;
pub use toast::ToastView;
pub use transfer_form::TransferFormView;
pub use wizard_modal::WizardModal;
