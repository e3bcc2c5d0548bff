//! Color palette for the WowBank theme.
//!
//! Named terminal colors only, so the demo looks right on any profile.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Brand accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const ACCENT_DIM: Color = Color::DarkGray; // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Text over accent fills

// --- Notification kinds ---
pub const NOTIFY_SUCCESS: Color = Color::Green;
pub const NOTIFY_ERROR: Color = Color::Red;
pub const NOTIFY_INFO: Color = Color::Blue;

// --- Money ---
pub const AMOUNT_CREDIT: Color = Color::Green; // Incoming amounts
pub const AMOUNT_DEBIT: Color = Color::Red; // Outgoing amounts
