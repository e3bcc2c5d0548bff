//! Terminal restoration on panic

/// Install a panic hook that puts the terminal back into cooked mode
/// before the report prints, so the message stays readable.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        tracing::error!("panic: {panic_info}");
        original_hook(panic_info);
    }));
}
