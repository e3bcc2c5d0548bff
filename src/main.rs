//! WowBank - A terminal demo of a personal banking interface
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// WowBank - A terminal demo of a personal banking interface
#[derive(Parser, Debug)]
#[command(name = "wowbank")]
#[command(about = "A terminal demo of the WowBank personal banking interface", long_about = None)]
struct Args {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Logs go to a file; the TUI owns the terminal
    wowbank_core::logging::init()?;

    let settings = match &args.config {
        Some(path) => wowbank_app::config::load_settings_from(path),
        None => wowbank_app::config::load_settings(),
    };

    wowbank_tui::run(settings).await?;

    Ok(())
}
