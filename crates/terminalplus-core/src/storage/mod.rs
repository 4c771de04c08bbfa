mod config;

pub use config::{Config, DisplayConfig};

use std::path::PathBuf;

/// Returns `~/.config/terminalplus[-dev]/` based on TERMINALPLUS_ENV.
///
/// Set TERMINALPLUS_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TERMINALPLUS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("terminalplus-dev")
    } else {
        base_dir.join("terminalplus")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
