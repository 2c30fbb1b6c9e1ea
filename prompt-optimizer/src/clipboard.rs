use anyhow::{Context, Result};
use tracing::debug;

/// Put `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard is not available")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to copy to clipboard")?;
    debug!(chars = text.len(), "copied prompt to clipboard");
    Ok(())
}
