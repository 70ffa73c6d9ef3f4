//! System clipboard access.

/// Copy `text` to the system clipboard verbatim.
///
/// Fails on headless systems with no clipboard; callers should suggest
/// `--out` as the fallback.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| anyhow::anyhow!("Clipboard unavailable: {}", e))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {}", e))?;
    Ok(())
}
