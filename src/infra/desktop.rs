use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::infra::contracts::{ClipboardAdapter, ExternalOpener};

/// Clipboard access is created lazily: `arboard` opens a display connection,
/// which should not happen (or fail) before the user first copies something.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl ClipboardAdapter for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().context("clipboard unavailable")?);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .context("clipboard write failed"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        open::that(target).with_context(|| format!("failed to open {target}"))
    }
}
