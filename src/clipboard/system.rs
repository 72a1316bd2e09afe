//! System clipboard backed by arboard

use super::traits::{ClipboardError, ClipboardProvider};
use arboard::Clipboard;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Clipboard handle shared with blocking writer tasks.
///
/// The arboard handle is opened on first use and kept for the lifetime of
/// the process; on X11 the contents are only served while it is alive.
#[derive(Default, Clone)]
pub struct SystemClipboard {
    inner: Arc<Mutex<Option<Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_blocking(&self, text: &str) -> Result<(), ClipboardError> {
        // Poisoning leaves the handle usable
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if guard.is_none() {
            *guard = Some(Clipboard::new()?);
        }
        if let Some(clipboard) = guard.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ClipboardProvider for SystemClipboard {
    async fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.write_blocking(&text)).await?
    }
}
