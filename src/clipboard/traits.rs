//! Trait abstraction for the clipboard to enable mocking in tests

use async_trait::async_trait;

/// Errors surfaced to the user when a copy fails
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),

    #[error("clipboard task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Trait for clipboard writes, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardProvider: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn set_text(&self, text: String) -> Result<(), ClipboardError>;
}
