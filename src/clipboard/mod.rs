//! Clipboard adapter for copy actions

mod system;
mod traits;

pub use system::SystemClipboard;
pub use traits::{ClipboardError, ClipboardProvider};

#[cfg(test)]
pub use traits::MockClipboardProvider;
