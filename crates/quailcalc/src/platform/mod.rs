//! Platform services the terminal UI depends on.
//!
//! - [`Clipboard`]: where the snapshot copy goes
//!
//! The system clipboard is only available with the `clipboard` feature;
//! without it [`NoClipboard`] makes every copy fall back to a file.

mod clipboard;

pub use clipboard::{Clipboard, ClipboardError, NoClipboard, default_clipboard};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
