use std::fmt;

/// Clipboard failures are reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard backend in this build or session
    Unavailable(String),
    /// The backend refused the write
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {}", msg),
            ClipboardError::Write(msg) => write!(f, "clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Used when the build has no clipboard support.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "built without the clipboard feature".to_string(),
        ))
    }
}

/// System clipboard via arboard.
///
/// The handle is opened on first use and kept for the life of the app, since
/// on X11 the copied text is only served while the handle is alive.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable("no clipboard handle".to_string())),
        }
    }
}

/// The best clipboard this build supports.
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard::default())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(NoClipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_clipboard_is_unavailable() {
        let err = NoClipboard.set_text("{}").unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
        assert!(err.to_string().starts_with("clipboard unavailable"));
    }
}
