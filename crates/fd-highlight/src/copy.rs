//! Code presentation and the copy-to-clipboard action.
//!
//! The clipboard is an external collaborator reached through the
//! [`Clipboard`] trait. [`copy_code`] always resolves to a [`Notice`]; a
//! failing clipboard is reported to the user, never propagated.

use std::fmt;

use crate::markup::highlight;

/// Error reported by a clipboard implementation.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The clipboard could not be opened or accessed (no display, denied).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard was reachable but rejected the write.
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write access to a system clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Transient user-facing notice produced by the copy action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Source was copied.
    Copied,
    /// Source could not be copied.
    CopyFailed {
        /// Human-readable cause.
        reason: String,
    },
}

impl Notice {
    /// Whether the notice reports a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::CopyFailed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied => f.write_str("Copied!"),
            Self::CopyFailed { reason } => write!(f, "Copy failed: {reason}"),
        }
    }
}

/// A code sample prepared for display.
///
/// Holds the raw source alongside its language tag. The raw source is what
/// gets copied; [`html`](Self::html) is derived on demand and never stored
/// back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodePresentation {
    source: String,
    language: Option<String>,
}

impl CodePresentation {
    /// Create a presentation for `source` tagged with an optional language.
    #[must_use]
    pub fn new(source: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            source: source.into(),
            language: language.map(str::to_owned),
        }
    }

    /// Raw, unhighlighted source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Highlighted HTML for the source.
    #[must_use]
    pub fn html(&self) -> String {
        highlight(&self.source, self.language.as_deref())
    }
}

/// Copy the raw source of `presentation` to `clipboard`.
///
/// Returns exactly one notice. Failures are logged and turned into
/// [`Notice::CopyFailed`].
pub fn copy_code(presentation: &CodePresentation, clipboard: &mut dyn Clipboard) -> Notice {
    match clipboard.write_text(presentation.source()) {
        Ok(()) => {
            tracing::debug!(bytes = presentation.source().len(), "Copied code to clipboard");
            Notice::Copied
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to copy code to clipboard");
            Notice::CopyFailed {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.push(text.to_owned());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("permission denied".to_owned()))
        }
    }

    #[test]
    fn test_copy_writes_raw_source() {
        let presentation = CodePresentation::new("int x = 0xFF;", Some("c"));
        let mut clipboard = RecordingClipboard::default();

        let notice = copy_code(&presentation, &mut clipboard);

        assert_eq!(notice, Notice::Copied);
        assert_eq!(clipboard.writes, vec!["int x = 0xFF;".to_owned()]);
        assert!(!clipboard.writes[0].contains("<span"));
    }

    #[test]
    fn test_copy_failure_is_single_notice() {
        let presentation = CodePresentation::new("return 0;", Some("c"));
        let html_before = presentation.html();

        let notice = copy_code(&presentation, &mut DeniedClipboard);

        assert!(notice.is_failure());
        assert_eq!(
            notice,
            Notice::CopyFailed {
                reason: "Clipboard unavailable: permission denied".to_owned()
            }
        );
        assert_eq!(presentation.source(), "return 0;");
        assert_eq!(presentation.html(), html_before);
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::Copied.to_string(), "Copied!");
        assert_eq!(
            Notice::CopyFailed {
                reason: "busy".to_owned()
            }
            .to_string(),
            "Copy failed: busy"
        );
    }

    #[test]
    fn test_presentation_html_uses_language() {
        let presentation = CodePresentation::new("void f();", Some("cpp"));
        assert_eq!(presentation.language(), Some("cpp"));
        assert!(presentation.html().starts_with(r#"<span class="token type">void</span>"#));

        let plain = CodePresentation::new("a < b", None);
        assert_eq!(plain.html(), "a &lt; b");
    }
}
