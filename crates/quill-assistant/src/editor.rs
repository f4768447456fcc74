//! Editor collaborator seam.
//!
//! The pipeline only ever reads the current or selected text and writes an
//! accepted suggestion back verbatim; it performs no diffing or merging.

use quill_core::Suggestion;

/// Surface the assistant reads from and writes to.
pub trait EditorSurface {
    /// Returns the full buffer contents.
    fn get_value(&self) -> String;

    /// Replaces the buffer contents.
    fn set_value(&mut self, text: &str);

    /// Switches the buffer's language tag (for highlighting).
    fn update_language(&mut self, language: &str);
}

/// In-memory editor buffer backing the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    /// Buffer contents.
    content: String,
    /// Current language tag.
    language: String,
}

impl Buffer {
    /// Creates an empty plaintext buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: String::new(),
            language: "plaintext".to_owned(),
        }
    }

    /// Creates a buffer with initial contents and language.
    pub fn with_content<T: Into<String>, L: Into<String>>(content: T, language: L) -> Self {
        Self {
            content: content.into(),
            language: language.into(),
        }
    }

    /// Returns the current language tag.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl EditorSurface for Buffer {
    fn get_value(&self) -> String {
        self.content.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.content = text.to_owned();
    }

    fn update_language(&mut self, language: &str) {
        self.language = language.to_owned();
    }
}

/// Writes an accepted suggestion into the editor verbatim.
pub fn apply_suggestion(editor: &mut dyn EditorSurface, suggestion: &Suggestion) {
    editor.set_value(&suggestion.content);
}
