// Suggestion value returned to the host

use serde::{Deserialize, Serialize};

/// A completion candidate.
///
/// `display_text` is what the host shows, `insertion_text` is what it writes
/// into the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub display_text: String,
    pub insertion_text: String,
}

impl Suggestion {
    /// Create a suggestion that displays and inserts the same text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display_text: text.clone(),
            insertion_text: text,
        }
    }

    /// Length of the display text in characters, used for ranking.
    pub fn display_len(&self) -> usize {
        self.display_text.chars().count()
    }
}
