// Host settings that influence matching and word-list loading

use serde::{Deserialize, Serialize};

use crate::enums::InsertionMode;
use crate::error::CompletrError;

/// Settings persisted by the host.
///
/// Field names follow the host's camelCase JSON layout. Every field has a
/// default, so partial documents load and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Words shorter than this are not added to word lists.
    pub min_word_length: usize,
    /// Queries shorter than this produce no suggestions.
    pub min_word_trigger_length: usize,
    /// Matching and insertion behavior.
    pub word_insertion_mode: InsertionMode,
    /// Match words regardless of combining diacritics.
    pub ignore_diacritics_when_filtering: bool,
    /// Whether the word-list provider contributes suggestions.
    pub word_list_provider_enabled: bool,
    /// Maximum number of suggestions returned to the host; 0 means unlimited.
    pub max_suggestions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_word_length: 2,
            min_word_trigger_length: 3,
            word_insertion_mode: InsertionMode::ReplaceIgnoreCase,
            ignore_diacritics_when_filtering: false,
            word_list_provider_enabled: true,
            max_suggestions: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CompletrError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CompletrError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The suggestion limit as an option, `None` meaning unlimited.
    pub fn suggestion_limit(&self) -> Option<usize> {
        (self.max_suggestions > 0).then_some(self.max_suggestions)
    }
}
