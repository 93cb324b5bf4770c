// Insertion modes and their persisted labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompletrError;

/// How an accepted suggestion is written back into the document.
///
/// The serialized form is the human-readable label stored in the host's
/// settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InsertionMode {
    /// Match case-sensitively and replace the typed text with the word.
    #[serde(rename = "Match-Case & Replace")]
    ReplaceExact,
    /// Match case-insensitively and replace the typed text with the word.
    #[default]
    #[serde(rename = "Ignore-Case & Replace")]
    ReplaceIgnoreCase,
    /// Match case-insensitively, keep the typed text and append the rest of
    /// the word.
    #[serde(rename = "Ignore-Case & Append")]
    AppendIgnoreCase,
}

impl InsertionMode {
    /// All modes, in the order a settings UI lists them.
    pub const ALL: [InsertionMode; 3] = [
        InsertionMode::ReplaceExact,
        InsertionMode::ReplaceIgnoreCase,
        InsertionMode::AppendIgnoreCase,
    ];

    /// The persisted label of this mode.
    pub fn label(self) -> &'static str {
        match self {
            InsertionMode::ReplaceExact => "Match-Case & Replace",
            InsertionMode::ReplaceIgnoreCase => "Ignore-Case & Replace",
            InsertionMode::AppendIgnoreCase => "Ignore-Case & Append",
        }
    }

    /// Whether matching under this mode ignores letter case.
    pub fn ignores_case(self) -> bool {
        self != InsertionMode::ReplaceExact
    }

    /// Whether suggestions keep the typed prefix and append the remainder.
    pub fn appends(self) -> bool {
        self == InsertionMode::AppendIgnoreCase
    }
}

impl fmt::Display for InsertionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InsertionMode {
    type Err = CompletrError;

    /// Parse either the persisted label or a short name
    /// (`exact`, `ignore-case`, `append`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(mode) = Self::ALL.into_iter().find(|m| m.label() == trimmed) {
            return Ok(mode);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "exact" | "match-case" | "replace-exact" => Ok(InsertionMode::ReplaceExact),
            "ignore-case" | "replace" | "replace-ignore-case" => {
                Ok(InsertionMode::ReplaceIgnoreCase)
            }
            "append" | "append-ignore-case" => Ok(InsertionMode::AppendIgnoreCase),
            _ => Err(CompletrError::UnknownInsertionMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_mode_respects_case() {
        assert!(!InsertionMode::ReplaceExact.ignores_case());
        assert!(InsertionMode::ReplaceIgnoreCase.ignores_case());
        assert!(InsertionMode::AppendIgnoreCase.ignores_case());
    }

    #[test]
    fn only_append_mode_appends() {
        assert!(InsertionMode::AppendIgnoreCase.appends());
        assert!(!InsertionMode::ReplaceIgnoreCase.appends());
        assert!(!InsertionMode::ReplaceExact.appends());
    }

    #[test]
    fn parse_labels() {
        for mode in InsertionMode::ALL {
            assert_eq!(mode.label().parse::<InsertionMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_short_names() {
        assert_eq!("exact".parse::<InsertionMode>().unwrap(), InsertionMode::ReplaceExact);
        assert_eq!("Append".parse::<InsertionMode>().unwrap(), InsertionMode::AppendIgnoreCase);
        assert_eq!(
            "ignore-case".parse::<InsertionMode>().unwrap(),
            InsertionMode::ReplaceIgnoreCase
        );
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = "sideways".parse::<InsertionMode>().unwrap_err();
        assert!(matches!(err, CompletrError::UnknownInsertionMode(ref s) if s == "sideways"));
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&InsertionMode::AppendIgnoreCase).unwrap();
        assert_eq!(json, "\"Ignore-Case & Append\"");
        let back: InsertionMode = serde_json::from_str("\"Match-Case & Replace\"").unwrap();
        assert_eq!(back, InsertionMode::ReplaceExact);
    }

    #[test]
    fn default_is_ignore_case_replace() {
        assert_eq!(InsertionMode::default(), InsertionMode::ReplaceIgnoreCase);
    }
}
