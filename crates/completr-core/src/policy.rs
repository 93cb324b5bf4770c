// Per-call matching policy

use crate::enums::InsertionMode;
use crate::settings::Settings;

/// Options for a single matching call.
///
/// A policy is built fresh for each query and never mutated while a call
/// is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Compare the query and candidates after simple lowercasing.
    pub ignore_case: bool,
    /// Compare the query and candidates after stripping combining diacritics.
    pub ignore_diacritics: bool,
    /// How matched words are turned into suggestion text.
    pub insertion_mode: InsertionMode,
    /// Queries with fewer characters than this produce no suggestions.
    pub min_trigger_length: usize,
}

impl Policy {
    /// Create a policy for the given insertion mode.
    ///
    /// Case is ignored for every mode except [`InsertionMode::ReplaceExact`].
    /// Diacritics are respected and every non-empty query triggers.
    pub fn new(insertion_mode: InsertionMode) -> Self {
        Self {
            ignore_case: insertion_mode.ignores_case(),
            ignore_diacritics: false,
            insertion_mode,
            min_trigger_length: 0,
        }
    }

    /// Derive the policy the host settings describe.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ignore_diacritics: settings.ignore_diacritics_when_filtering,
            min_trigger_length: settings.min_word_trigger_length,
            ..Self::new(settings.word_insertion_mode)
        }
    }

    /// Return a copy with diacritic-insensitive matching switched on or off.
    pub fn with_ignore_diacritics(mut self, ignore_diacritics: bool) -> Self {
        self.ignore_diacritics = ignore_diacritics;
        self
    }

    /// Return a copy with a different minimum trigger length.
    pub fn with_min_trigger_length(mut self, min_trigger_length: usize) -> Self {
        self.min_trigger_length = min_trigger_length;
        self
    }

    /// Whether a query is long enough to be evaluated at all.
    ///
    /// Empty queries never trigger, whatever the minimum length.
    pub fn triggers(&self, query: &str) -> bool {
        !query.is_empty() && query.chars().count() >= self.min_trigger_length
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_case_from_mode() {
        assert!(!Policy::new(InsertionMode::ReplaceExact).ignore_case);
        assert!(Policy::new(InsertionMode::ReplaceIgnoreCase).ignore_case);
        assert!(Policy::new(InsertionMode::AppendIgnoreCase).ignore_case);
    }

    #[test]
    fn from_settings_copies_fields() {
        let settings = Settings {
            min_word_trigger_length: 4,
            ignore_diacritics_when_filtering: true,
            word_insertion_mode: InsertionMode::ReplaceExact,
            ..Settings::default()
        };
        let policy = Policy::from_settings(&settings);
        assert!(!policy.ignore_case);
        assert!(policy.ignore_diacritics);
        assert_eq!(policy.min_trigger_length, 4);
        assert_eq!(policy.insertion_mode, InsertionMode::ReplaceExact);
    }

    #[test]
    fn default_policy_matches_default_settings() {
        let policy = Policy::default();
        assert!(policy.ignore_case);
        assert!(!policy.ignore_diacritics);
        assert_eq!(policy.min_trigger_length, 3);
    }

    #[test]
    fn triggers_counts_chars() {
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase).with_min_trigger_length(3);
        assert!(!policy.triggers("ab"));
        assert!(policy.triggers("abc"));
        // Three characters, six bytes.
        assert!(policy.triggers("\u{00E4}\u{00F6}\u{00FC}"));
    }

    #[test]
    fn empty_query_never_triggers() {
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase).with_min_trigger_length(0);
        assert!(!policy.triggers(""));
        assert!(policy.triggers("a"));
    }
}
