// Word-list provider: static lists of words supplied by the host

use std::path::Path;
use std::sync::Arc;

use completr_core::error::CompletrError;
use completr_core::policy::Policy;
use completr_core::settings::Settings;

use crate::index::WordIndex;

use super::DictionaryProvider;

/// Split a word list into words.
///
/// One word per line; surrounding whitespace is trimmed, and empty lines and
/// words shorter than `min_word_length` characters are dropped.
pub fn parse_word_list(text: &str, min_word_length: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty() && word.chars().count() >= min_word_length)
        .map(str::to_string)
        .collect()
}

/// Provider backed by one or more static word lists.
///
/// The index is rebuilt from all loaded lists whenever a list is added or
/// the relevant settings change. A rebuild creates a fresh index and swaps
/// it in, so snapshots taken earlier keep seeing the old words.
#[derive(Debug, Clone)]
pub struct WordListProvider {
    lists: Vec<Vec<String>>,
    index: Arc<WordIndex>,
    enabled: bool,
    min_word_length: usize,
}

impl WordListProvider {
    /// Create an empty provider configured from host settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            lists: Vec::new(),
            index: Arc::new(WordIndex::new()),
            enabled: settings.word_list_provider_enabled,
            min_word_length: settings.min_word_length,
        }
    }

    /// Apply new settings, rebuilding the index if the minimum word length
    /// changed.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.enabled = settings.word_list_provider_enabled;
        if settings.min_word_length != self.min_word_length {
            self.min_word_length = settings.min_word_length;
            self.rebuild();
        }
    }

    /// Add a word list given as text. Returns the number of words accepted
    /// from this list.
    ///
    /// Short words are kept in the list and only filtered out of the index,
    /// so lowering the minimum length later brings them back.
    pub fn add_list(&mut self, text: &str) -> usize {
        let words = parse_word_list(text, 0);
        let min = self.min_word_length;
        let accepted = words.iter().filter(|w| w.chars().count() >= min).count();
        self.lists.push(words);
        self.rebuild();
        accepted
    }

    /// Read a word list from a UTF-8 file and add it.
    pub fn add_list_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CompletrError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CompletrError::io(path, e))?;
        let accepted = self.add_list(&text);
        tracing::debug!(path = %path.display(), words = accepted, "loaded word list");
        Ok(accepted)
    }

    /// Drop every loaded list.
    pub fn clear(&mut self) {
        self.lists.clear();
        self.index = Arc::new(WordIndex::new());
    }

    /// Number of lists loaded so far.
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of distinct words in the current index.
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    /// The current index, shareable with other threads.
    pub fn snapshot(&self) -> Arc<WordIndex> {
        Arc::clone(&self.index)
    }

    fn rebuild(&mut self) {
        let min = self.min_word_length;
        let mut index: WordIndex = self
            .lists
            .iter()
            .flatten()
            .filter(|word| word.chars().count() >= min)
            .cloned()
            .collect();
        index.sort_buckets();
        tracing::debug!(
            lists = self.lists.len(),
            words = index.len(),
            buckets = index.bucket_count(),
            "rebuilt word list index"
        );
        self.index = Arc::new(index);
    }
}

impl DictionaryProvider for WordListProvider {
    fn word_index(&self) -> &WordIndex {
        &self.index
    }

    fn is_active(&self, _policy: &Policy) -> bool {
        self.enabled && !self.index.is_empty()
    }
}
