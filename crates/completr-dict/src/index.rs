// Word index: dictionary words bucketed by their literal first character

use hashbrown::HashMap;

/// Dictionary words grouped by their first character.
///
/// The key is the exact first `char` of each word. No case folding or
/// normalization happens at insertion time, so `"Apple"` and `"apple"` land
/// in different buckets.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: HashMap<char, Vec<String>>,
    word_count: usize,
}

impl WordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a sequence of words, in one pass.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        index.extend(words);
        index
    }

    /// Store a word under its first character.
    ///
    /// Returns `false` (and stores nothing) for the empty string.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        let Some(first) = word.chars().next() else {
            return false;
        };
        self.buckets.entry(first).or_default().push(word);
        self.word_count += 1;
        true
    }

    /// The words stored under exactly `first`, or an empty slice.
    pub fn bucket(&self, first: char) -> &[String] {
        self.buckets.get(&first).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any word starts with exactly `first`.
    pub fn contains_key(&self, first: char) -> bool {
        self.buckets.contains_key(&first)
    }

    /// Iterate over all bucket keys. Order is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct first characters.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Sort every bucket and drop exact duplicates.
    pub fn sort_buckets(&mut self) {
        let mut count = 0;
        for words in self.buckets.values_mut() {
            words.sort_unstable();
            words.dedup();
            count += words.len();
        }
        self.word_count = count;
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.word_count = 0;
    }
}

impl<S: Into<String>> Extend<S> for WordIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordIndex {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}
