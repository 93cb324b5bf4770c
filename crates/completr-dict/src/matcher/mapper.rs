// Match mapping: turn matching candidate words into suggestions

use completr_core::normalize::normalize;
use completr_core::policy::Policy;
use completr_core::suggestion::Suggestion;

use super::pattern::SubsequencePattern;

/// Applies a compiled pattern to candidate words and builds suggestion text
/// according to the policy's insertion mode.
pub struct MatchMapper<'q> {
    pattern: &'q SubsequencePattern,
    raw_query: &'q str,
    policy: &'q Policy,
}

impl<'q> MatchMapper<'q> {
    /// Create a mapper for one query.
    ///
    /// `raw_query` is the text exactly as the user typed it. The pattern must
    /// have been compiled from the same query after normalization.
    pub fn new(pattern: &'q SubsequencePattern, raw_query: &'q str, policy: &'q Policy) -> Self {
        Self {
            pattern,
            raw_query,
            policy,
        }
    }

    /// Map one candidate word, or `None` when it does not match.
    pub fn map(&self, word: &str) -> Option<Suggestion> {
        let normalized = normalize(word, self.policy);
        if !self.pattern.is_match(&normalized) {
            return None;
        }
        if self.policy.insertion_mode.appends() {
            Some(Suggestion::from_text(self.append_text(word)))
        } else {
            Some(Suggestion::from_text(word))
        }
    }

    /// The typed query followed by the part of `word` beyond the normalized
    /// query's length. Words shorter than the query contribute nothing.
    fn append_text(&self, word: &str) -> String {
        let remainder = match word.char_indices().nth(self.pattern.len()) {
            Some((offset, _)) => &word[offset..],
            None => "",
        };
        let mut text = String::with_capacity(self.raw_query.len() + remainder.len());
        text.push_str(self.raw_query);
        text.push_str(remainder);
        text
    }

    /// Map every word and push the matches onto `out`, preserving order.
    pub fn collect_into<'w>(&self, words: impl IntoIterator<Item = &'w str>, out: &mut Vec<Suggestion>) {
        out.extend(words.into_iter().filter_map(|word| self.map(word)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use completr_core::enums::InsertionMode;

    fn map(query: &str, word: &str, policy: &Policy) -> Option<Suggestion> {
        let normalized = normalize(query, policy);
        let pattern = SubsequencePattern::compile(&normalized);
        MatchMapper::new(&pattern, query, policy).map(word)
    }

    #[test]
    fn replace_modes_return_original_word() {
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase);
        let s = map("HEL", "Hello", &policy).unwrap();
        assert_eq!(s, Suggestion::from_text("Hello"));

        let policy = Policy::new(InsertionMode::ReplaceExact);
        let s = map("Hel", "Hello", &policy).unwrap();
        assert_eq!(s.insertion_text, "Hello");
    }

    #[test]
    fn exact_mode_rejects_case_mismatch() {
        let policy = Policy::new(InsertionMode::ReplaceExact);
        assert!(map("Wor", "word", &policy).is_none());
    }

    #[test]
    fn append_mode_keeps_typed_prefix() {
        let policy = Policy::new(InsertionMode::AppendIgnoreCase);
        let s = map("Hel", "hello", &policy).unwrap();
        assert_eq!(s.insertion_text, "Hello");
        assert_eq!(s.display_text, "Hello");
    }

    #[test]
    fn append_mode_takes_remainder_casing_from_word() {
        let policy = Policy::new(InsertionMode::AppendIgnoreCase);
        let s = map("mac", "MacBook", &policy).unwrap();
        assert_eq!(s.insertion_text, "macBook");
    }

    #[test]
    fn append_mode_counts_characters_not_bytes() {
        let policy = Policy::new(InsertionMode::AppendIgnoreCase);
        let s = map("\u{00DC}be", "\u{00FC}bel", &policy).unwrap();
        assert_eq!(s.insertion_text, "\u{00DC}bel");
    }

    #[test]
    fn append_mode_clamps_when_word_is_short() {
        let policy = Policy::new(InsertionMode::AppendIgnoreCase);
        // The word has no text past the query length.
        let s = map("xab", "xab", &policy).unwrap();
        assert_eq!(s.insertion_text, "xab");
        let mapper_pattern = SubsequencePattern::compile("abcdef");
        let mapper = MatchMapper::new(&mapper_pattern, "abcdef", &policy);
        assert_eq!(mapper.append_text("abc"), "abcdef");
    }

    #[test]
    fn diacritics_are_stripped_from_candidates() {
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase).with_ignore_diacritics(true);
        let s = map("cafe", "Caf\u{00E9}", &policy).unwrap();
        assert_eq!(s.insertion_text, "Caf\u{00E9}");

        let policy = policy.with_ignore_diacritics(false);
        assert!(map("cafe", "Caf\u{00E9}", &policy).is_none());
    }

    #[test]
    fn collect_into_preserves_order() {
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase);
        let pattern = SubsequencePattern::compile("ap");
        let mapper = MatchMapper::new(&pattern, "ap", &policy);
        let mut out = Vec::new();
        mapper.collect_into(["application", "banana", "apple"], &mut out);
        let words: Vec<_> = out.iter().map(|s| s.display_text.as_str()).collect();
        assert_eq!(words, ["application", "apple"]);
    }
}
