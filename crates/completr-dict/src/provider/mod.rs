// Dictionary providers: sources of words that the host composes
//
// A provider exposes a word index and decides whether it currently takes
// part in completion. Providers are independent types; the host owns them
// and chooses which to query.

pub mod word_list;

pub use word_list::WordListProvider;

use completr_core::policy::Policy;
use completr_core::suggestion::Suggestion;

use crate::index::WordIndex;
use crate::matcher;

/// Capability contract for a source of dictionary words.
pub trait DictionaryProvider {
    /// The words this provider offers.
    fn word_index(&self) -> &WordIndex;

    /// Whether the provider takes part in completion under `policy`.
    fn is_active(&self, policy: &Policy) -> bool;

    /// Suggestions for `query`, or an empty list when the provider is
    /// inactive or the query does not trigger.
    fn suggestions(&self, query: &str, policy: &Policy) -> Vec<Suggestion> {
        if !self.is_active(policy) {
            return Vec::new();
        }
        matcher::suggest(self.word_index(), query, policy)
    }
}

/// A bare index is a provider that is active whenever it holds words.
impl DictionaryProvider for WordIndex {
    fn word_index(&self) -> &WordIndex {
        self
    }

    fn is_active(&self, _policy: &Policy) -> bool {
        !self.is_empty()
    }
}

/// Collect suggestions from every provider in order.
///
/// Each provider's list is ranked on its own and the lists are concatenated
/// in the order given. With a `limit`, the combined list is truncated.
pub fn suggest_all(
    providers: &[&dyn DictionaryProvider],
    query: &str,
    policy: &Policy,
    limit: Option<usize>,
) -> Vec<Suggestion> {
    let mut all = Vec::new();
    for provider in providers {
        all.extend(provider.suggestions(query, policy));
        if limit.is_some_and(|max| all.len() >= max) {
            break;
        }
    }
    if let Some(max) = limit {
        all.truncate(max);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use completr_core::enums::InsertionMode;

    struct Disabled(WordIndex);

    impl DictionaryProvider for Disabled {
        fn word_index(&self) -> &WordIndex {
            &self.0
        }

        fn is_active(&self, _policy: &Policy) -> bool {
            false
        }
    }

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.display_text.as_str()).collect()
    }

    #[test]
    fn inactive_provider_returns_nothing() {
        let provider = Disabled(WordIndex::from_words(["apple"]));
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase);
        assert!(provider.suggestions("app", &policy).is_empty());
    }

    #[test]
    fn empty_index_is_inactive() {
        let index = WordIndex::new();
        assert!(!index.is_active(&Policy::default()));
    }

    #[test]
    fn suggest_all_concatenates_in_order() {
        let first = WordIndex::from_words(["application"]);
        let second = WordIndex::from_words(["apple"]);
        let disabled = Disabled(WordIndex::from_words(["apply"]));
        let providers: [&dyn DictionaryProvider; 3] = [&first, &disabled, &second];
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase);
        let result = suggest_all(&providers, "ap", &policy, None);
        assert_eq!(texts(&result), ["application", "apple"]);
    }

    #[test]
    fn suggest_all_truncates_to_limit() {
        let first = WordIndex::from_words(["apple", "apply", "apricot"]);
        let second = WordIndex::from_words(["ape"]);
        let providers: [&dyn DictionaryProvider; 2] = [&first, &second];
        let policy = Policy::new(InsertionMode::ReplaceIgnoreCase);
        let result = suggest_all(&providers, "ap", &policy, Some(2));
        assert_eq!(texts(&result), ["apple", "apply"]);
    }
}
