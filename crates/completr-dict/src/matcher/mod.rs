// Fuzzy dictionary matching
//
// A query flows through four stages:
//   - `candidates`: pick the index buckets worth scanning
//   - `pattern`: compile the normalized query into a subsequence automaton
//   - `mapper`: test each candidate and build suggestion text
//   - `ranker`: order the suggestions, shortest first

pub mod candidates;
pub mod mapper;
pub mod pattern;
pub mod ranker;

pub use candidates::CandidateSet;
pub use mapper::MatchMapper;
pub use pattern::SubsequencePattern;
pub use ranker::rank;

use completr_core::normalize::normalize;
use completr_core::policy::Policy;
use completr_core::suggestion::Suggestion;

use crate::index::WordIndex;

/// Compute the ordered suggestions for `query` against `index`.
///
/// Returns an empty list when the query is empty or shorter than the
/// policy's trigger length, or when nothing matches. The index is only
/// borrowed for the duration of the call.
pub fn suggest(index: &WordIndex, query: &str, policy: &Policy) -> Vec<Suggestion> {
    if !policy.triggers(query) {
        return Vec::new();
    }

    let normalized = normalize(query, policy);
    let Some(first) = normalized.chars().next() else {
        // The query consisted only of stripped combining marks.
        return Vec::new();
    };

    let candidates = CandidateSet::select(index, first, policy);
    if candidates.is_empty() {
        tracing::trace!(query, "no candidate buckets");
        return Vec::new();
    }

    let pattern = SubsequencePattern::compile(&normalized);
    let mapper = MatchMapper::new(&pattern, query, policy);
    let mut suggestions = Vec::new();
    for bucket in candidates.buckets() {
        mapper.collect_into(bucket.iter().map(String::as_str), &mut suggestions);
    }
    rank(&mut suggestions);

    tracing::trace!(
        query,
        buckets = candidates.keys().len(),
        candidates = candidates.word_count(),
        matches = suggestions.len(),
        "suggest"
    );
    suggestions
}
