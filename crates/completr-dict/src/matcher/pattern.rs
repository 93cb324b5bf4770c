// Subsequence-with-filler matcher compiled from a normalized query
//
// A word matches when it contains the query characters in order, and every
// character between two consecutive matched query characters belongs to the
// filler class (see `completr_core::character::is_filler`). The match may
// start and end anywhere in the word.
//
// The query is compiled into a shift-and automaton: bit `i` of the state
// word means "the first i+1 query characters have been matched and only
// filler has been read since". Query characters are always literal, so
// metacharacters such as `+`, `.` or `(` need no escaping.

use completr_core::character::is_filler;

/// Number of query characters handled by the single-word fast path.
const FAST_PATH_LEN: usize = u128::BITS as usize;

/// A compiled containment matcher for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsequencePattern {
    query: Vec<char>,
}

impl SubsequencePattern {
    /// Compile a normalized query.
    pub fn compile(query: &str) -> Self {
        Self {
            query: query.chars().collect(),
        }
    }

    /// Number of query characters.
    pub fn len(&self) -> usize {
        self.query.len()
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Test whether the pattern occurs anywhere in `word`.
    ///
    /// The empty pattern matches every word.
    pub fn is_match(&self, word: &str) -> bool {
        match self.query.len() {
            0 => true,
            n if n <= FAST_PATH_LEN => self.is_match_bits(word),
            _ => self.is_match_states(word),
        }
    }

    /// Bit mask of query positions holding `c`.
    #[inline]
    fn positions_of(&self, c: char) -> u128 {
        self.query
            .iter()
            .enumerate()
            .filter(|&(_, &q)| q == c)
            .fold(0u128, |mask, (i, _)| mask | (1u128 << i))
    }

    fn is_match_bits(&self, word: &str) -> bool {
        let accept = 1u128 << (self.query.len() - 1);
        let mut state = 0u128;
        for c in word.chars() {
            let advanced = ((state << 1) | 1) & self.positions_of(c);
            let stayed = if state != 0 && is_filler(c) { state } else { 0 };
            state = advanced | stayed;
            if state & accept != 0 {
                return true;
            }
        }
        false
    }

    /// General path for queries longer than the fast-path state word.
    fn is_match_states(&self, word: &str) -> bool {
        let n = self.query.len();
        let mut state = vec![false; n];
        let mut next = vec![false; n];
        for c in word.chars() {
            let filler = is_filler(c);
            for i in 0..n {
                let reachable = if i == 0 { true } else { state[i - 1] };
                next[i] = (reachable && self.query[i] == c) || (filler && state[i]);
            }
            if next[n - 1] {
                return true;
            }
            std::mem::swap(&mut state, &mut next);
        }
        false
    }
}
