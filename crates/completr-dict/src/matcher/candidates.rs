// Candidate selection: which buckets of the index a query has to scan

use completr_core::character::simple_upper;
use completr_core::normalize::normalize;
use completr_core::policy::Policy;

use crate::index::WordIndex;

/// The buckets selected for one query.
///
/// Buckets are borrowed from the index and scanned one after another; they
/// are never copied into a single collection.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'a> {
    keys: Vec<char>,
    buckets: Vec<&'a [String]>,
}

impl<'a> CandidateSet<'a> {
    /// Select the buckets to scan for a normalized query starting with `first`.
    ///
    /// 1. The bucket keyed by `first` itself.
    /// 2. When ignoring case, the bucket keyed by the uppercase form of `first`.
    /// 3. When ignoring diacritics, every bucket whose key normalizes to
    ///    `first` (for example `'É'` and `'é'` for `'e'`). This walks every
    ///    key of the index on each call.
    ///
    /// Steps are independent: a bucket chosen by more than one step is
    /// scanned once per step, so its matches repeat in the output. Keys found
    /// in step 3 are added in code point order so results do not depend on
    /// the index's hash order.
    pub fn select(index: &'a WordIndex, first: char, policy: &Policy) -> Self {
        let mut set = Self::default();
        set.push(index, first);

        if policy.ignore_case {
            set.push(index, simple_upper(first));
        }

        if policy.ignore_diacritics {
            let mut target_buf = [0u8; 4];
            let target: &str = first.encode_utf8(&mut target_buf);
            let mut buf = [0u8; 4];
            let mut extra: Vec<char> = index
                .keys()
                .filter(|&key| normalize(key.encode_utf8(&mut buf), policy) == target)
                .collect();
            extra.sort_unstable();
            for key in extra {
                set.push(index, key);
            }
        }

        set
    }

    fn push(&mut self, index: &'a WordIndex, key: char) {
        if !index.contains_key(key) {
            return;
        }
        self.keys.push(key);
        self.buckets.push(index.bucket(key));
    }

    /// Keys of the selected buckets, in scan order.
    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    /// The selected buckets, in scan order.
    pub fn buckets(&self) -> &[&'a [String]] {
        &self.buckets
    }

    /// Total number of candidate words.
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
