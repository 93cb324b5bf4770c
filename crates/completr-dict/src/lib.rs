//! Word index and fuzzy subsequence matching for Completr.
//!
//! # Architecture
//!
//! - [`index`] -- words bucketed by their literal first character
//! - [`matcher`] -- candidate selection, subsequence automaton, suggestion
//!   mapping and ranking
//! - [`provider`] -- the dictionary provider contract and the word-list
//!   provider
//!
//! # Example
//!
//! ```
//! use completr_core::{InsertionMode, Policy};
//! use completr_dict::index::WordIndex;
//! use completr_dict::matcher::suggest;
//!
//! let index = WordIndex::from_words(["application", "apple"]);
//! let policy = Policy::new(InsertionMode::ReplaceIgnoreCase);
//! let suggestions = suggest(&index, "ap", &policy);
//! assert_eq!(suggestions[0].display_text, "apple");
//! ```

pub mod index;
pub mod matcher;
pub mod provider;

pub use index::WordIndex;
pub use matcher::suggest;
pub use provider::{DictionaryProvider, WordListProvider, suggest_all};
