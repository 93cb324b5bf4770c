//! Shared building blocks for the Completr matching engine.
//!
//! - [`character`] -- filler classification and simple case conversion
//! - [`normalize`] -- case folding and diacritic stripping for queries and words
//! - [`enums`] -- insertion modes and their persisted labels
//! - [`policy`] -- per-call matching options
//! - [`settings`] -- host settings and their JSON form
//! - [`suggestion`] -- the value handed back to the host
//! - [`error`] -- errors raised by collaborators (the matcher itself is total)

pub mod character;
pub mod enums;
pub mod error;
pub mod normalize;
pub mod policy;
pub mod settings;
pub mod suggestion;

pub use enums::InsertionMode;
pub use error::CompletrError;
pub use policy::Policy;
pub use settings::Settings;
pub use suggestion::Suggestion;
