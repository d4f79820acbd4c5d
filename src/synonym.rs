//! Synonym sources.
//!
//! The pipeline asks a [`SynonymSource`] for replacement candidates keyed by
//! lemma. An empty answer is a normal outcome: the token is simply kept.
//!
//! - [`NoSynonyms`] - never returns candidates (the default)
//! - [`SynonymDictionary`] - synonym groups loaded from JSON
//!
//! # Examples
//!
//! ```
//! use humaniseur::synonym::{SynonymDictionary, SynonymSource};
//!
//! let dictionary = SynonymDictionary::from_synonym_groups(vec![vec![
//!     "rapide".to_string(),
//!     "vite".to_string(),
//!     "prompt".to_string(),
//! ]]);
//! assert_eq!(dictionary.lookup("rapide").unwrap(), vec!["vite", "prompt"]);
//! ```

pub mod dictionary;
pub mod source;

pub use dictionary::SynonymDictionary;
pub use source::{NoSynonyms, SynonymSource};
