//! Synonym source trait and the empty default.

use crate::error::Result;

/// Strategy for looking up replacement candidates for a lemma.
///
/// Implementations return candidates in a stable order; the similarity
/// scorer breaks ties by that order. Returning an empty list is legitimate
/// and means "keep the original word".
pub trait SynonymSource: Send + Sync {
    /// Candidate replacements for `lemma`, possibly empty.
    fn lookup(&self, lemma: &str) -> Result<Vec<String>>;

    /// Get the name of this source, for logging.
    fn name(&self) -> &str;
}

/// A synonym source that never has candidates.
///
/// With this source, enabling synonym replacement leaves the text exactly as
/// it would be with replacement disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSynonyms;

impl NoSynonyms {
    pub fn new() -> Self {
        Self
    }
}

impl SynonymSource for NoSynonyms {
    fn lookup(&self, _lemma: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "none"
    }
}
