//! # Humaniseur
//!
//! Rewrites French text in a formal academic register.
//!
//! ## Features
//!
//! - Sentence segmentation with a rule-based French tagger
//! - Random academic transition phrases ("De plus,", "Néanmoins,", ...)
//! - Optional synonym substitution ranked by embedding similarity
//! - Pluggable segmenter, synonym source and embedder
//! - Reproducible output from an explicit seed
//!
//! ```
//! let text = humaniseur::humanize("Le chat dort. Il fait beau.", false, 0.3, 1.0, Some(3)).unwrap();
//! assert!(text.ends_with("Il fait beau."));
//! ```

pub mod analysis;
pub mod cli;
pub mod embedding;
pub mod error;
pub mod humanizer;
pub mod similarity;
pub mod stats;
pub mod synonym;
pub mod transition;

use crate::error::Result;
use crate::humanizer::Humanizer;

/// Transform `text` with the default collaborators.
///
/// Uses [`FrenchSegmenter`](analysis::segmenter::french::FrenchSegmenter),
/// [`NoSynonyms`](synonym::NoSynonyms) and
/// [`NGramEmbedder`](embedding::NGramEmbedder). A fixed `seed` gives
/// byte-identical output across calls.
pub fn humanize(
    text: &str,
    use_synonyms: bool,
    p_synonym_replacement: f64,
    p_academic_transition: f64,
    seed: Option<u64>,
) -> Result<String> {
    Humanizer::builder()
        .p_synonym_replacement(p_synonym_replacement)
        .p_academic_transition(p_academic_transition)
        .build()?
        .humanize(text, use_synonyms, seed)
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
