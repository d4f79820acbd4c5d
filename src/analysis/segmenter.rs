//! Sentence segmentation.
//!
//! A [`Segmenter`] turns raw text into a [`Document`]: ordered sentences,
//! each carrying its tokens with part-of-speech tags and lemmas. The
//! pipeline treats segmentation as an external collaborator and only relies
//! on this contract.
//!
//! # Available Segmenters
//!
//! - [`french::FrenchSegmenter`] - UAX #29 boundaries with a rule-based French tagger
//!
//! # Examples
//!
//! ```
//! use humaniseur::analysis::segmenter::Segmenter;
//! use humaniseur::analysis::segmenter::french::FrenchSegmenter;
//!
//! let segmenter = FrenchSegmenter::new();
//! let document = segmenter.segment("Le chat dort. Il fait beau.").unwrap();
//! assert_eq!(document.len(), 2);
//! assert_eq!(document.sentences[0].text, "Le chat dort.");
//! ```

use crate::analysis::token::Document;
use crate::error::Result;

/// Trait for segmenters that split text into tagged sentences.
///
/// Implementations must be deterministic: identical input yields an
/// identical [`Document`]. Empty or whitespace-only input yields a document
/// with zero sentences. Backend failures are reported as
/// [`HumaniseurError::Analysis`](crate::error::HumaniseurError::Analysis)
/// and are not recovered from by the pipeline.
///
/// # Examples
///
/// Implementing a custom segmenter:
///
/// ```
/// use humaniseur::analysis::segmenter::Segmenter;
/// use humaniseur::analysis::token::{Document, PartOfSpeech, Sentence, Token};
/// use humaniseur::error::Result;
///
/// struct LineSegmenter;
///
/// impl Segmenter for LineSegmenter {
///     fn segment(&self, text: &str) -> Result<Document> {
///         let sentences = text
///             .lines()
///             .filter(|line| !line.trim().is_empty())
///             .map(|line| {
///                 let tokens = line
///                     .split_whitespace()
///                     .map(|w| Token::new(w, PartOfSpeech::X, w.to_lowercase()).with_whitespace(" "))
///                     .collect();
///                 Sentence::new(line.trim(), tokens)
///             })
///             .collect();
///         Ok(Document::new(sentences))
///     }
///
///     fn name(&self) -> &str {
///         "line"
///     }
/// }
/// ```
pub trait Segmenter: Send + Sync {
    /// Segment the given text into sentences of tagged tokens.
    fn segment(&self, text: &str) -> Result<Document>;

    /// Get the name of this segmenter (for logging).
    fn name(&self) -> &str;
}

pub mod french;
