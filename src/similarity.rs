//! Embedding similarity scoring for synonym selection.
//!
//! [`SimilarityScorer::select`] embeds an original word and its candidate
//! replacements, and keeps the candidate whose embedding is closest in
//! cosine similarity, provided it clears an acceptance threshold.

use std::sync::Arc;

use crate::embedding::TextEmbedder;
use crate::error::{HumaniseurError, Result};

/// Default minimum cosine similarity for accepting a candidate.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.5;

/// Cosine similarity between two vectors, in `[-1, 1]`.
///
/// A zero vector has similarity `0.0` with everything.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(HumaniseurError::embedding(format!(
            "Vector dimensions must match for similarity calculation: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// A candidate together with its similarity to the original word.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub text: String,
    pub similarity: f32,
}

/// Picks the candidate closest to an original word in embedding space.
#[derive(Clone)]
pub struct SimilarityScorer {
    embedder: Arc<dyn TextEmbedder>,
    threshold: f32,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("embedder", &self.embedder.name())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl SimilarityScorer {
    /// Create a scorer with the default threshold of `0.5`.
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            embedder,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Set the acceptance threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Get the acceptance threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Get the underlying embedder.
    pub fn embedder(&self) -> &Arc<dyn TextEmbedder> {
        &self.embedder
    }

    /// Score every candidate against `original`, preserving candidate order.
    pub fn score(&self, original: &str, candidates: &[String]) -> Result<Vec<ScoredCandidate>> {
        let original_vector = self.embedder.embed(original)?;
        let texts: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let candidate_vectors = self.embedder.embed_batch(&texts)?;

        if let Some(text) = std::iter::once((original, &original_vector))
            .chain(texts.iter().copied().zip(candidate_vectors.iter()))
            .find_map(|(text, vector)| (!vector.is_valid()).then_some(text))
        {
            return Err(HumaniseurError::embedding(format!(
                "embedder '{}' produced a non-finite vector for '{}'",
                self.embedder.name(),
                text
            )));
        }

        if candidate_vectors.len() != candidates.len() {
            return Err(HumaniseurError::embedding(format!(
                "embedder '{}' returned {} vectors for {} candidates",
                self.embedder.name(),
                candidate_vectors.len(),
                candidates.len()
            )));
        }

        candidates
            .iter()
            .zip(candidate_vectors.iter())
            .map(|(text, vector)| {
                Ok(ScoredCandidate {
                    text: text.clone(),
                    similarity: cosine_similarity(&original_vector.data, &vector.data)?,
                })
            })
            .collect()
    }

    /// Return the most similar candidate if it clears the threshold.
    ///
    /// Ties are broken in favour of the earliest candidate. `candidates` must
    /// be non-empty; an empty list is reported as an invalid argument.
    pub fn select(&self, original: &str, candidates: &[String]) -> Result<Option<String>> {
        if candidates.is_empty() {
            return Err(HumaniseurError::invalid_argument(
                "select requires at least one candidate",
            ));
        }

        let scored = self.score(original, candidates)?;

        let mut best: Option<&ScoredCandidate> = None;
        for candidate in &scored {
            if best.is_none_or(|b| candidate.similarity > b.similarity) {
                best = Some(candidate);
            }
        }

        let selected = best
            .filter(|b| b.similarity >= self.threshold)
            .map(|b| b.text.clone());

        log::trace!(
            "best candidate for '{}': {:?} (threshold {})",
            original,
            best.map(|b| (&b.text, b.similarity)),
            self.threshold
        );

        Ok(selected)
    }
}
