//! Hashed character n-gram embedder.
//!
//! Each word is padded with `<` and `>` and split into character n-grams.
//! Every n-gram is hashed into one of `dimension` buckets with a signed
//! contribution, and the resulting vector is L2-normalized.
//!
//! The similarity this gives is orthographic: words sharing stems and
//! inflections end up close, while true synonyms with different spellings
//! ("rapide", "vite") usually fall below the default acceptance threshold.
//! It is the offline fallback used when no sentence-embedding model is
//! configured. Semantic ranking needs a trained model such as the ONNX
//! embedder behind the `onnx` feature.
//!
//! Hashing uses fixed `ahash` seeds, so embeddings are identical across
//! calls and runs of the same build.

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::embedding::text_embedder::TextEmbedder;
use crate::embedding::vector::Vector;
use crate::error::{HumaniseurError, Result};

const HASH_SEEDS: (u64, u64, u64, u64) = (
    0x6875_6d61_6e69_7365,
    0x7572_5f6e_6772_616d,
    0x9e37_79b9_7f4a_7c15,
    0xc2b2_ae3d_27d4_eb4f,
);

/// Configuration for [`NGramEmbedder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NGramConfig {
    /// Output vector dimension.
    pub dimension: usize,
    /// Smallest n-gram length, in characters.
    pub min_n: usize,
    /// Largest n-gram length, in characters.
    pub max_n: usize,
    /// Whether to lowercase text before hashing.
    pub lowercase: bool,
}

impl Default for NGramConfig {
    fn default() -> Self {
        Self {
            dimension: 256,
            min_n: 3,
            max_n: 5,
            lowercase: true,
        }
    }
}

impl NGramConfig {
    /// Check that the configuration can produce embeddings.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(HumaniseurError::invalid_config(
                "n-gram embedding dimension must be greater than zero",
            ));
        }
        if self.min_n == 0 || self.min_n > self.max_n {
            return Err(HumaniseurError::invalid_config(format!(
                "invalid n-gram range {}..={}",
                self.min_n, self.max_n
            )));
        }
        Ok(())
    }
}

/// Embedder based on hashed character n-grams.
#[derive(Debug, Clone)]
pub struct NGramEmbedder {
    config: NGramConfig,
    hasher: RandomState,
}

impl Default for NGramEmbedder {
    fn default() -> Self {
        Self {
            config: NGramConfig::default(),
            hasher: Self::hasher(),
        }
    }
}

impl NGramEmbedder {
    /// Create an embedder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an embedder with a custom configuration.
    pub fn with_config(config: NGramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            hasher: Self::hasher(),
        })
    }

    fn hasher() -> RandomState {
        let (k0, k1, k2, k3) = HASH_SEEDS;
        RandomState::with_seeds(k0, k1, k2, k3)
    }

    /// Get the configuration.
    pub fn config(&self) -> &NGramConfig {
        &self.config
    }

    fn accumulate(&self, gram: &str, data: &mut [f32]) {
        let hash = self.hasher.hash_one(gram);
        let bucket = (hash % data.len() as u64) as usize;
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        data[bucket] += sign;
    }
}

impl TextEmbedder for NGramEmbedder {
    fn embed(&self, text: &str) -> Result<Vector> {
        let text = if self.config.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut vector = Vector::zeros(self.config.dimension);
        let data = &mut vector.data;

        for word in text.split_whitespace() {
            let padded: Vec<char> = format!("<{word}>").chars().collect();

            if padded.len() < self.config.min_n {
                let gram: String = padded.iter().collect();
                self.accumulate(&gram, data);
                continue;
            }

            for n in self.config.min_n..=self.config.max_n.min(padded.len()) {
                for window in padded.windows(n) {
                    let gram: String = window.iter().collect();
                    self.accumulate(&gram, data);
                }
            }
        }

        Ok(vector.normalized())
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn name(&self) -> &str {
        "char-ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::cosine_similarity;

    #[test]
    fn test_dimension_and_norm() {
        let embedder = NGramEmbedder::new();
        let vector = embedder.embed("académique").unwrap();

        assert_eq!(vector.dimension(), 256);
        assert!((vector.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_deterministic() {
        let a = NGramEmbedder::new().embed("néanmoins").unwrap();
        let b = NGramEmbedder::new().embed("néanmoins").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_stems_are_closer() {
        let embedder = NGramEmbedder::new();
        let rapide = embedder.embed("rapide").unwrap();
        let rapidement = embedder.embed("rapidement").unwrap();
        let lent = embedder.embed("lent").unwrap();

        let close = cosine_similarity(&rapide.data, &rapidement.data).unwrap();
        let far = cosine_similarity(&rapide.data, &lent.data).unwrap();
        assert!(close > far);
    }

    #[test]
    fn test_synonyms_with_different_spelling_stay_apart() {
        let embedder = NGramEmbedder::new();
        let rapide = embedder.embed("rapide").unwrap();
        let vite = embedder.embed("vite").unwrap();

        let similarity = cosine_similarity(&rapide.data, &vite.data).unwrap();
        assert!(similarity < crate::similarity::DEFAULT_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let embedder = NGramEmbedder::new();
        assert_eq!(
            embedder.embed("Chat").unwrap(),
            embedder.embed("chat").unwrap()
        );
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let vector = NGramEmbedder::new().embed("").unwrap();
        assert_eq!(vector.norm(), 0.0);
    }

    #[test]
    fn test_invalid_config() {
        let config = NGramConfig {
            dimension: 0,
            ..NGramConfig::default()
        };
        assert!(NGramEmbedder::with_config(config).is_err());

        let config = NGramConfig {
            min_n: 4,
            max_n: 2,
            ..NGramConfig::default()
        };
        assert!(NGramEmbedder::with_config(config).is_err());
    }
}
