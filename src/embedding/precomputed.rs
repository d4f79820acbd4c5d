//! Embedder backed by pre-computed vectors.
//!
//! [`PrecomputedEmbedder`] serves vectors from a fixed table, typically
//! exported once from a sentence-embedding model. Texts missing from the
//! table are an error rather than a silent zero vector, since a zero vector
//! would quietly disable every synonym it is compared with.
//!
//! The JSON format maps each text to its vector:
//!
//! ```json
//! { "rapide": [0.12, -0.40, 0.91], "vite": [0.10, -0.38, 0.88] }
//! ```

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;

use crate::embedding::text_embedder::TextEmbedder;
use crate::embedding::vector::Vector;
use crate::error::{HumaniseurError, Result};

/// An embedder that looks texts up in a pre-computed table.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedEmbedder {
    vectors: AHashMap<String, Vector>,
    dimension: usize,
}

impl PrecomputedEmbedder {
    /// Build an embedder from `(text, vector)` pairs.
    ///
    /// All vectors must share the same dimension.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = AHashMap::new();
        let mut dimension = None;

        for (text, data) in entries {
            let text = text.into();
            let vector = Vector::new(data);
            match dimension {
                None => dimension = Some(vector.dimension()),
                Some(expected) => vector.validate_dimension(expected).map_err(|_| {
                    HumaniseurError::embedding(format!(
                        "vector for '{}' has dimension {}, expected {}",
                        text,
                        vector.dimension(),
                        expected
                    ))
                })?,
            }
            vectors.insert(text, vector);
        }

        Ok(Self {
            vectors,
            dimension: dimension.unwrap_or(0),
        })
    }

    /// Load a table from a JSON object mapping texts to vectors.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HumaniseurError::storage(format!(
                "Failed to read vector table '{}': {}",
                path.display(),
                e
            ))
        })?;

        let table: HashMap<String, Vec<f32>> = serde_json::from_str(&content).map_err(|e| {
            HumaniseurError::parse(format!(
                "Failed to parse vector table JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::new(table)
    }

    /// Number of texts in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Check whether a vector exists for `text` (exact or lowercase).
    pub fn contains(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }

    fn lookup(&self, text: &str) -> Option<&Vector> {
        self.vectors
            .get(text)
            .or_else(|| self.vectors.get(&text.to_lowercase()))
    }
}

impl TextEmbedder for PrecomputedEmbedder {
    fn embed(&self, text: &str) -> Result<Vector> {
        self.lookup(text)
            .cloned()
            .ok_or_else(|| HumaniseurError::embedding(format!("no pre-computed vector for '{text}'")))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "precomputed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let embedder =
            PrecomputedEmbedder::new(vec![("vite", vec![1.0, 0.0]), ("lent", vec![0.0, 1.0])])
                .unwrap();

        assert_eq!(embedder.dimension(), 2);
        assert_eq!(embedder.len(), 2);
        assert_eq!(embedder.embed("vite").unwrap().data, vec![1.0, 0.0]);
        assert_eq!(embedder.embed("Lent").unwrap().data, vec![0.0, 1.0]);
        assert!(embedder.contains("LENT"));
    }

    #[test]
    fn test_unknown_text_is_error() {
        let embedder = PrecomputedEmbedder::new(vec![("vite", vec![1.0])]).unwrap();
        match embedder.embed("rapide") {
            Err(HumaniseurError::Embedding(msg)) => assert!(msg.contains("rapide")),
            other => panic!("expected embedding error, got {other:?}"),
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = PrecomputedEmbedder::new(vec![("a", vec![1.0, 0.0]), ("b", vec![1.0])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch() {
        let embedder =
            PrecomputedEmbedder::new(vec![("a", vec![1.0]), ("b", vec![2.0])]).unwrap();
        let vectors = embedder.embed_batch(&["b", "a"]).unwrap();
        assert_eq!(vectors[0].data, vec![2.0]);
        assert_eq!(vectors[1].data, vec![1.0]);
        assert!(embedder.embed_batch(&["a", "zzz"]).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.json");
        std::fs::write(&path, r#"{ "vite": [0.8, 0.6], "lent": [0.2, 0.98] }"#).unwrap();

        let embedder = PrecomputedEmbedder::load_from_file(&path).unwrap();
        assert_eq!(embedder.len(), 2);
        assert_eq!(embedder.dimension(), 2);

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            PrecomputedEmbedder::load_from_file(&path),
            Err(HumaniseurError::Parse(_))
        ));
    }
}
