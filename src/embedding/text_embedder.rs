//! Text embedding trait for the similarity scorer.

use crate::embedding::vector::Vector;
use crate::error::Result;

/// Trait for converting text to vector embeddings.
///
/// The embedding model is an external, fixed-weight artifact. Implementations
/// are loaded once and shared read-only between transformation calls, hence
/// the `Send + Sync` bound.
pub trait TextEmbedder: Send + Sync {
    /// Generate an embedding vector for the given text.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to embed
    ///
    /// # Returns
    ///
    /// A vector of length [`dimension`](TextEmbedder::dimension)
    fn embed(&self, text: &str) -> Result<Vector>;

    /// Generate embeddings for multiple texts in batch.
    ///
    /// The default implementation calls `embed` sequentially.
    /// Override this method for better performance with batch processing.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vector>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text)?);
        }
        Ok(results)
    }

    /// Get the dimension of generated embeddings.
    fn dimension(&self) -> usize;

    /// Get the name/identifier of this embedder, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
