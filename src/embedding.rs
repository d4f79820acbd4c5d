//! Text embedding support for similarity scoring.
//!
//! This module provides a trait-based interface for converting text to
//! fixed-dimension vectors. The pipeline only needs `embed(text) -> vector`,
//! so any pre-trained model can be plugged in by implementing
//! [`TextEmbedder`].
//!
//! # Bundled Embedders
//!
//! - `OnnxEmbedder` - sentence-transformer model run through ONNX Runtime
//!   (`onnx` feature); the semantic embedder synonym ranking is meant for
//! - [`NGramEmbedder`] - hashed character n-grams, orthographic similarity
//!   only, the offline fallback when no model is configured
//! - [`PrecomputedEmbedder`] - fixed lookup table, loadable from JSON
//!
//! # Custom implementation
//!
//! ```
//! use humaniseur::embedding::{TextEmbedder, Vector};
//! use humaniseur::error::Result;
//!
//! struct ConstantEmbedder;
//!
//! impl TextEmbedder for ConstantEmbedder {
//!     fn embed(&self, _text: &str) -> Result<Vector> {
//!         Ok(Vector::new(vec![1.0, 0.0]))
//!     }
//!
//!     fn dimension(&self) -> usize {
//!         2
//!     }
//! }
//! ```

pub mod ngram;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod precomputed;
pub mod text_embedder;
pub mod vector;

pub use ngram::NGramEmbedder;
#[cfg(feature = "onnx")]
pub use onnx::OnnxEmbedder;
pub use precomputed::PrecomputedEmbedder;
pub use text_embedder::TextEmbedder;
pub use vector::Vector;
