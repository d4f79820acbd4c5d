//! Text analysis for Humaniseur.
//!
//! This module provides sentence segmentation, tokenization, part-of-speech
//! tagging and lemmatization. The pipeline only depends on the
//! [`segmenter::Segmenter`] trait; the bundled French implementation can be
//! replaced by any backend honouring the same contract.

pub mod segmenter;
pub mod tagger;
pub mod token;
