//! Word and sentence counts for input and output text.
//!
//! Output sentences are joined with a single space, so a paragraph that
//! ends without terminal punctuation (a heading, for instance) runs into
//! the next sentence. The output count can then be lower than the input
//! count even though every input sentence was emitted.

use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::Segmenter;
use crate::error::Result;

/// Counts for a single text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Sentences as found by the segmenter.
    pub sentence_count: usize,
}

impl TextStats {
    pub fn compute(text: &str, segmenter: &dyn Segmenter) -> Result<Self> {
        Ok(TextStats {
            word_count: text.split_whitespace().count(),
            sentence_count: segmenter.segment(text)?.len(),
        })
    }
}

/// Counts before and after a transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationStats {
    pub input: TextStats,
    pub output: TextStats,
}

impl TransformationStats {
    pub fn compute(input: &str, output: &str, segmenter: &dyn Segmenter) -> Result<Self> {
        Ok(TransformationStats {
            input: TextStats::compute(input, segmenter)?,
            output: TextStats::compute(output, segmenter)?,
        })
    }

    /// Words added by the transformation, negative if words were lost.
    pub fn word_delta(&self) -> i64 {
        self.output.word_count as i64 - self.input.word_count as i64
    }
}
