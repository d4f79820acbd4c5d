//! Builder for creating Humanizer instances.

use std::sync::Arc;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::segmenter::french::FrenchSegmenter;
use crate::embedding::{NGramEmbedder, TextEmbedder};
use crate::error::Result;
use crate::similarity::SimilarityScorer;
use crate::synonym::{NoSynonyms, SynonymSource};
use crate::transition::TransitionInjector;

use super::config::HumanizerConfig;
use super::pipeline::Humanizer;

/// Builder for creating `Humanizer` instances.
///
/// Every collaborator is optional. Unset collaborators default to
/// [`FrenchSegmenter`], [`NoSynonyms`] and [`NGramEmbedder`]. The n-gram
/// embedder only measures spelling overlap; pass a trained model to
/// [`embedder`](Self::embedder) for semantic synonym ranking.
///
/// # Example
///
/// ```rust,no_run
/// use humaniseur::humanizer::{HumanizerBuilder, HumanizerConfig};
/// use humaniseur::synonym::SynonymDictionary;
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let synonyms = SynonymDictionary::load_from_file("resource/synonymes.json")?;
///
/// let humanizer = HumanizerBuilder::new()
///     .config(HumanizerConfig::default().with_p_academic_transition(0.5))
///     .synonym_source(Arc::new(synonyms))
///     .build()?;
///
/// let text = humanizer.humanize("Le résultat est important.", true, Some(42))?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct HumanizerBuilder {
    config: HumanizerConfig,
    segmenter: Option<Arc<dyn Segmenter>>,
    synonyms: Option<Arc<dyn SynonymSource>>,
    embedder: Option<Arc<dyn TextEmbedder>>,
}

impl HumanizerBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: HumanizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the chance that a sentence goes through synonym substitution.
    pub fn p_synonym_replacement(mut self, p: f64) -> Self {
        self.config.p_synonym_replacement = p;
        self
    }

    /// Set the chance that a sentence receives a transition prefix.
    pub fn p_academic_transition(mut self, p: f64) -> Self {
        self.config.p_academic_transition = p;
        self
    }

    pub fn segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn synonym_source(mut self, synonyms: Arc<dyn SynonymSource>) -> Self {
        self.synonyms = Some(synonyms);
        self
    }

    pub fn embedder(mut self, embedder: Arc<dyn TextEmbedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Validate the configuration and build the `Humanizer`.
    pub fn build(self) -> Result<Humanizer> {
        self.config.validate()?;

        let segmenter = self
            .segmenter
            .unwrap_or_else(|| Arc::new(FrenchSegmenter::new()));
        let synonyms = self.synonyms.unwrap_or_else(|| Arc::new(NoSynonyms::new()));
        let embedder = self
            .embedder
            .unwrap_or_else(|| {
                log::debug!("no embedding model configured, falling back to character n-grams");
                Arc::new(NGramEmbedder::new())
            });

        log::debug!(
            "building humanizer: segmenter={}, synonyms={}, embedder={}",
            segmenter.name(),
            synonyms.name(),
            embedder.name()
        );

        let scorer = SimilarityScorer::new(embedder).with_threshold(self.config.similarity_threshold);
        let injector = TransitionInjector::with_transitions(
            self.config.p_academic_transition,
            self.config.transitions.clone(),
        );

        Ok(Humanizer::new(
            self.config,
            segmenter,
            synonyms,
            scorer,
            injector,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HumaniseurError;

    #[test]
    fn test_default_build() {
        let humanizer = HumanizerBuilder::new().build().unwrap();
        assert_eq!(humanizer.config(), &HumanizerConfig::default());
        assert_eq!(humanizer.segmenter().name(), "french");
        assert_eq!(humanizer.synonym_source().name(), "none");
        assert_eq!(humanizer.scorer().embedder().name(), "char-ngram");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = HumanizerBuilder::new().p_academic_transition(3.0).build();
        assert!(matches!(result, Err(HumaniseurError::InvalidConfig(_))));
    }

    #[test]
    fn test_settings_reach_components() {
        let humanizer = HumanizerBuilder::new()
            .config(HumanizerConfig::default().with_similarity_threshold(0.7))
            .p_synonym_replacement(1.0)
            .p_academic_transition(0.0)
            .build()
            .unwrap();
        assert_eq!(humanizer.config().p_synonym_replacement, 1.0);
        assert_eq!(humanizer.injector().probability(), 0.0);
        assert_eq!(humanizer.scorer().threshold(), 0.7);
    }
}
