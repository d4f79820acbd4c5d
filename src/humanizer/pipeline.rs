//! The sentence-by-sentence transformation pipeline.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::Sentence;
use crate::error::Result;
use crate::similarity::SimilarityScorer;
use crate::synonym::SynonymSource;
use crate::transition::TransitionInjector;

use super::builder::HumanizerBuilder;
use super::config::HumanizerConfig;

/// A token replaced by a synonym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// Position of the token within its sentence.
    pub token_index: usize,
    pub original: String,
    pub replacement: String,
}

/// What happened to one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceOutcome {
    /// The sentence as segmented.
    pub source: String,
    /// The sentence as emitted.
    pub output: String,
    /// The transition phrase that was prefixed, if any.
    pub transition: Option<String>,
    /// Replacements in token order.
    pub substitutions: Vec<Substitution>,
}

/// Transformed text together with per-sentence outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanizedText {
    pub text: String,
    pub sentences: Vec<SentenceOutcome>,
}

impl HumanizedText {
    /// Number of sentences that received a transition.
    pub fn transition_count(&self) -> usize {
        self.sentences
            .iter()
            .filter(|s| s.transition.is_some())
            .count()
    }

    /// Total number of substituted tokens.
    pub fn substitution_count(&self) -> usize {
        self.sentences.iter().map(|s| s.substitutions.len()).sum()
    }
}

/// Rewrites French text sentence by sentence.
///
/// For each sentence, in order:
///
/// 1. one draw decides the transition (plus a phrase pick on success),
/// 2. one draw decides synonym substitution, consumed even when synonyms
///    are disabled so the random stream does not depend on the toggle,
/// 3. if substitution applies, each content word with candidates gets a
///    further draw against `replacement_probability` before the scorer is
///    consulted,
/// 4. the transition phrase, if any, is prefixed.
///
/// Sentences are joined with a single space.
pub struct Humanizer {
    config: HumanizerConfig,
    segmenter: Arc<dyn Segmenter>,
    synonyms: Arc<dyn SynonymSource>,
    scorer: SimilarityScorer,
    injector: TransitionInjector,
}

impl std::fmt::Debug for Humanizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Humanizer")
            .field("config", &self.config)
            .field("segmenter", &self.segmenter.name())
            .field("synonyms", &self.synonyms.name())
            .field("scorer", &self.scorer)
            .finish()
    }
}

impl Humanizer {
    pub(crate) fn new(
        config: HumanizerConfig,
        segmenter: Arc<dyn Segmenter>,
        synonyms: Arc<dyn SynonymSource>,
        scorer: SimilarityScorer,
        injector: TransitionInjector,
    ) -> Self {
        Humanizer {
            config,
            segmenter,
            synonyms,
            scorer,
            injector,
        }
    }

    /// Start building a humanizer.
    pub fn builder() -> HumanizerBuilder {
        HumanizerBuilder::new()
    }

    pub fn config(&self) -> &HumanizerConfig {
        &self.config
    }

    pub fn segmenter(&self) -> &Arc<dyn Segmenter> {
        &self.segmenter
    }

    pub fn synonym_source(&self) -> &Arc<dyn SynonymSource> {
        &self.synonyms
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    pub fn injector(&self) -> &TransitionInjector {
        &self.injector
    }

    /// Transform `text`, seeding the random source from `seed`.
    ///
    /// Without a seed, the random source is seeded from the thread RNG and
    /// the output is not reproducible.
    pub fn humanize(&self, text: &str, use_synonyms: bool, seed: Option<u64>) -> Result<String> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.humanize_with_rng(text, use_synonyms, &mut rng)
    }

    /// Transform `text` using the supplied random source.
    pub fn humanize_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        use_synonyms: bool,
        rng: &mut R,
    ) -> Result<String> {
        Ok(self.humanize_document(text, use_synonyms, rng)?.text)
    }

    /// Transform `text` and report what was done to each sentence.
    pub fn humanize_document<R: Rng + ?Sized>(
        &self,
        text: &str,
        use_synonyms: bool,
        rng: &mut R,
    ) -> Result<HumanizedText> {
        let document = self.segmenter.segment(text)?;
        log::debug!(
            "segmented {} sentences ({} tokens) with '{}'",
            document.len(),
            document.token_count(),
            self.segmenter.name()
        );

        let mut sentences = Vec::with_capacity(document.len());
        for sentence in &document {
            sentences.push(self.transform_sentence(sentence, use_synonyms, rng)?);
        }

        let text = sentences
            .iter()
            .map(|s| s.output.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(HumanizedText { text, sentences })
    }

    fn transform_sentence<R: Rng + ?Sized>(
        &self,
        sentence: &Sentence,
        use_synonyms: bool,
        rng: &mut R,
    ) -> Result<SentenceOutcome> {
        let transition = self.injector.draw(rng).map(str::to_string);

        let synonym_roll: f64 = rng.random();
        let substitutions = if use_synonyms && synonym_roll < self.config.p_synonym_replacement {
            self.substitute(sentence, rng)?
        } else {
            Vec::new()
        };

        let body = if substitutions.is_empty() {
            sentence.text.clone()
        } else {
            rebuild(sentence, &substitutions)
        };

        let output = match &transition {
            Some(phrase) => TransitionInjector::apply(phrase, &body),
            None => body,
        };

        log::trace!(
            "sentence {}..{}: transition={:?}, substitutions={}",
            sentence.start_offset,
            sentence.end_offset,
            transition,
            substitutions.len()
        );

        Ok(SentenceOutcome {
            source: sentence.text.clone(),
            output,
            transition,
            substitutions,
        })
    }

    fn substitute<R: Rng + ?Sized>(
        &self,
        sentence: &Sentence,
        rng: &mut R,
    ) -> Result<Vec<Substitution>> {
        let mut substitutions = Vec::new();

        for (index, token) in sentence.tokens.iter().enumerate() {
            if !token.pos.is_content_word() {
                continue;
            }

            let candidates = self.synonyms.lookup(&token.lemma)?;
            if candidates.is_empty() {
                continue;
            }

            let roll: f64 = rng.random();
            if roll >= self.config.replacement_probability {
                continue;
            }

            if let Some(replacement) = self.scorer.select(&token.text, &candidates)? {
                log::debug!("replacing '{}' with '{}'", token.text, replacement);
                substitutions.push(Substitution {
                    token_index: index,
                    original: token.text.clone(),
                    replacement,
                });
            }
        }

        Ok(substitutions)
    }
}

/// Join token surfaces, applying substitutions.
///
/// A single space goes wherever the source had whitespace after a token,
/// nothing where it had none. Trailing whitespace after the last token is
/// dropped.
fn rebuild(sentence: &Sentence, substitutions: &[Substitution]) -> String {
    let mut pending = substitutions.iter().peekable();
    let mut out = String::with_capacity(sentence.text.len());
    let last = sentence.tokens.len().saturating_sub(1);

    for (index, token) in sentence.tokens.iter().enumerate() {
        match pending.next_if(|s| s.token_index == index) {
            Some(substitution) => out.push_str(&substitution.replacement),
            None => out.push_str(&token.text),
        }
        if index < last && token.has_whitespace() {
            out.push(' ');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{PartOfSpeech, Token};
    use crate::embedding::PrecomputedEmbedder;
    use crate::synonym::SynonymDictionary;
    use crate::transition::tests::ZeroRng;

    fn dictionary_humanizer(p_transition: f64) -> Humanizer {
        let synonyms = SynonymDictionary::from_synonym_groups(vec![vec![
            "rapide".to_string(),
            "vite".to_string(),
            "lent".to_string(),
        ]]);
        let embedder = PrecomputedEmbedder::new(vec![
            ("rapide", vec![1.0, 0.0]),
            ("vite", vec![0.8, 0.6]),
            ("lent", vec![0.2, 0.98]),
        ])
        .unwrap();

        Humanizer::builder()
            .p_synonym_replacement(1.0)
            .p_academic_transition(p_transition)
            .synonym_source(Arc::new(synonyms))
            .embedder(Arc::new(embedder))
            .build()
            .unwrap()
    }

    #[test]
    fn test_rebuild_respects_spacing() {
        let sentence = Sentence::new(
            "Il court, vite.",
            vec![
                Token::new("Il", PartOfSpeech::Pron, "il").with_whitespace(" "),
                Token::new("court", PartOfSpeech::Verb, "courir"),
                Token::new(",", PartOfSpeech::Punct, ",").with_whitespace(" "),
                Token::new("vite", PartOfSpeech::Adv, "vite"),
                Token::new(".", PartOfSpeech::Punct, ".").with_whitespace("\n"),
            ],
        );
        let substitutions = vec![Substitution {
            token_index: 3,
            original: "vite".to_string(),
            replacement: "rapidement".to_string(),
        }];
        assert_eq!(rebuild(&sentence, &substitutions), "Il court, rapidement.");
    }

    #[test]
    fn test_substitution_with_zero_rng() {
        let humanizer = dictionary_humanizer(0.0);
        let result = humanizer
            .humanize_document("Le train rapide arrive.", true, &mut ZeroRng)
            .unwrap();

        assert_eq!(result.text, "Le train vite arrive.");
        assert_eq!(result.substitution_count(), 1);
        assert_eq!(result.sentences[0].substitutions[0].original, "rapide");
        assert_eq!(result.transition_count(), 0);
    }

    #[test]
    fn test_substitution_then_transition() {
        let humanizer = dictionary_humanizer(1.0);
        let text = humanizer
            .humanize_with_rng("Le train rapide arrive.", true, &mut ZeroRng)
            .unwrap();
        assert_eq!(text, "De plus, Le train vite arrive.");
    }

    #[test]
    fn test_synonyms_disabled_keeps_sentence() {
        let humanizer = dictionary_humanizer(0.0);
        let result = humanizer
            .humanize_document("Le train rapide arrive.", false, &mut ZeroRng)
            .unwrap();
        assert_eq!(result.text, "Le train rapide arrive.");
        assert_eq!(result.substitution_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        let humanizer = Humanizer::builder().build().unwrap();
        let result = humanizer.humanize_document("", true, &mut ZeroRng).unwrap();
        assert_eq!(result.text, "");
        assert!(result.sentences.is_empty());
        assert_eq!(humanizer.humanize("  \n ", false, Some(1)).unwrap(), "");
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let humanizer = Humanizer::builder().p_academic_transition(0.5).build().unwrap();
        let text = "Le chat dort. Il fait beau. La pluie tombe. Le vent souffle.";
        let a = humanizer.humanize(text, false, Some(42)).unwrap();
        let b = humanizer.humanize(text, false, Some(42)).unwrap();
        assert_eq!(a, b);
    }
}
