//! Academic transition phrases.
//!
//! A [`TransitionInjector`] decides, sentence by sentence, whether to prefix
//! a French connective such as "De plus," or "Néanmoins,".

use rand::Rng;
use rand::seq::IndexedRandom;

/// The built-in transition phrases, in selection order.
pub const ACADEMIC_TRANSITIONS: [&str; 8] = [
    "De plus,",
    "En outre,",
    "Par conséquent,",
    "Ainsi,",
    "Néanmoins,",
    "Toutefois,",
    "D'autre part,",
    "En revanche,",
];

/// The built-in transition phrases as owned strings.
pub fn default_transitions() -> Vec<String> {
    ACADEMIC_TRANSITIONS.iter().map(|t| t.to_string()).collect()
}

/// Randomly prefixes sentences with a transition phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionInjector {
    probability: f64,
    transitions: Vec<String>,
}

impl TransitionInjector {
    /// Create an injector over [`ACADEMIC_TRANSITIONS`].
    pub fn new(probability: f64) -> Self {
        Self::with_transitions(probability, default_transitions())
    }

    /// Create an injector over a custom phrase list.
    pub fn with_transitions(probability: f64, transitions: Vec<String>) -> Self {
        TransitionInjector {
            probability,
            transitions,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn transitions(&self) -> &[String] {
        &self.transitions
    }

    /// Decide whether to prefix the next sentence, and with which phrase.
    ///
    /// Always consumes one uniform draw. When it falls below the probability,
    /// a phrase is then picked uniformly.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let roll: f64 = rng.random();
        if roll < self.probability {
            self.transitions.choose(rng).map(String::as_str)
        } else {
            None
        }
    }

    /// Draw a decision and apply it to `sentence`.
    pub fn inject<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> String {
        match self.draw(rng) {
            Some(phrase) => Self::apply(phrase, sentence),
            None => sentence.to_string(),
        }
    }

    /// Prefix `sentence` with `phrase`, separated by one space.
    pub fn apply(phrase: &str, sentence: &str) -> String {
        if sentence.is_empty() {
            phrase.to_string()
        } else {
            format!("{phrase} {sentence}")
        }
    }
}
