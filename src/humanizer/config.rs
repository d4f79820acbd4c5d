//! Humanizer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HumaniseurError, Result};
use crate::similarity::DEFAULT_SIMILARITY_THRESHOLD;
use crate::transition::default_transitions;

/// Probabilities and thresholds that drive the pipeline.
///
/// Missing fields take their default values when deserializing, so a JSON
/// file only needs to name what it overrides:
///
/// ```json
/// { "p_academic_transition": 0.6 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanizerConfig {
    /// Chance that a sentence goes through synonym substitution.
    pub p_synonym_replacement: f64,

    /// Chance that a sentence receives a transition prefix.
    pub p_academic_transition: f64,

    /// Chance that an eligible token with candidates is considered for
    /// replacement.
    pub replacement_probability: f64,

    /// Minimum cosine similarity for a candidate to be accepted.
    pub similarity_threshold: f32,

    /// Transition phrases to choose from.
    pub transitions: Vec<String>,
}

impl Default for HumanizerConfig {
    fn default() -> Self {
        Self {
            p_synonym_replacement: 0.3,
            p_academic_transition: 0.3,
            replacement_probability: 0.5,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            transitions: default_transitions(),
        }
    }
}

impl HumanizerConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HumaniseurError::storage(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            HumaniseurError::parse(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn with_p_synonym_replacement(mut self, p: f64) -> Self {
        self.p_synonym_replacement = p;
        self
    }

    pub fn with_p_academic_transition(mut self, p: f64) -> Self {
        self.p_academic_transition = p;
        self
    }

    pub fn with_replacement_probability(mut self, p: f64) -> Self {
        self.replacement_probability = p;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_transitions(mut self, transitions: Vec<String>) -> Self {
        self.transitions = transitions;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        check_probability("p_synonym_replacement", self.p_synonym_replacement)?;
        check_probability("p_academic_transition", self.p_academic_transition)?;
        check_probability("replacement_probability", self.replacement_probability)?;

        if !(-1.0..=1.0).contains(&self.similarity_threshold) {
            return Err(HumaniseurError::invalid_config(format!(
                "similarity_threshold must be within [-1, 1], got {}",
                self.similarity_threshold
            )));
        }

        if self.transitions.is_empty() {
            return Err(HumaniseurError::invalid_config(
                "at least one transition phrase is required",
            ));
        }

        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HumaniseurError::invalid_config(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HumanizerConfig::default();
        assert_eq!(config.p_synonym_replacement, 0.3);
        assert_eq!(config.p_academic_transition, 0.3);
        assert_eq!(config.replacement_probability, 0.5);
        assert_eq!(config.similarity_threshold, 0.5);
        assert_eq!(config.transitions.len(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = HumanizerConfig::default().with_p_academic_transition(1.5);
        assert!(matches!(
            config.validate(),
            Err(HumaniseurError::InvalidConfig(_))
        ));

        let config = HumanizerConfig::default().with_p_synonym_replacement(-0.1);
        assert!(config.validate().is_err());

        let config = HumanizerConfig::default().with_replacement_probability(f64::NAN);
        assert!(config.validate().is_err());

        let config = HumanizerConfig::default().with_similarity_threshold(1.2);
        assert!(config.validate().is_err());

        let config = HumanizerConfig::default().with_transitions(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundaries_are_valid() {
        let config = HumanizerConfig::default()
            .with_p_academic_transition(1.0)
            .with_p_synonym_replacement(0.0)
            .with_similarity_threshold(-1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "p_academic_transition": 0.9 }"#).unwrap();

        let config = HumanizerConfig::from_file(&path).unwrap();
        assert_eq!(config.p_academic_transition, 0.9);
        assert_eq!(config.p_synonym_replacement, 0.3);
        assert_eq!(config.transitions.len(), 8);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            HumanizerConfig::from_file(dir.path().join("missing.json")),
            Err(HumaniseurError::Storage(_))
        ));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ p_academic_transition: }").unwrap();
        assert!(matches!(
            HumanizerConfig::from_file(&path),
            Err(HumaniseurError::Parse(_))
        ));

        std::fs::write(&path, r#"{ "p_academic_transition": 2.0 }"#).unwrap();
        assert!(matches!(
            HumanizerConfig::from_file(&path),
            Err(HumaniseurError::InvalidConfig(_))
        ));
    }
}
