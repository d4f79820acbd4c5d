//! Synonym dictionary for mapping lemmas to replacement candidates.

use std::path::Path;

use ahash::AHashMap;

use crate::error::{HumaniseurError, Result};
use crate::synonym::source::SynonymSource;

/// Synonym dictionary built from groups of mutually interchangeable terms.
///
/// Every term of a group maps to all other terms of that group. A term that
/// appears in several groups collects the candidates of all of them, in the
/// order they were first seen, without duplicates. Keys are lowercased.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    synonyms: AHashMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// Create a new synonym dictionary.
    ///
    /// If `path` is provided, loads synonyms from the specified JSON file.
    /// If `path` is `None`, creates an empty dictionary.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(file_path) => Self::load_from_file(file_path),
            None => Ok(Self::default()),
        }
    }

    /// Load synonym dictionary from a JSON file.
    ///
    /// The JSON file should contain an array of synonym groups, where each group
    /// is an array of terms that are synonyms of each other.
    ///
    /// Example format:
    /// ```json
    /// [
    ///   ["rapide", "vite", "prompt"],
    ///   ["important", "essentiel", "majeur"]
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HumaniseurError::storage(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let synonym_groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            HumaniseurError::parse(format!(
                "Failed to parse synonym dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_synonym_groups(synonym_groups);
        log::debug!(
            "loaded {} synonym entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build a synonym dictionary from synonym groups.
    pub fn from_synonym_groups(synonym_groups: Vec<Vec<String>>) -> Self {
        let mut dictionary = Self::default();
        for group in synonym_groups {
            dictionary.add_synonym_group(group);
        }
        dictionary
    }

    /// Add a synonym group where all terms are synonyms of each other.
    ///
    /// For example, adding `["rapide", "vite", "prompt"]` will create:
    /// - "rapide" -> ["vite", "prompt"]
    /// - "vite" -> ["rapide", "prompt"]
    /// - "prompt" -> ["rapide", "vite"]
    pub fn add_synonym_group(&mut self, terms: Vec<String>) {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        for term in &terms {
            let key = term.to_lowercase();
            let entry = self.synonyms.entry(key.clone()).or_default();
            for other in &terms {
                if other.to_lowercase() != key && !entry.contains(other) {
                    entry.push(other.clone());
                }
            }
        }
    }

    /// Get synonyms for a given term.
    pub fn get_synonyms(&self, term: &str) -> Option<&Vec<String>> {
        self.synonyms.get(&term.to_lowercase())
    }

    /// Number of terms with at least one entry.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Check whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

impl SynonymSource for SynonymDictionary {
    fn lookup(&self, lemma: &str) -> Result<Vec<String>> {
        Ok(self.get_synonyms(lemma).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}
