//! Token, sentence and document types produced by segmentation.
//!
//! A [`Document`] is the immutable result of running a
//! [`Segmenter`](crate::analysis::segmenter::Segmenter) over an input string.
//! It owns an ordered list of [`Sentence`]s, each of which owns an ordered
//! list of [`Token`]s.
//!
//! # Examples
//!
//! ```
//! use humaniseur::analysis::token::{PartOfSpeech, Token};
//!
//! let token = Token::new("rapide", PartOfSpeech::Adj, "rapide").with_whitespace(" ");
//! assert!(token.pos.is_content_word());
//! assert!(token.has_whitespace());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HumaniseurError, Result};

/// Coarse part-of-speech category, following the Universal POS tag set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Adjective
    Adj,
    /// Adposition (preposition)
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other
    X,
}

impl PartOfSpeech {
    /// Whether tokens with this tag are eligible for synonym replacement.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Adj | PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adv
        )
    }

    /// The Universal POS tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = HumaniseurError;

    fn from_str(s: &str) -> Result<Self> {
        let pos = match s.to_uppercase().as_str() {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            "X" => PartOfSpeech::X,
            _ => {
                return Err(HumaniseurError::parse(format!(
                    "Unknown part-of-speech tag: {s}"
                )));
            }
        };
        Ok(pos)
    }
}

/// The smallest unit acted upon by the pipeline.
///
/// Tokens are read-only once segmentation has produced them; the pipeline
/// copies surface forms (or their replacements) into a new output string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the input
    pub text: String,

    /// Coarse part-of-speech category
    pub pos: PartOfSpeech,

    /// Dictionary form, used as the synonym lookup key
    pub lemma: String,

    /// Whitespace that followed this token in the input (possibly empty)
    pub whitespace: String,

    /// Byte offset where this token starts in the original text
    pub start_offset: usize,

    /// Byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token without offsets or trailing whitespace.
    pub fn new<S: Into<String>, L: Into<String>>(text: S, pos: PartOfSpeech, lemma: L) -> Self {
        Token {
            text: text.into(),
            pos,
            lemma: lemma.into(),
            whitespace: String::new(),
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Set the byte offsets of this token.
    pub fn with_offsets(mut self, start_offset: usize, end_offset: usize) -> Self {
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self
    }

    /// Set the trailing whitespace of this token.
    pub fn with_whitespace<S: Into<String>>(mut self, whitespace: S) -> Self {
        self.whitespace = whitespace.into();
        self
    }

    /// Whether whitespace followed this token in the input.
    pub fn has_whitespace(&self) -> bool {
        !self.whitespace.is_empty()
    }
}

/// A contiguous span of the input text with its tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed of surrounding whitespace
    pub text: String,

    /// Byte offset of the first token in the original text
    pub start_offset: usize,

    /// Byte offset just past the last token in the original text
    pub end_offset: usize,

    /// Tokens in input order
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from its trimmed text and tokens.
    pub fn new<S: Into<String>>(text: S, tokens: Vec<Token>) -> Self {
        let start_offset = tokens.first().map(|t| t.start_offset).unwrap_or(0);
        let end_offset = tokens.last().map(|t| t.end_offset).unwrap_or(0);
        Sentence {
            text: text.into(),
            start_offset,
            end_offset,
            tokens,
        }
    }

    /// Number of tokens in this sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Ordered sentences produced by one segmentation call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sentences in input order
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Create a document from its sentences.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Document { sentences }
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check whether the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over sentences in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
