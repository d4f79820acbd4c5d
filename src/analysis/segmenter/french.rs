//! French sentence segmenter.
//!
//! Sentence and word boundaries follow the Unicode Text Segmentation
//! algorithm (UAX #29). On top of that, elided articles and pronouns
//! (`l'`, `d'`, `qu'`, ...) are split off the following word so that
//! "l'homme" yields the tokens `l'` and `homme`. Each token is tagged with
//! [`FrenchTagger`].

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::tagger::{FrenchTagger, TagContext, normalize_apostrophes};
use crate::analysis::token::{Document, PartOfSpeech, Sentence, Token};
use crate::error::Result;

/// Elided forms that are split off the word they are attached to.
const ELISIONS: &[&str] = &[
    "quoiqu'", "lorsqu'", "puisqu'", "jusqu'", "qu'", "l'", "d'", "j'", "m'", "n'", "s'", "t'",
    "c'",
];

/// Segmenter for French text.
#[derive(Clone, Debug, Default)]
pub struct FrenchSegmenter {
    tagger: FrenchTagger,
}

impl FrenchSegmenter {
    /// Create a segmenter with the built-in tagger.
    pub fn new() -> Self {
        FrenchSegmenter {
            tagger: FrenchTagger::new(),
        }
    }

    /// Create a segmenter with a custom tagger.
    pub fn with_tagger(tagger: FrenchTagger) -> Self {
        FrenchSegmenter { tagger }
    }

    /// Split a word into an elided prefix and the remainder, if it has one.
    fn split_elision(word: &str) -> Option<(&str, &str)> {
        let (index, apostrophe) = word
            .char_indices()
            .find(|&(_, c)| c == '\'' || c == '\u{2019}')?;
        let split_at = index + apostrophe.len_utf8();
        let (prefix, rest) = word.split_at(split_at);

        if rest.is_empty() || !rest.chars().next().is_some_and(|c| c.is_alphabetic()) {
            return None;
        }

        let normalized = normalize_apostrophes(&prefix.to_lowercase());
        if ELISIONS.contains(&normalized.as_str()) {
            Some((prefix, rest))
        } else {
            None
        }
    }

    /// Tokenize one sentence span, `base` being its byte offset in the full text.
    fn tokenize(&self, span: &str, base: usize) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut context = TagContext {
            sentence_initial: true,
            previous: None,
        };

        for (index, word) in span.split_word_bound_indices() {
            if word.chars().all(char::is_whitespace) {
                if let Some(last) = tokens.last_mut() {
                    last.whitespace.push_str(word);
                }
                continue;
            }

            let start = base + index;
            let pieces = match Self::split_elision(word) {
                Some((prefix, rest)) => vec![(start, prefix), (start + prefix.len(), rest)],
                None => vec![(start, word)],
            };

            for (offset, piece) in pieces {
                let (pos, lemma) = self.tagger.tag(piece, &context);
                tokens.push(Token::new(piece, pos, lemma).with_offsets(offset, offset + piece.len()));

                if pos != PartOfSpeech::Punct {
                    context.sentence_initial = false;
                    context.previous = Some(pos);
                }
            }
        }

        tokens
    }
}

impl Segmenter for FrenchSegmenter {
    fn segment(&self, text: &str) -> Result<Document> {
        let sentences: Vec<Sentence> = text
            .split_sentence_bound_indices()
            .filter(|(_, span)| !span.trim().is_empty())
            .map(|(start, span)| Sentence::new(span.trim(), self.tokenize(span, start)))
            .collect();

        log::trace!(
            "segmented {} bytes into {} sentences",
            text.len(),
            sentences.len()
        );

        Ok(Document::new(sentences))
    }

    fn name(&self) -> &str {
        "french"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(sentence: &Sentence) -> Vec<&str> {
        sentence.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_two_sentences() {
        let segmenter = FrenchSegmenter::new();
        let document = segmenter.segment("Le chat dort. Il fait beau.").unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(document.sentences[0].text, "Le chat dort.");
        assert_eq!(document.sentences[1].text, "Il fait beau.");
        assert_eq!(surfaces(&document.sentences[0]), vec!["Le", "chat", "dort", "."]);

        let tags: Vec<PartOfSpeech> = document.sentences[0].tokens.iter().map(|t| t.pos).collect();
        assert_eq!(
            tags,
            vec![
                PartOfSpeech::Det,
                PartOfSpeech::Noun,
                PartOfSpeech::Verb,
                PartOfSpeech::Punct
            ]
        );
        assert_eq!(document.sentences[0].tokens[2].lemma, "dormir");
    }

    #[test]
    fn test_empty_and_blank_input() {
        let segmenter = FrenchSegmenter::new();
        assert!(segmenter.segment("").unwrap().is_empty());
        assert!(segmenter.segment("   \n\t  ").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_attached_to_previous_token() {
        let segmenter = FrenchSegmenter::new();
        let document = segmenter.segment("Le  chat dort.").unwrap();
        let tokens = &document.sentences[0].tokens;

        assert_eq!(tokens[0].whitespace, "  ");
        assert_eq!(tokens[1].whitespace, " ");
        assert_eq!(tokens[2].whitespace, "");
    }

    #[test]
    fn test_elision_split() {
        let segmenter = FrenchSegmenter::new();
        let document = segmenter
            .segment("L'homme qu\u{2019}il connaît arrive aujourd'hui.")
            .unwrap();
        let sentence = &document.sentences[0];

        assert_eq!(
            surfaces(sentence),
            vec!["L'", "homme", "qu\u{2019}", "il", "connaît", "arrive", "aujourd'hui", "."]
        );
        assert_eq!(sentence.tokens[0].pos, PartOfSpeech::Det);
        assert_eq!(sentence.tokens[0].lemma, "le");
        assert!(!sentence.tokens[0].has_whitespace());
        assert_eq!(sentence.tokens[2].lemma, "que");
        assert_eq!(sentence.tokens[6].pos, PartOfSpeech::Adv);
    }

    #[test]
    fn test_offsets_point_into_input() {
        let text = "Bonjour. Le café est chaud.";
        let document = FrenchSegmenter::new().segment(text).unwrap();

        for sentence in &document {
            for token in &sentence.tokens {
                assert_eq!(&text[token.start_offset..token.end_offset], token.text);
            }
        }
        assert_eq!(&text[document.sentences[1].start_offset..document.sentences[1].end_offset], "Le café est chaud.");
    }

    #[test]
    fn test_paragraphs() {
        let document = FrenchSegmenter::new()
            .segment("Premier paragraphe.\n\nSecond paragraphe.")
            .unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(document.sentences[1].text, "Second paragraphe.");
    }

    #[test]
    fn test_segmenter_name() {
        assert_eq!(FrenchSegmenter::new().name(), "french");
    }
}
