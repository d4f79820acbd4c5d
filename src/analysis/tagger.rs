//! Rule-based French part-of-speech tagger and lemmatizer.
//!
//! The tagger combines a built-in closed-class lexicon (determiners,
//! pronouns, prepositions, conjunctions, auxiliaries and a handful of
//! frequent irregular verbs) with suffix heuristics for open-class words.
//! It is a lightweight stand-in for a statistical model: any
//! [`Segmenter`](crate::analysis::segmenter::Segmenter) backed by a real
//! model can replace it.
//!
//! Callers can supply an extra lexicon, which always takes precedence over
//! the built-in tables.
//!
//! # Examples
//!
//! ```
//! use humaniseur::analysis::tagger::{FrenchTagger, TagContext};
//! use humaniseur::analysis::token::PartOfSpeech;
//!
//! let tagger = FrenchTagger::new();
//! let (pos, lemma) = tagger.tag("rapidement", &TagContext::default());
//! assert_eq!(pos, PartOfSpeech::Adv);
//! assert_eq!(lemma, "rapidement");
//! ```

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::analysis::token::PartOfSpeech;
use crate::error::{HumaniseurError, Result};

/// A lexicon entry: the tag and lemma for one lowercase surface form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub pos: PartOfSpeech,
    pub lemma: String,
}

impl LexiconEntry {
    pub fn new<S: Into<String>>(pos: PartOfSpeech, lemma: S) -> Self {
        LexiconEntry {
            pos,
            lemma: lemma.into(),
        }
    }
}

/// Left context used when tagging a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagContext {
    /// The word is the first word-like token of its sentence
    pub sentence_initial: bool,
    /// Tag of the previous non-punctuation token in the sentence
    pub previous: Option<PartOfSpeech>,
}

type Table = AHashMap<&'static str, (PartOfSpeech, &'static str)>;

fn insert_all(
    table: &mut Table,
    pos: PartOfSpeech,
    entries: &[(&'static str, &'static str)],
) {
    for &(word, lemma) in entries {
        table.insert(word, (pos, lemma));
    }
}

lazy_static! {
    /// Closed-class words and frequent irregular verb forms.
    static ref CLOSED_CLASS: Table = {
        use PartOfSpeech::*;

        let mut table = Table::new();
        insert_all(&mut table, Det, &[
            ("le", "le"), ("la", "le"), ("les", "le"), ("l'", "le"),
            ("un", "un"), ("une", "un"), ("des", "un"), ("du", "de"),
            ("ce", "ce"), ("cet", "ce"), ("cette", "ce"), ("ces", "ce"),
            ("mon", "mon"), ("ma", "mon"), ("mes", "mon"),
            ("ton", "ton"), ("ta", "ton"), ("tes", "ton"),
            ("son", "son"), ("sa", "son"), ("ses", "son"),
            ("notre", "notre"), ("nos", "notre"),
            ("votre", "votre"), ("vos", "votre"),
            ("leur", "leur"), ("leurs", "leur"),
            ("chaque", "chaque"), ("plusieurs", "plusieurs"),
            ("quelques", "quelque"), ("quelque", "quelque"),
            ("aucun", "aucun"), ("aucune", "aucun"),
            ("certains", "certain"), ("certaines", "certain"),
        ]);
        insert_all(&mut table, Pron, &[
            ("je", "je"), ("j'", "je"), ("tu", "tu"), ("il", "il"), ("elle", "elle"),
            ("on", "on"), ("nous", "nous"), ("vous", "vous"), ("ils", "il"),
            ("elles", "elle"), ("me", "me"), ("m'", "me"), ("te", "te"), ("t'", "te"),
            ("se", "se"), ("s'", "se"), ("lui", "lui"), ("y", "y"), ("moi", "moi"),
            ("toi", "toi"), ("soi", "soi"), ("eux", "lui"), ("qui", "qui"),
            ("quoi", "quoi"), ("dont", "dont"), ("lequel", "lequel"),
            ("laquelle", "lequel"), ("lesquels", "lequel"), ("lesquelles", "lequel"),
            ("cela", "cela"), ("ceci", "ceci"), ("ça", "cela"), ("c'", "ce"),
            ("celui", "celui"), ("celle", "celui"), ("ceux", "celui"),
            ("celles", "celui"), ("rien", "rien"),
        ]);
        insert_all(&mut table, Adp, &[
            ("à", "à"), ("au", "à"), ("aux", "à"), ("de", "de"), ("d'", "de"),
            ("dans", "dans"), ("par", "par"), ("pour", "pour"), ("sur", "sur"),
            ("sous", "sous"), ("avec", "avec"), ("sans", "sans"), ("chez", "chez"),
            ("entre", "entre"), ("vers", "vers"), ("contre", "contre"),
            ("pendant", "pendant"), ("depuis", "depuis"), ("avant", "avant"),
            ("après", "après"), ("selon", "selon"), ("malgré", "malgré"),
            ("parmi", "parmi"), ("durant", "durant"), ("en", "en"),
            ("jusqu'", "jusque"), ("jusque", "jusque"),
        ]);
        insert_all(&mut table, Cconj, &[
            ("et", "et"), ("ou", "ou"), ("mais", "mais"), ("donc", "donc"),
            ("or", "or"), ("ni", "ni"), ("car", "car"), ("puis", "puis"),
        ]);
        insert_all(&mut table, Sconj, &[
            ("que", "que"), ("qu'", "que"), ("quand", "quand"), ("si", "si"),
            ("comme", "comme"), ("lorsque", "lorsque"), ("lorsqu'", "lorsque"),
            ("puisque", "puisque"), ("puisqu'", "puisque"), ("quoique", "quoique"),
            ("quoiqu'", "quoique"), ("parce", "parce"),
        ]);
        insert_all(&mut table, Aux, &[
            ("suis", "être"), ("es", "être"), ("est", "être"), ("sommes", "être"),
            ("êtes", "être"), ("sont", "être"), ("étais", "être"), ("était", "être"),
            ("étions", "être"), ("étiez", "être"), ("étaient", "être"),
            ("serai", "être"), ("seras", "être"), ("sera", "être"),
            ("serons", "être"), ("serez", "être"), ("seront", "être"),
            ("serais", "être"), ("serait", "être"), ("seraient", "être"),
            ("soit", "être"), ("soient", "être"), ("été", "être"), ("être", "être"),
            ("ai", "avoir"), ("as", "avoir"), ("a", "avoir"), ("avons", "avoir"),
            ("avez", "avoir"), ("ont", "avoir"), ("avais", "avoir"),
            ("avait", "avoir"), ("avions", "avoir"), ("aviez", "avoir"),
            ("avaient", "avoir"), ("aurai", "avoir"), ("aura", "avoir"),
            ("aurons", "avoir"), ("aurez", "avoir"), ("auront", "avoir"),
            ("aurait", "avoir"), ("auraient", "avoir"), ("eu", "avoir"),
            ("avoir", "avoir"),
        ]);
        insert_all(&mut table, Adv, &[
            ("ne", "ne"), ("n'", "ne"), ("pas", "pas"), ("plus", "plus"),
            ("très", "très"), ("bien", "bien"), ("trop", "trop"), ("aussi", "aussi"),
            ("toujours", "toujours"), ("jamais", "jamais"), ("déjà", "déjà"),
            ("encore", "encore"), ("souvent", "souvent"), ("ici", "ici"),
            ("là", "là"), ("peu", "peu"), ("beaucoup", "beaucoup"),
            ("assez", "assez"), ("moins", "moins"), ("non", "non"), ("oui", "oui"),
            ("tard", "tard"), ("tôt", "tôt"), ("vite", "vite"), ("hier", "hier"),
            ("demain", "demain"), ("aujourd'hui", "aujourd'hui"),
            ("surtout", "surtout"), ("ensuite", "ensuite"), ("alors", "alors"),
            ("enfin", "enfin"), ("parfois", "parfois"), ("ainsi", "ainsi"),
            ("cependant", "cependant"), ("pourtant", "pourtant"),
        ]);
        insert_all(&mut table, Num, &[
            ("deux", "deux"), ("trois", "trois"), ("quatre", "quatre"),
            ("cinq", "cinq"), ("six", "six"), ("sept", "sept"), ("huit", "huit"),
            ("neuf", "neuf"), ("dix", "dix"), ("cent", "cent"), ("mille", "mille"),
        ]);
        insert_all(&mut table, Intj, &[
            ("oh", "oh"), ("ah", "ah"), ("hélas", "hélas"), ("bravo", "bravo"),
        ]);
        insert_all(&mut table, Verb, &[
            ("fait", "faire"), ("fais", "faire"), ("faisons", "faire"),
            ("faites", "faire"), ("font", "faire"), ("faisait", "faire"),
            ("va", "aller"), ("vais", "aller"), ("vas", "aller"), ("allons", "aller"),
            ("allez", "aller"), ("vont", "aller"), ("allait", "aller"),
            ("dort", "dormir"), ("dors", "dormir"), ("dorment", "dormir"),
            ("dormait", "dormir"), ("peut", "pouvoir"), ("peux", "pouvoir"),
            ("pouvons", "pouvoir"), ("pouvez", "pouvoir"), ("peuvent", "pouvoir"),
            ("pouvait", "pouvoir"), ("veut", "vouloir"), ("veux", "vouloir"),
            ("voulons", "vouloir"), ("voulez", "vouloir"), ("veulent", "vouloir"),
            ("doit", "devoir"), ("dois", "devoir"), ("devons", "devoir"),
            ("devez", "devoir"), ("doivent", "devoir"), ("dit", "dire"),
            ("disent", "dire"), ("voit", "voir"), ("voient", "voir"),
            ("prend", "prendre"), ("prennent", "prendre"), ("met", "mettre"),
            ("mettent", "mettre"), ("sait", "savoir"), ("savent", "savoir"),
            ("vient", "venir"), ("viennent", "venir"), ("tient", "tenir"),
            ("court", "courir"), ("courant", "courir"),
        ]);
        table
    };

    /// Open-class words the suffix rules would get wrong.
    static ref SUFFIX_EXCEPTIONS: Table = {
        use PartOfSpeech::*;

        let mut table = Table::new();
        insert_all(&mut table, Noun, &[
            ("moment", "moment"), ("gouvernement", "gouvernement"),
            ("développement", "développement"), ("enseignement", "enseignement"),
            ("changement", "changement"), ("comportement", "comportement"),
            ("traitement", "traitement"), ("événement", "événement"),
            ("mouvement", "mouvement"), ("élément", "élément"),
            ("argument", "argument"), ("document", "document"),
            ("appartement", "appartement"), ("sentiment", "sentiment"),
            ("jugement", "jugement"), ("bâtiment", "bâtiment"),
            ("mer", "mer"), ("fer", "fer"), ("hiver", "hiver"), ("plaisir", "plaisir"),
            ("désir", "désir"), ("avenir", "avenir"), ("soir", "soir"),
            ("loisir", "loisir"), ("enfant", "enfant"), ("enfants", "enfant"),
            ("restaurant", "restaurant"), ("étudiant", "étudiant"),
            ("étudiants", "étudiant"), ("instant", "instant"), ("temps", "temps"),
            ("fois", "fois"), ("pays", "pays"), ("musique", "musique"),
            ("politique", "politique"), ("chat", "chat"), ("chats", "chat"),
        ]);
        insert_all(&mut table, Adj, &[
            ("cher", "cher"), ("premier", "premier"), ("dernier", "dernier"),
            ("entier", "entier"), ("léger", "léger"), ("beau", "beau"),
            ("belle", "beau"), ("beaux", "beau"), ("grand", "grand"),
            ("grande", "grand"), ("petit", "petit"), ("petite", "petit"),
            ("bon", "bon"), ("bonne", "bon"), ("nouveau", "nouveau"),
            ("nouvelle", "nouveau"), ("rapide", "rapide"), ("lent", "lent"),
            ("lente", "lent"), ("important", "important"),
            ("importante", "important"),
        ]);
        table
    };
}

/// Replace typographic apostrophes so elided forms share one key.
pub(crate) fn normalize_apostrophes(word: &str) -> String {
    word.replace('\u{2019}', "'")
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation() || "«»…–—“”‘’¿¡•·".contains(c)
}

fn replace_suffix(word: &str, suffix: &str, replacement: &str) -> Option<String> {
    word.strip_suffix(suffix)
        .filter(|stem| stem.chars().count() >= 2)
        .map(|stem| format!("{stem}{replacement}"))
}

/// Lemma for a noun: strip the plural marker.
fn noun_lemma(word: &str) -> String {
    if let Some(lemma) = replace_suffix(word, "eaux", "eau") {
        return lemma;
    }
    if let Some(lemma) = replace_suffix(word, "aux", "al") {
        return lemma;
    }
    if word.chars().count() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Lemma for an adjective: masculine singular where the ending is regular.
fn adjective_lemma(word: &str) -> String {
    const ENDINGS: &[(&str, &str)] = &[
        ("euses", "eux"),
        ("euse", "eux"),
        ("ives", "if"),
        ("ive", "if"),
        ("ifs", "if"),
        ("elles", "el"),
        ("elle", "el"),
        ("ales", "al"),
        ("aux", "al"),
        ("ées", "é"),
        ("ée", "é"),
        ("és", "é"),
    ];
    for (suffix, replacement) in ENDINGS {
        if let Some(lemma) = replace_suffix(word, suffix, replacement) {
            return lemma;
        }
    }
    noun_lemma(word)
}

/// Lemma for a verb, assuming the regular first-group conjugation.
fn verb_lemma(word: &str) -> String {
    if word.chars().count() > 3 && (word.ends_with("er") || word.ends_with("ir") || word.ends_with("re")) {
        return word.to_string();
    }
    const ENDINGS: &[&str] = &[
        "aient", "ions", "iez", "ait", "ais", "ons", "ent", "ées", "és", "ée", "ez", "es", "é", "e",
    ];
    for suffix in ENDINGS {
        if let Some(lemma) = replace_suffix(word, suffix, "er") {
            return lemma;
        }
    }
    word.to_string()
}

fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.ends_with(suffix) && word.len() > suffix.len() + 1)
}

const ADVERB_SUFFIXES: &[&str] = &["amment", "emment", "ment"];
const INFINITIVE_SUFFIXES: &[&str] = &["er", "ir"];
const CONJUGATED_SUFFIXES: &[&str] = &["aient", "ait"];
const PARTICIPLE_SUFFIXES: &[&str] = &["ées", "és", "ée", "é"];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "euses", "euse", "eux", "ives", "ive", "ifs", "if", "ables", "able", "ibles", "ible",
    "iques", "ique", "ales", "ale", "al", "elles", "elle", "els", "el", "ants", "ante", "ant",
];

/// Rule-based French tagger.
#[derive(Clone, Debug, Default)]
pub struct FrenchTagger {
    lexicon: AHashMap<String, LexiconEntry>,
}

impl FrenchTagger {
    /// Create a tagger using only the built-in tables.
    pub fn new() -> Self {
        FrenchTagger {
            lexicon: AHashMap::new(),
        }
    }

    /// Create a tagger with caller-supplied entries that override the built-in tables.
    pub fn with_lexicon<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, LexiconEntry)>,
        S: AsRef<str>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, entry)| (normalize_apostrophes(&word.as_ref().to_lowercase()), entry))
            .collect();
        FrenchTagger { lexicon }
    }

    /// Load extra lexicon entries from a JSON object mapping surface forms to entries.
    ///
    /// Example format:
    /// ```json
    /// { "bolide": { "pos": "NOUN", "lemma": "bolide" } }
    /// ```
    pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HumaniseurError::storage(format!(
                "Failed to read lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let entries: HashMap<String, LexiconEntry> =
            serde_json::from_str(&content).map_err(|e| {
                HumaniseurError::parse(format!(
                    "Failed to parse lexicon JSON from '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(Self::with_lexicon(entries))
    }

    /// Number of caller-supplied lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Tag a single word and compute its lemma.
    pub fn tag(&self, word: &str, context: &TagContext) -> (PartOfSpeech, String) {
        let lower = normalize_apostrophes(&word.to_lowercase());

        if let Some(entry) = self.lexicon.get(&lower) {
            return (entry.pos, entry.lemma.clone());
        }

        if word.chars().all(is_punctuation_char) {
            return (PartOfSpeech::Punct, word.to_string());
        }

        if word.chars().any(|c| c.is_numeric())
            && word.chars().all(|c| c.is_numeric() || c == ',' || c == '.')
        {
            return (PartOfSpeech::Num, word.to_string());
        }

        if !word.chars().any(|c| c.is_alphanumeric()) {
            return (PartOfSpeech::Sym, word.to_string());
        }

        if let Some(&(pos, lemma)) = CLOSED_CLASS.get(lower.as_str()) {
            return (pos, lemma.to_string());
        }

        let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
        if capitalized && !context.sentence_initial {
            return (PartOfSpeech::Propn, word.to_string());
        }

        if let Some(&(pos, lemma)) = SUFFIX_EXCEPTIONS.get(lower.as_str()) {
            return (pos, lemma.to_string());
        }

        self.tag_by_suffix(&lower, context)
    }

    fn tag_by_suffix(&self, lower: &str, context: &TagContext) -> (PartOfSpeech, String) {
        // A subject clitic is almost always followed by a finite verb.
        if context.previous == Some(PartOfSpeech::Pron) {
            return (PartOfSpeech::Verb, verb_lemma(lower));
        }

        if context.previous == Some(PartOfSpeech::Aux) && has_suffix(lower, PARTICIPLE_SUFFIXES) {
            return (PartOfSpeech::Verb, verb_lemma(lower));
        }

        if has_suffix(lower, ADVERB_SUFFIXES) {
            return (PartOfSpeech::Adv, lower.to_string());
        }

        let after_determiner = context.previous == Some(PartOfSpeech::Det);

        if !after_determiner && has_suffix(lower, INFINITIVE_SUFFIXES) {
            return (PartOfSpeech::Verb, lower.to_string());
        }

        if !after_determiner && has_suffix(lower, CONJUGATED_SUFFIXES) {
            return (PartOfSpeech::Verb, verb_lemma(lower));
        }

        if has_suffix(lower, PARTICIPLE_SUFFIXES) || has_suffix(lower, ADJECTIVE_SUFFIXES) {
            return (PartOfSpeech::Adj, adjective_lemma(lower));
        }

        (PartOfSpeech::Noun, noun_lemma(lower))
    }
}
