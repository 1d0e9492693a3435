//! Part-of-speech tagging for file-type guessing
//!
//! A [`Tagger`] turns query text into [`TaggedSpan`]s carrying a
//! Penn-Treebank-style [`PosTag`]. The rest of the crate only cares whether
//! a span is a common noun, so every tag maps down to a [`Category`].
//!
//! [`LexiconTagger`] is the bundled implementation: Unicode word
//! segmentation, a closed-class lexicon and a few suffix rules. It is wrong
//! sometimes; callers treat that as noise rather than failure.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::{QueryError, QueryResult};

/// Coarse category the parser works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Common noun, singular or plural
    Noun,
    Other,
}

/// Part-of-speech tags, a subset of the Penn Treebank tagset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// NN
    Noun,
    /// NNS
    PluralNoun,
    /// NNP
    ProperNoun,
    /// VB
    Verb,
    /// VBG
    Gerund,
    /// VBN
    PastParticiple,
    /// JJ
    Adjective,
    /// RB
    Adverb,
    /// DT
    Determiner,
    /// IN
    Preposition,
    /// CC
    Conjunction,
    /// PRP
    Pronoun,
    /// MD
    Modal,
    /// TO
    To,
    /// WP
    WhWord,
    /// CD
    Number,
    /// SYM
    Symbol,
}

impl PosTag {
    /// The Penn Treebank label for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::Verb => "VB",
            PosTag::Gerund => "VBG",
            PosTag::PastParticiple => "VBN",
            PosTag::Adjective => "JJ",
            PosTag::Adverb => "RB",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::Pronoun => "PRP",
            PosTag::Modal => "MD",
            PosTag::To => "TO",
            PosTag::WhWord => "WP",
            PosTag::Number => "CD",
            PosTag::Symbol => "SYM",
        }
    }

    /// Only common nouns count as file-type candidates.
    pub fn category(&self) -> Category {
        match self {
            PosTag::Noun | PosTag::PluralNoun => Category::Noun,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tagged slice of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub tag: PosTag,
}

impl TaggedSpan {
    pub fn category(&self) -> Category {
        self.tag.category()
    }
}

/// Trait for part-of-speech taggers
pub trait Tagger {
    /// Segment `text` and tag every span, in document order.
    fn tag(&self, text: &str) -> QueryResult<Vec<TaggedSpan>>;

    /// Get the tagger description
    fn description(&self) -> String;
}

/// Tagging context built once per query
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    spans: Vec<TaggedSpan>,
}

impl Document {
    /// Tag `text` with `tagger`.
    ///
    /// Fails with [`QueryError::DocumentBuildFailure`] when the tagger
    /// cannot process the text.
    pub fn new<T: Tagger + ?Sized>(text: &str, tagger: &T) -> QueryResult<Self> {
        let spans = tagger.tag(text)?;
        Ok(Self {
            text: text.to_string(),
            spans,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[TaggedSpan] {
        &self.spans
    }

    /// Spans tagged as common nouns, in document order.
    pub fn nouns(&self) -> impl Iterator<Item = &TaggedSpan> {
        self.spans
            .iter()
            .filter(|span| span.category() == Category::Noun)
    }
}

/// Pick the file-type candidate from a tagged document.
///
/// The last noun in the document wins; earlier nouns are overwritten.
/// Returns an empty string when there is no noun.
pub fn tag_file_type(document: &Document) -> String {
    document
        .nouns()
        .last()
        .map(|span| span.text.clone())
        .unwrap_or_default()
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "all", "any", "some", "every", "each",
    "no", "my", "your", "our", "their", "his", "its",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "from", "under", "over", "above", "below", "between", "with", "without",
    "within", "of", "for", "by", "about", "into", "onto", "since", "before", "after", "during",
    "than", "like", "near", "around", "inside",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor"];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "we", "us", "they", "them", "it", "he", "she", "him", "her", "mine",
];

const MODALS: &[&str] = &["can", "could", "should", "would", "will", "may", "might", "must"];

const WH_WORDS: &[&str] = &["what", "which", "where", "when", "who", "how"];

const VERBS: &[&str] = &[
    "find", "show", "list", "get", "search", "locate", "give", "fetch", "open", "need", "want",
    "look", "display", "return", "is", "are", "was", "were", "be", "been", "have", "has", "had",
    "do", "does", "did",
];

const PAST_PARTICIPLES: &[&str] = &[
    "modified", "created", "edited", "changed", "updated", "saved", "uploaded", "downloaded",
    "taken", "made", "written", "sent", "received",
];

const ADJECTIVES: &[&str] = &[
    "last", "large", "big", "small", "huge", "tiny", "old", "new", "recent", "latest", "older",
    "newer", "smaller", "larger", "bigger", "empty", "hidden", "less", "more",
];

const ADVERBS: &[&str] = &[
    "yesterday", "today", "tonight", "recently", "ago", "only", "just", "please", "not",
];

/// Size unit tokens written apart from their number ("500 kb").
const UNITS: &[&str] = &[
    "b", "byte", "bytes", "kb", "kilobyte", "kilobytes", "mb", "megabyte", "megabytes", "gb",
    "gigabyte", "gigabytes", "tb",
];

lazy_static! {
    static ref LEXICON: HashMap<&'static str, PosTag> = {
        let groups: [(&[&str], PosTag); 11] = [
            (DETERMINERS, PosTag::Determiner),
            (PREPOSITIONS, PosTag::Preposition),
            (CONJUNCTIONS, PosTag::Conjunction),
            (PRONOUNS, PosTag::Pronoun),
            (MODALS, PosTag::Modal),
            (WH_WORDS, PosTag::WhWord),
            (VERBS, PosTag::Verb),
            (PAST_PARTICIPLES, PosTag::PastParticiple),
            (ADJECTIVES, PosTag::Adjective),
            (ADVERBS, PosTag::Adverb),
            (UNITS, PosTag::Symbol),
        ];

        let mut lexicon = HashMap::new();
        lexicon.insert("to", PosTag::To);
        for (words, tag) in groups {
            for word in words {
                lexicon.insert(*word, tag);
            }
        }
        lexicon
    };
}

/// Lexicon and suffix-rule tagger over Unicode words
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, word: &str, sentence_start: bool) -> PosTag {
        let first = match word.chars().next() {
            Some(c) => c,
            None => return PosTag::Symbol,
        };
        if first.is_numeric() {
            return PosTag::Number;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return *tag;
        }

        if first.is_uppercase() && !sentence_start {
            return PosTag::ProperNoun;
        }

        Self::tag_by_suffix(&lower)
    }

    fn tag_by_suffix(word: &str) -> PosTag {
        let len = word.chars().count();
        if len > 4 && word.ends_with("ly") {
            PosTag::Adverb
        } else if len > 4 && word.ends_with("ing") {
            PosTag::Gerund
        } else if len > 3 && word.ends_with("ed") {
            PosTag::PastParticiple
        } else if ["ous", "ful", "able", "ible", "less", "ish"]
            .iter()
            .any(|suffix| len > suffix.len() + 2 && word.ends_with(suffix))
        {
            PosTag::Adjective
        } else if len > 2
            && word.ends_with('s')
            && !["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix))
        {
            PosTag::PluralNoun
        } else {
            PosTag::Noun
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> QueryResult<Vec<TaggedSpan>> {
        if let Some((offset, c)) = text
            .char_indices()
            .find(|(_, c)| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
        {
            return Err(QueryError::DocumentBuildFailure {
                reason: format!(
                    "unsupported control character U+{:04X} at byte {}",
                    c as u32, offset
                ),
            });
        }

        let mut spans = Vec::new();
        let mut previous_end = 0;
        for (start, word) in text.unicode_word_indices() {
            let gap = &text[previous_end..start];
            let sentence_start =
                spans.is_empty() || gap.contains(|c: char| matches!(c, '.' | '!' | '?'));
            let end = start + word.len();

            spans.push(TaggedSpan {
                text: word.to_string(),
                start,
                end,
                tag: self.tag_word(word, sentence_start),
            });
            previous_end = end;
        }

        Ok(spans)
    }

    fn description(&self) -> String {
        "lexicon tagger".to_string()
    }
}
