//! Linguistic data model and the two collaborator contracts consumed by the
//! extraction engine: the annotator and the fuzzy date parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Verb,
    Auxiliary,
    ProperNoun,
    Noun,
    Pronoun,
    Determiner,
    Adposition,
    Adjective,
    Adverb,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other,
}

/// Named-entity category recognised by the annotator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Date,
}

/// One token of an annotated sentence.
///
/// `pos` and `entity` are `None` when the annotator lacks the capability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: Option<PosTag>,
    pub entity: Option<EntityLabel>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: None,
            entity: None,
        }
    }

    pub fn with_pos(mut self, pos: PosTag) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_entity(mut self, entity: EntityLabel) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn is_verb(&self) -> bool {
        self.pos == Some(PosTag::Verb)
    }
}

/// A contiguous run of tokens `[start, end)` carrying an entity label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl EntitySpan {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A sentence as produced by the annotator. Read-only to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// Raw sentence text, trimmed.
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
}

impl AnnotatedSentence {
    /// Entity spans with the given label, in sentence order.
    pub fn entities_labeled(&self, label: EntityLabel) -> impl Iterator<Item = &EntitySpan> + '_ {
        self.entities.iter().filter(move |e| e.label == label)
    }

    /// Index of the first verb-tagged token.
    pub fn first_verb(&self) -> Option<usize> {
        self.tokens.iter().position(Token::is_verb)
    }

    pub fn has_verb(&self) -> bool {
        self.first_verb().is_some()
    }
}

/// What the annotator negotiated at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    pub pos_tags: bool,
    pub entities: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        pos_tags: true,
        entities: true,
    };

    pub const DEGRADED: Capabilities = Capabilities {
        pos_tags: false,
        entities: false,
    };
}

/// Sentence segmentation, POS tagging and entity recognition.
///
/// Implementations must be immutable after construction so a single
/// instance can serve concurrent extraction calls.
pub trait Annotator: Send + Sync {
    /// Human-readable name of the model or rule set.
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    /// Split `text` into annotated sentences, in source order.
    ///
    /// Must never fail: a degraded annotator still returns sentence and
    /// token boundaries.
    fn annotate(&self, text: &str) -> Vec<AnnotatedSentence>;
}

/// Free-form date phrase resolution relative to a base date.
pub trait DateParser: Send + Sync {
    /// Resolve `phrase` against `base`. With `prefer_future`, ambiguous
    /// phrases resolve to their next occurrence rather than the current or
    /// previous one. Unparseable input yields `None`.
    fn parse(&self, phrase: &str, base: NaiveDate, prefer_future: bool) -> Option<NaiveDate>;
}
