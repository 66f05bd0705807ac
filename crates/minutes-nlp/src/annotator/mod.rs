//! Rule-based linguistic annotator.
//!
//! Segmentation and tokenization always run. POS tagging and entity
//! recognition run only in [`AnnotatorMode::Full`]; the degraded mode
//! returns bare tokens so the engine can still classify and scan sentences.

pub mod lexicon;
pub mod ner;
pub mod segment;
pub mod tagger;

use minutes_core::config::AnnotatorMode;
use minutes_core::{AnnotatedSentence, Annotator, Capabilities, EntityLabel, EntitySpan, Token};
use tracing::{debug, info, warn};

/// In-process annotator built from word lists and context rules.
///
/// Immutable after construction; one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct RuleAnnotator {
    mode: AnnotatorMode,
}

impl RuleAnnotator {
    pub fn new(mode: AnnotatorMode) -> Self {
        match mode {
            AnnotatorMode::Full => info!("Rule annotator ready (POS tags and entities)"),
            AnnotatorMode::Degraded => {
                warn!("Rule annotator in degraded mode: sentence and token boundaries only")
            }
        }
        Self { mode }
    }

    fn annotate_sentence(&self, sentence: &str) -> AnnotatedSentence {
        let ranges = segment::tokenize(sentence);
        let words: Vec<&str> = ranges.iter().map(|r| &sentence[r.clone()]).collect();

        if self.mode == AnnotatorMode::Degraded {
            return AnnotatedSentence {
                text: sentence.to_string(),
                tokens: words.iter().map(|w| Token::new(*w)).collect(),
                entities: Vec::new(),
            };
        }

        let tags = tagger::tag(&words);
        let mut tokens: Vec<Token> = words
            .iter()
            .zip(&tags)
            .map(|(w, tag)| Token::new(*w).with_pos(*tag))
            .collect();

        let mut entities = Vec::new();
        for (label, span) in ner::recognize(&words, &tags) {
            let raw = &sentence[ranges[span.start].start..ranges[span.end - 1].end];
            let text = match label {
                EntityLabel::Person => ner::strip_possessive(raw),
                EntityLabel::Date => raw,
            };
            for token in &mut tokens[span.clone()] {
                token.entity = Some(label);
            }
            entities.push(EntitySpan {
                label,
                start: span.start,
                end: span.end,
                text: text.to_string(),
            });
        }

        debug!(
            tokens = tokens.len(),
            entities = entities.len(),
            "Annotated sentence"
        );
        AnnotatedSentence {
            text: sentence.to_string(),
            tokens,
            entities,
        }
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new(AnnotatorMode::Full)
    }
}

impl Annotator for RuleAnnotator {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn capabilities(&self) -> Capabilities {
        match self.mode {
            AnnotatorMode::Full => Capabilities::FULL,
            AnnotatorMode::Degraded => Capabilities::DEGRADED,
        }
    }

    fn annotate(&self, text: &str) -> Vec<AnnotatedSentence> {
        segment::split_sentences(text)
            .into_iter()
            .map(|s| self.annotate_sentence(s))
            .collect()
    }
}
