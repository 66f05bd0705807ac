//! Deadline resolution for one sentence.
//!
//! Three stages, first success wins: the deterministic matcher, then every
//! `DATE` entity, then the whole sentence handed to the fuzzy parser.

use chrono::NaiveDate;
use minutes_core::{AnnotatedSentence, Capabilities, DateParser, EntityLabel};
use tracing::debug;

use crate::matcher;

/// Resolves a sentence to a deadline date.
pub struct DateResolver<'a> {
    parser: &'a dyn DateParser,
    capabilities: Capabilities,
}

impl<'a> DateResolver<'a> {
    pub fn new(parser: &'a dyn DateParser, capabilities: Capabilities) -> Self {
        Self {
            parser,
            capabilities,
        }
    }

    /// Resolve the sentence, or `None` when every stage declines.
    pub fn resolve(&self, sentence: &AnnotatedSentence, reference: NaiveDate) -> Option<NaiveDate> {
        self.deterministic(sentence, reference)
            .or_else(|| self.from_entities(sentence, reference))
            .or_else(|| self.from_sentence(sentence, reference))
    }

    /// Stage 1: the ordered regex cascade.
    pub fn deterministic(&self, sentence: &AnnotatedSentence, reference: NaiveDate) -> Option<NaiveDate> {
        let m = matcher::match_date(&sentence.text, reference, self.parser)?;
        debug!(rule = m.rule.as_str(), date = %m.date, "Deadline from deterministic rule");
        Some(m.date)
    }

    /// Stage 2: the first `DATE` entity the fuzzy parser understands.
    pub fn from_entities(&self, sentence: &AnnotatedSentence, reference: NaiveDate) -> Option<NaiveDate> {
        if !self.capabilities.entities {
            return None;
        }
        sentence
            .entities_labeled(EntityLabel::Date)
            .find_map(|entity| {
                let date = self.parser.parse(&entity.text, reference, true)?;
                debug!(entity = %entity.text, date = %date, "Deadline from DATE entity");
                Some(date)
            })
    }

    /// Stage 3: the sentence as a whole.
    pub fn from_sentence(&self, sentence: &AnnotatedSentence, reference: NaiveDate) -> Option<NaiveDate> {
        let date = self.parser.parse(&sentence.text, reference, true)?;
        debug!(date = %date, "Deadline from whole sentence");
        Some(date)
    }
}
