//! Assignee resolution for one sentence.
//!
//! Cascade, first success wins: the longest `PERSON` entity, an
//! "assign(ed) to <Name>" / "to <Name>" phrase, then a bounded backward scan
//! from the first verb. Anything else is a general task.

use std::sync::LazyLock;

use minutes_core::{
    AnnotatedSentence, Capabilities, EntityLabel, EntitySpan, PosTag, Token, GENERAL_ASSIGNEE,
};
use regex::Regex;
use tracing::debug;

static ASSIGNMENT_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:assigned|assign|to)\s+(?:(?i:to)\s+)?(?P<name>\p{Lu}[\w.'-]+(?:\s+\p{Lu}[\w.'-]+)*)",
    )
    .expect("Invalid assignment phrase regex")
});

/// Resolves the person responsible for an actionable sentence.
#[derive(Debug, Clone)]
pub struct AssigneeResolver {
    window: usize,
    capabilities: Capabilities,
}

impl AssigneeResolver {
    /// `window` bounds how many tokens before the first verb the positional
    /// stage may inspect.
    pub fn new(window: usize, capabilities: Capabilities) -> Self {
        Self {
            window,
            capabilities,
        }
    }

    /// Resolve the assignee, normalised; never empty.
    pub fn resolve(&self, sentence: &AnnotatedSentence) -> String {
        let raw = self
            .from_person_entities(sentence)
            .or_else(|| self.from_assignment_phrase(sentence))
            .or_else(|| self.from_positional_scan(sentence))
            .unwrap_or_else(|| GENERAL_ASSIGNEE.to_string());
        normalize_assignee(&raw)
    }

    /// Stage 1: the `PERSON` span with the most words; ties go to the
    /// earliest span.
    pub fn from_person_entities(&self, sentence: &AnnotatedSentence) -> Option<String> {
        if !self.capabilities.entities {
            return None;
        }
        let best = sentence
            .entities_labeled(EntityLabel::Person)
            .fold(None, |best: Option<&EntitySpan>, span| match best {
                Some(b) if b.word_count() >= span.word_count() => Some(b),
                _ => Some(span),
            })?;
        debug!(assignee = %best.text, "Assignee from PERSON entity");
        Some(best.text.clone())
    }

    /// Stage 2: "assign(ed) (to) <Capitalized Name>" or "to <Capitalized Name>".
    pub fn from_assignment_phrase(&self, sentence: &AnnotatedSentence) -> Option<String> {
        let caps = ASSIGNMENT_PHRASE.captures(&sentence.text)?;
        let name = caps["name"].trim().trim_end_matches('.').trim_end();
        debug!(assignee = %name, "Assignee from assignment phrase");
        Some(name.to_string())
    }

    /// Stage 3: walk back from the first verb over at most `window` tokens
    /// and take the nearest name-like token.
    pub fn from_positional_scan(&self, sentence: &AnnotatedSentence) -> Option<String> {
        let tokens = &sentence.tokens;
        let anchor = if self.capabilities.pos_tags {
            sentence.first_verb()?
        } else {
            degraded_anchor(tokens)?
        };
        let start = anchor.saturating_sub(self.window);
        let found = (start..anchor)
            .rev()
            .map(|i| &tokens[i])
            .find(|t| is_name_like(t))?;
        debug!(assignee = %found.text, anchor, "Assignee from positional scan");
        Some(found.text.clone())
    }
}

/// Empty values and captured negations ("no", "none") become the general
/// assignee.
pub fn normalize_assignee(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("no")
        || trimmed.eq_ignore_ascii_case("none")
    {
        GENERAL_ASSIGNEE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_name_like(token: &Token) -> bool {
    token.entity == Some(EntityLabel::Person)
        || token.pos == Some(PosTag::ProperNoun)
        || (is_title_case(&token.text) && token.text.chars().count() > 1)
}

/// Without POS tags the first all-lowercase word after the opening token
/// stands in for the verb.
fn degraded_anchor(tokens: &[Token]) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, t)| {
            !t.text.is_empty() && t.text.chars().all(|c| c.is_alphabetic() && c.is_lowercase())
        })
        .map(|(i, _)| i)
}

/// Title case: every cased run starts upper-case and continues lower-case,
/// with at least one cased character ("Alice", "O'Neil", "Mary-Jane").
pub fn is_title_case(s: &str) -> bool {
    let mut seen_cased = false;
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            seen_cased = true;
            prev_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            seen_cased = true;
            prev_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}
