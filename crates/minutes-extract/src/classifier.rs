//! Decides which sentences are worth extracting.

use std::sync::LazyLock;

use minutes_core::{AnnotatedSentence, Capabilities};
use regex::Regex;

static NO_DEADLINE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bno\s+deadline\b").expect("Invalid no-deadline regex"));

/// A sentence is actionable when it has a verb and does not say
/// "no deadline".
///
/// Without POS tags the verb test is waived and any sentence containing a
/// word qualifies.
pub fn is_actionable(sentence: &AnnotatedSentence, capabilities: Capabilities) -> bool {
    if NO_DEADLINE_PHRASE.is_match(&sentence.text) {
        return false;
    }
    if capabilities.pos_tags {
        sentence.has_verb()
    } else {
        sentence
            .tokens
            .iter()
            .any(|t| t.text.chars().any(char::is_alphanumeric))
    }
}
