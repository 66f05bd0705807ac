//! Action-item extraction orchestrator.
//!
//! Annotates the text once, filters actionable sentences, and resolves the
//! assignee and deadline of each survivor independently.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use minutes_core::config::ExtractionConfig;
use minutes_core::{ActionItem, Annotator, Capabilities, DateParser, Deadline, ExtractionResult};
use tracing::{debug, info};

use crate::assignee::AssigneeResolver;
use crate::classifier;
use crate::date::DateResolver;

/// The extraction engine. Stateless across calls; the injected
/// collaborators are shared read-only.
pub struct ActionItemExtractor {
    annotator: Arc<dyn Annotator>,
    parser: Arc<dyn DateParser>,
    config: ExtractionConfig,
}

impl ActionItemExtractor {
    /// Create an extractor with default tuning.
    pub fn new(annotator: Arc<dyn Annotator>, parser: Arc<dyn DateParser>) -> Self {
        Self {
            annotator,
            parser,
            config: ExtractionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.annotator.capabilities()
    }

    pub fn annotator_name(&self) -> &str {
        self.annotator.name()
    }

    /// Extract action items from `text`.
    ///
    /// Relative dates resolve against `reference`, or against today when
    /// absent. Never fails for text input: unresolved assignees become
    /// "General" and unresolved dates "No deadline".
    pub fn extract_action_items(&self, text: &str, reference: Option<NaiveDate>) -> ExtractionResult {
        self.extract_at(text, reference.unwrap_or_else(today))
    }

    /// [`extract_action_items`](Self::extract_action_items) with a fixed
    /// reference date. Identical inputs give identical results.
    pub fn extract_at(&self, text: &str, reference: NaiveDate) -> ExtractionResult {
        let capabilities = self.annotator.capabilities();
        let assignees = AssigneeResolver::new(self.config.assignee_window, capabilities);
        let dates = DateResolver::new(self.parser.as_ref(), capabilities);

        let sentences = self.annotator.annotate(text);
        let total = sentences.len();

        let items: Vec<ActionItem> = sentences
            .iter()
            .filter(|sentence| {
                let keep = classifier::is_actionable(sentence, capabilities);
                if !keep {
                    debug!(sentence = %sentence.text, "Skipping non-actionable sentence");
                }
                keep
            })
            .map(|sentence| ActionItem {
                action: sentence.text.trim().to_string(),
                assignee: assignees.resolve(sentence),
                deadline: Deadline::from(dates.resolve(sentence, reference)),
            })
            .collect();

        let result = ExtractionResult::new(items);
        info!(
            sentences = total,
            items = result.items.len(),
            general = result.general_tasks().count(),
            reference = %reference,
            "Extraction complete"
        );
        result
    }
}

/// The local calendar date, i.e. the current moment at midnight.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minutes_core::{
        AnnotatedSentence, EntityLabel, EntitySpan, PosTag, Token, GENERAL_ASSIGNEE,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Splits on '.', tags a fixed verb list, and marks a fixed set of names
    /// as PERSON entities.
    struct StubAnnotator {
        capabilities: Capabilities,
        calls: AtomicUsize,
    }

    impl StubAnnotator {
        fn new(capabilities: Capabilities) -> Self {
            Self {
                capabilities,
                calls: AtomicUsize::new(0),
            }
        }
    }

    const VERBS: &[&str] = &["send", "review", "ping", "book", "fix"];
    const NAMES: &[&str] = &["Alice", "Bob"];

    impl Annotator for StubAnnotator {
        fn name(&self) -> &str {
            "stub"
        }

        fn capabilities(&self) -> Capabilities {
            self.capabilities
        }

        fn annotate(&self, text: &str) -> Vec<AnnotatedSentence> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            text.split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    let mut tokens = Vec::new();
                    let mut entities = Vec::new();
                    for (i, word) in s.split_whitespace().enumerate() {
                        let mut token = Token::new(word);
                        if !self.capabilities.pos_tags {
                            tokens.push(token);
                            continue;
                        }
                        if VERBS.contains(&word.to_lowercase().as_str()) {
                            token = token.with_pos(PosTag::Verb);
                        } else if NAMES.contains(&word) {
                            token = token.with_pos(PosTag::ProperNoun).with_entity(EntityLabel::Person);
                            entities.push(EntitySpan {
                                label: EntityLabel::Person,
                                start: i,
                                end: i + 1,
                                text: word.to_string(),
                            });
                        } else {
                            token = token.with_pos(PosTag::Noun);
                        }
                        tokens.push(token);
                    }
                    AnnotatedSentence {
                        text: format!("{s}."),
                        tokens,
                        entities,
                    }
                })
                .collect()
        }
    }

    /// Understands nothing.
    struct NullParser;

    impl DateParser for NullParser {
        fn parse(&self, _: &str, _: NaiveDate, _: bool) -> Option<NaiveDate> {
            None
        }
    }

    fn extractor(capabilities: Capabilities) -> ActionItemExtractor {
        ActionItemExtractor::new(
            Arc::new(StubAnnotator::new(capabilities)),
            Arc::new(NullParser),
        )
    }

    #[test]
    fn test_items_follow_sentence_order() {
        let result = extractor(Capabilities::FULL).extract_at(
            "Alice will send the deck tomorrow. Great demo. Ping the vendor in 3 days. Bob should review it",
            date(2025, 9, 24),
        );

        let actions: Vec<&str> = result.items.iter().map(|i| i.action.as_str()).collect();
        assert_eq!(
            actions,
            vec![
                "Alice will send the deck tomorrow.",
                "Ping the vendor in 3 days.",
                "Bob should review it."
            ]
        );
        assert_eq!(result.items[0].assignee, "Alice");
        assert_eq!(result.items[0].deadline, Deadline::On(date(2025, 9, 25)));
        assert_eq!(result.items[1].assignee, GENERAL_ASSIGNEE);
        assert_eq!(result.items[1].deadline, Deadline::On(date(2025, 9, 27)));
        assert_eq!(result.items[2].assignee, "Bob");
        assert_eq!(result.items[2].deadline, Deadline::None);
    }

    #[test]
    fn test_general_tasks_partition() {
        let result = extractor(Capabilities::FULL).extract_at(
            "Book the room. Alice will fix the build. Send the minutes",
            date(2025, 9, 24),
        );
        let general: Vec<&ActionItem> = result.general_tasks().collect();
        let expected: Vec<&ActionItem> =
            result.items.iter().filter(|i| i.assignee == "General").collect();
        assert_eq!(general, expected);
        assert_eq!(general.len(), 2);
        assert_eq!(general[0].action, "Book the room.");
        assert_eq!(general[1].action, "Send the minutes.");
    }

    #[test]
    fn test_idempotent_for_fixed_reference() {
        let ex = extractor(Capabilities::FULL);
        let text = "Alice will send the deck today. Review the plan in 2 weeks";
        let a = ex.extract_at(text, date(2025, 9, 24));
        let b = ex.extract_at(text, date(2025, 9, 24));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_empty_text() {
        let result = extractor(Capabilities::FULL).extract_at("", date(2025, 9, 24));
        assert!(result.is_empty());
        assert_eq!(result.general_tasks().count(), 0);
    }

    #[test]
    fn test_no_deadline_sentence_excluded() {
        let result = extractor(Capabilities::FULL)
            .extract_at("Fix the docs, no deadline", date(2025, 9, 24));
        assert!(result.is_empty());
    }

    #[test]
    fn test_degraded_annotator_still_extracts() {
        let result = extractor(Capabilities::DEGRADED)
            .extract_at("great demo. Bob reviews it tomorrow", date(2025, 9, 24));
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].assignee, GENERAL_ASSIGNEE);
        assert_eq!(result.items[1].assignee, "Bob");
        assert_eq!(result.items[1].deadline, Deadline::On(date(2025, 9, 25)));
    }

    #[test]
    fn test_default_reference_is_today() {
        let ex = extractor(Capabilities::FULL);
        let result = ex.extract_action_items("Send it today", None);
        let d = result.items[0].deadline.date().unwrap();
        // Allow for the clock crossing midnight between the two reads.
        assert!(d == today() || d.succ_opt() == Some(today()));
    }

    #[test]
    fn test_annotates_once_per_call() {
        let annotator = Arc::new(StubAnnotator::new(Capabilities::FULL));
        let ex = ActionItemExtractor::new(annotator.clone(), Arc::new(NullParser));
        ex.extract_at("Send it. Review it. Book it", date(2025, 9, 24));
        assert_eq!(annotator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ex.annotator_name(), "stub");
        assert_eq!(ex.capabilities(), Capabilities::FULL);
    }

    #[test]
    fn test_window_from_config() {
        let ex = extractor(Capabilities::FULL).with_config(ExtractionConfig { assignee_window: 0 });
        // With a zero window only entities and phrases can name someone.
        let result = ex.extract_at("Carol will send it", date(2025, 9, 24));
        assert_eq!(result.items[0].assignee, GENERAL_ASSIGNEE);

        let result = extractor(Capabilities::FULL).extract_at("Carol will send it", date(2025, 9, 24));
        assert_eq!(result.items[0].assignee, "Carol");
    }
}
