//! Minutes NLP crate - in-process collaborators for the extraction engine.
//!
//! Provides:
//! - A rule-based annotator (sentence segmentation, POS tagging, PERSON/DATE
//!   entity recognition) with a degraded tokens-only mode
//! - A fuzzy date parser for free-form English date phrases

pub mod annotator;
pub mod fuzzy;

pub use annotator::RuleAnnotator;
pub use fuzzy::FuzzyDateParser;
