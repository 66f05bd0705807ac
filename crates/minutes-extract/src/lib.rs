//! Minutes Extract crate - action items from free-form meeting notes.
//!
//! Provides the extraction pipeline:
//! - Calendar arithmetic for relative weekdays and "in N units" offsets
//! - An ordered regex cascade for deterministic deadlines
//! - Deadline and assignee resolution with graceful fallbacks
//! - Sentence classification and the top-level orchestrator

pub mod assignee;
pub mod calendar;
pub mod classifier;
pub mod date;
pub mod extractor;
pub mod matcher;

pub use assignee::{normalize_assignee, AssigneeResolver};
pub use calendar::{in_n, weekday_date, DurationUnit, WeekdayModifier};
pub use classifier::is_actionable;
pub use date::DateResolver;
pub use extractor::{today, ActionItemExtractor};
pub use matcher::{match_date, DateMatch, DateRule};
