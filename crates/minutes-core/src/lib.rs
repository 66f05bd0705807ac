//! Shared types, collaborator contracts, configuration and errors for the
//! minutes action-item extractor.

pub mod config;
pub mod error;
pub mod nlp;
pub mod types;

pub use config::MinutesConfig;
pub use error::{MinutesError, Result};
pub use nlp::{
    AnnotatedSentence, Annotator, Capabilities, DateParser, EntityLabel, EntitySpan, PosTag,
    Token,
};
pub use types::{ActionItem, Deadline, ExtractionResult, GENERAL_ASSIGNEE, NO_DEADLINE};
