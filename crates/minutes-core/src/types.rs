use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Assignee used when no specific person could be resolved.
pub const GENERAL_ASSIGNEE: &str = "General";

/// Rendered deadline when no date could be resolved.
pub const NO_DEADLINE: &str = "No deadline";

// =============================================================================
// Deadline
// =============================================================================

/// Deadline of an action item, at day granularity.
///
/// Serialized as an ISO `YYYY-MM-DD` string or the literal `"No deadline"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deadline {
    On(NaiveDate),
    None,
}

impl Deadline {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(*date),
            Self::None => None,
        }
    }

    /// Parse the rendered form back into a deadline.
    pub fn parse(s: &str) -> Option<Self> {
        if s == NO_DEADLINE {
            return Some(Self::None);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self::On)
    }
}

impl From<Option<NaiveDate>> for Deadline {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::None, Self::On)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::None => f.write_str(NO_DEADLINE),
        }
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deadline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Deadline::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid deadline: {raw}")))
    }
}

// =============================================================================
// Action items
// =============================================================================

/// One extracted action item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// The sentence the item was extracted from, trimmed.
    pub action: String,
    /// Resolved person, or [`GENERAL_ASSIGNEE`].
    pub assignee: String,
    pub deadline: Deadline,
}

impl ActionItem {
    pub fn is_general(&self) -> bool {
        self.assignee == GENERAL_ASSIGNEE
    }
}

/// Result of one extraction call.
///
/// Only `items` is stored; the general tasks are always derived from it so
/// the two views cannot drift apart. The JSON form carries both lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub items: Vec<ActionItem>,
}

impl ExtractionResult {
    pub fn new(items: Vec<ActionItem>) -> Self {
        Self { items }
    }

    /// Items whose assignee is [`GENERAL_ASSIGNEE`], in source order.
    pub fn general_tasks(&self) -> impl Iterator<Item = &ActionItem> + '_ {
        self.items.iter().filter(|item| item.is_general())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Serialize)]
struct ExtractionResultWire<'a> {
    items: &'a [ActionItem],
    general_tasks: Vec<&'a ActionItem>,
}

#[derive(Deserialize)]
struct ExtractionResultOwned {
    items: Vec<ActionItem>,
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ExtractionResultWire {
            items: &self.items,
            general_tasks: self.general_tasks().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExtractionResult {
    // `general_tasks` in the input is ignored and re-derived from `items`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let owned = ExtractionResultOwned::deserialize(deserializer)?;
        Ok(Self::new(owned.items))
    }
}
