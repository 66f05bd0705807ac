//! Word lists backing the tagger and the entity recognizer.
//!
//! All lookups take lower-cased words unless noted otherwise.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

// =============================================================================
// Closed classes
// =============================================================================

static DETERMINERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
        "all", "both", "another", "either", "neither", "my", "your", "his", "her", "its", "our",
        "their", "whose",
    ])
});

static PRONOUNS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "someone",
        "somebody", "everyone", "everybody", "anyone", "anybody", "nobody", "who", "whom", "what",
        "which", "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        "i'll", "we'll", "you'll", "he'll", "she'll", "they'll", "i'm", "we're", "they're",
        "you're", "it's", "let's",
    ])
});

static ADPOSITIONS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "from", "of", "over", "under", "until",
        "till", "within", "without", "per", "via", "across", "around", "toward", "towards", "upon",
        "since", "beyond", "alongside", "regarding",
    ])
});

static CONJUNCTIONS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
        "unless", "whether", "than", "once", "&",
    ])
});

/// Modal auxiliaries: the next word is a verb.
static MODALS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "will", "would", "shall", "should", "can", "could", "may", "might", "must", "won't",
        "wouldn't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "needn't",
    ])
});

/// Non-modal auxiliaries.
static AUXILIARIES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "has",
        "have", "had", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
        "hasn't", "haven't", "hadn't",
    ])
});

/// Auxiliaries that act as main verbs when no verb follows ("Bob has the keys").
static LIGHT_VERBS: LazyLock<HashSet<&str>> =
    LazyLock::new(|| set(&["do", "does", "did", "has", "have", "had"]));

static ADVERBS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "not", "also", "just", "still", "already", "soon", "now", "then", "please", "asap",
        "quickly", "again", "really", "very", "too", "later", "together", "only", "even", "maybe",
        "probably", "definitely", "here", "there", "up", "out", "back", "away", "always",
        "never", "ever", "often", "first", "finally", "tentatively", "jointly", "directly",
        "personally", "offline", "ahead", "n't",
    ])
});

static ADJECTIVES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "great", "good", "new", "next", "last", "final", "quick", "important", "urgent", "ready",
        "open", "big", "small", "high", "low", "initial", "current", "previous", "second",
        "third", "other", "same", "main", "whole", "full", "weekly", "daily", "monthly",
        "quarterly", "annual", "early", "late", "better", "best", "fine", "nice", "productive",
        "happy", "overall", "upcoming", "remaining", "key", "critical", "public", "internal",
        "external", "available", "responsible", "short", "long", "coming", "following", "few",
        "several", "many", "more", "most", "blocked", "pending", "overdue", "outstanding",
    ])
});

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "thirty", "hundred", "thousand",
];

// =============================================================================
// Verbs
// =============================================================================

static VERBS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "add", "agree", "align", "analyze", "analyse", "announce", "answer", "approve", "arrange",
        "ask", "assign", "attach", "attend", "audit", "backfill", "begin", "benchmark", "book",
        "brief", "bring", "build", "buy", "calculate", "call", "cancel", "change", "chase",
        "check", "choose", "circulate", "clarify", "clean", "close", "collect", "come",
        "compile", "complete", "confirm", "connect", "consolidate", "contact", "coordinate",
        "cover", "create", "debug", "decide", "define", "deliver", "deploy", "design",
        "determine", "discuss", "distribute", "document", "double-check", "draft", "draw",
        "drive", "email", "ensure", "escalate", "estimate", "evaluate", "file", "finalize",
        "finalise", "find", "finish", "fix", "flag", "follow", "forget", "forward", "gather",
        "get", "give", "go", "hand", "handle", "help", "hire", "hold", "identify", "implement",
        "improve", "include", "inform", "install", "introduce", "investigate", "invite", "keep",
        "kick", "know", "launch", "lead", "leave", "let", "list", "look", "loop", "make", "mark",
        "manage", "measure", "meet", "merge", "migrate", "monitor", "move", "need", "negotiate",
        "notify", "nudge", "onboard", "optimize", "order", "organize", "organise", "outline",
        "own", "patch", "pay", "pick", "ping", "plan", "post", "prepare", "present", "print",
        "prioritize", "prioritise", "propose", "provide", "publish", "pull", "push", "put",
        "raise", "reach", "read", "recap", "reconcile", "record", "reduce", "refactor", "refine",
        "release", "remind", "remove", "renew", "replace", "reply", "report", "request",
        "research", "reserve", "resolve", "respond", "restart", "retire", "review", "revise",
        "rewrite", "roll", "run", "say", "schedule", "scope", "secure", "see", "sell", "send",
        "set", "share", "ship", "show", "sign", "sort", "speak", "spend", "start", "submit",
        "suggest", "summarize", "summarise", "support", "sync", "take", "talk", "teach", "tell",
        "test", "think", "track", "train", "translate", "triage", "try", "understand", "update",
        "upgrade", "upload", "validate", "verify", "want", "work", "wrap", "write",
    ])
});

static IRREGULAR_VERBS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("sent", "send"),
        ("wrote", "write"),
        ("written", "write"),
        ("took", "take"),
        ("taken", "take"),
        ("made", "make"),
        ("gave", "give"),
        ("given", "give"),
        ("got", "get"),
        ("gotten", "get"),
        ("ran", "run"),
        ("led", "lead"),
        ("met", "meet"),
        ("went", "go"),
        ("gone", "go"),
        ("came", "come"),
        ("found", "find"),
        ("thought", "think"),
        ("knew", "know"),
        ("known", "know"),
        ("told", "tell"),
        ("said", "say"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("sold", "sell"),
        ("began", "begin"),
        ("begun", "begin"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("drew", "draw"),
        ("drawn", "draw"),
        ("forgot", "forget"),
        ("forgotten", "forget"),
        ("held", "hold"),
        ("left", "leave"),
        ("paid", "pay"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("spent", "spend"),
        ("taught", "teach"),
        ("understood", "understand"),
        ("built", "build"),
        ("kept", "keep"),
        ("shown", "show"),
        ("saw", "see"),
        ("seen", "see"),
    ]
    .into_iter()
    .collect()
});

/// Plural nouns that look like third-person verbs; nouns unless a subject
/// or auxiliary precedes them.
static NOUN_PREFERRED: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    set(&[
        "notes", "minutes", "items", "tasks", "updates", "reports", "results", "slides", "plans",
        "changes", "docs", "files", "emails", "calls", "reviews", "designs", "tests", "orders",
        "records", "requests", "releases", "lists", "books", "flags", "lines",
    ])
});

/// How a word relates to the verb lexicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerbForm {
    Base,
    /// Third-person singular, "-s"/"-es".
    ThirdPerson,
    /// Past tense or participle, "-ed" or irregular.
    Past,
    /// Present participle or gerund, "-ing".
    Progressive,
}

/// Classify `word` (lower-cased) against the verb lexicon.
pub fn verb_form(word: &str) -> Option<VerbForm> {
    if VERBS.contains(word) {
        return Some(VerbForm::Base);
    }
    if IRREGULAR_VERBS.contains_key(word) {
        return Some(VerbForm::Past);
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return has_verb_stem(stem).then_some(VerbForm::Progressive);
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return VERBS.contains(format!("{stem}y").as_str()).then_some(VerbForm::Past);
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return has_verb_stem(stem).then_some(VerbForm::Past);
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return VERBS.contains(format!("{stem}y").as_str()).then_some(VerbForm::ThirdPerson);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if VERBS.contains(stem) {
            return Some(VerbForm::ThirdPerson);
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        return VERBS.contains(stem).then_some(VerbForm::ThirdPerson);
    }
    None
}

/// An inflection stem: the base itself, the base minus a final 'e'
/// ("finaliz" from "finalize"), or the base plus a doubled consonant
/// ("shipp" from "ship").
fn has_verb_stem(stem: &str) -> bool {
    if stem.is_empty() {
        return false;
    }
    if VERBS.contains(stem) || VERBS.contains(format!("{stem}e").as_str()) {
        return true;
    }
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a == b && !is_vowel(a) => {
            VERBS.contains(&stem[..stem.len() - a.len_utf8()])
        }
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(word)
}

pub fn is_pronoun(word: &str) -> bool {
    PRONOUNS.contains(word)
}

pub fn is_adposition(word: &str) -> bool {
    ADPOSITIONS.contains(word)
}

pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTIONS.contains(word)
}

pub fn is_modal(word: &str) -> bool {
    MODALS.contains(word)
}

/// Modal or non-modal auxiliary.
pub fn is_auxiliary(word: &str) -> bool {
    MODALS.contains(word) || AUXILIARIES.contains(word)
}

pub fn is_light_verb(word: &str) -> bool {
    LIGHT_VERBS.contains(word)
}

pub fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(word)
}

pub fn is_adjective(word: &str) -> bool {
    ADJECTIVES.contains(word)
}

pub fn is_noun_preferred(word: &str) -> bool {
    NOUN_PREFERRED.contains(word)
}

/// Digits (optionally with an ordinal suffix or date separators) or a
/// spelled-out number.
pub fn is_numeral(word: &str) -> bool {
    if NUMBER_WORDS.contains(&word) {
        return true;
    }
    let digits = word.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    !digits.is_empty()
        && digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || matches!(c, '/' | '-' | '.' | ','))
        && matches!(&word[digits.len()..], "" | "st" | "nd" | "rd" | "th" | "k" | "m")
}

// =============================================================================
// Calendar words
// =============================================================================

pub const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Month names and common abbreviations, 1-based.
pub fn month_number(word: &str) -> Option<u32> {
    let month = match word.trim_end_matches('.') {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

pub fn is_weekday(word: &str) -> bool {
    WEEKDAYS.contains(&word)
}

/// Titles written before a name ("Dr", "Ms."). Case-insensitive.
pub fn is_honorific(word: &str) -> bool {
    matches!(
        word.trim_end_matches('.').to_lowercase().as_str(),
        "mr" | "mrs" | "ms" | "mx" | "dr" | "prof" | "sir"
    )
}

/// Capitalized words that are commonly false-positive person names.
/// Case-sensitive.
pub fn is_common_word(s: &str) -> bool {
    matches!(
        s,
        "The"
            | "This"
            | "That"
            | "These"
            | "Those"
            | "There"
            | "Here"
            | "When"
            | "Where"
            | "What"
            | "Which"
            | "They"
            | "Team"
            | "Meeting"
            | "Notes"
            | "Agenda"
            | "Action"
            | "Actions"
            | "Items"
            | "Item"
            | "Thanks"
            | "Everyone"
            | "All"
            | "Attendees"
            | "Summary"
            | "Decision"
            | "Decisions"
            | "Status"
            | "Update"
            | "Updates"
            | "Budget"
            | "Project"
            | "Sprint"
            | "Roadmap"
            | "Engineering"
            | "Marketing"
            | "Sales"
            | "Finance"
            | "Legal"
            | "Ops"
            | "Today"
            | "Tomorrow"
            | "Yesterday"
            | "Tonight"
            | "Monday"
            | "Tuesday"
            | "Wednesday"
            | "Thursday"
            | "Friday"
            | "Saturday"
            | "Sunday"
            | "January"
            | "February"
            | "March"
            | "April"
            | "May"
            | "June"
            | "July"
            | "August"
            | "September"
            | "October"
            | "November"
            | "December"
    )
}
