//! DATE and PERSON span recognition over a tagged sentence.
//!
//! DATE spans are found first; PERSON spans are maximal runs of name-shaped
//! proper nouns outside them.

use std::ops::Range;
use std::sync::LazyLock;

use minutes_core::{EntityLabel, PosTag};
use regex::Regex;

use super::lexicon;

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{4}[-/]\d{1,2}[-/]\d{1,2}|\d{1,2}/\d{1,2}(?:/\d{2}|/\d{4})?)$")
        .expect("Invalid numeric date regex")
});

const MODIFIERS: &[&str] = &["next", "this", "coming", "last"];
const PERIODS: &[&str] = &["day", "week", "month", "year"];
const DAY_WORDS: &[&str] = &["today", "tomorrow", "yesterday", "tonight"];

/// Recognize entity spans as token index ranges, in sentence order.
pub fn recognize(words: &[&str], tags: &[PosTag]) -> Vec<(EntityLabel, Range<usize>)> {
    let lowers: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    let mut dates = Vec::new();
    let mut i = 0;
    while i < words.len() {
        match date_len(words, &lowers, i) {
            Some(len) => {
                dates.push(i..i + len);
                i += len;
            }
            None => i += 1,
        }
    }

    let in_date = |k: usize| dates.iter().any(|r| r.contains(&k));
    let mut people = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let introduced = i > 0 && tags[i - 1] == PosTag::Determiner;
        if in_date(i) || introduced || !is_name_token(words[i], tags[i]) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < words.len()
            && !is_possessive(words[j - 1])
            && !in_date(j)
            && is_name_token(words[j], tags[j])
        {
            j += 1;
        }
        people.push(i..j);
        i = j;
    }

    let mut spans: Vec<(EntityLabel, Range<usize>)> = dates
        .into_iter()
        .map(|r| (EntityLabel::Date, r))
        .chain(people.into_iter().map(|r| (EntityLabel::Person, r)))
        .collect();
    spans.sort_by_key(|(_, r)| r.start);
    spans
}

/// Strip a trailing possessive "'s".
pub fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word)
}

fn is_possessive(word: &str) -> bool {
    strip_possessive(word).len() != word.len()
}

fn is_name_token(word: &str, tag: PosTag) -> bool {
    if tag != PosTag::ProperNoun {
        return false;
    }
    let name = strip_possessive(word);
    let mut chars = name.chars();
    chars.next().is_some_and(char::is_uppercase)
        && name.chars().any(char::is_lowercase)
        && chars.all(|c| c.is_alphabetic() || matches!(c, '\'' | '’' | '-' | '.'))
        && !lexicon::is_common_word(name)
        && !lexicon::is_honorific(name)
}

// =============================================================================
// DATE patterns
// =============================================================================

fn date_len(words: &[&str], lowers: &[String], i: usize) -> Option<usize> {
    let at = |k: usize| lowers.get(k).map(String::as_str);
    let first = at(i)?;

    // end of (the) day|week|month|year|<month>
    if first == "end" && at(i + 1) == Some("of") {
        let k = if at(i + 2) == Some("the") { i + 3 } else { i + 2 };
        let target = at(k)?;
        if PERIODS.contains(&target) || lexicon::month_number(target).is_some() {
            return Some(k + 1 - i);
        }
        return None;
    }

    if MODIFIERS.contains(&first) {
        let next = at(i + 1)?;
        if lexicon::is_weekday(next) || PERIODS[1..].contains(&next) {
            return Some(2);
        }
        return None;
    }

    if DAY_WORDS.contains(&first) || lexicon::is_weekday(first) || NUMERIC_DATE.is_match(first) {
        return Some(1);
    }

    if let Some(len) = day_of_month_len(lowers, i) {
        return Some(len);
    }

    month_len(words, lowers, i)
}

/// `(the) <day> (of) <month> (<year>)`, or `the <ordinal>` alone.
fn day_of_month_len(lowers: &[String], i: usize) -> Option<usize> {
    let at = |k: usize| lowers.get(k).map(String::as_str);
    let has_the = at(i) == Some("the");
    let day_at = if has_the { i + 1 } else { i };
    let day_word = at(day_at)?;
    day_number(day_word)?;

    let mut k = day_at + 1;
    if at(k) == Some("of") {
        k += 1;
    }
    if at(k).and_then(lexicon::month_number).is_some() {
        k += 1;
        if at(k).is_some_and(is_year) {
            k += 1;
        }
        return Some(k - i);
    }

    let ordinal = day_word.ends_with(|c: char| c.is_ascii_alphabetic());
    (has_the && ordinal).then_some(2)
}

/// `<Month> (<day>) (,) (<year>)`. Lower-case month names and a bare "May"
/// are too ambiguous on their own.
fn month_len(words: &[&str], lowers: &[String], i: usize) -> Option<usize> {
    let at = |k: usize| lowers.get(k).map(String::as_str);
    lexicon::month_number(at(i)?)?;

    let mut k = i + 1;
    let mut qualified = false;
    if at(k).is_some_and(|w| day_number(w).is_some()) {
        k += 1;
        qualified = true;
    }
    if at(k) == Some(",") && at(k + 1).is_some_and(is_year) {
        k += 2;
        qualified = true;
    } else if at(k).is_some_and(is_year) {
        k += 1;
        qualified = true;
    }

    let capitalized = words[i].chars().next().is_some_and(char::is_uppercase);
    let ambiguous = lowers[i] == "may";
    (qualified || (capitalized && !ambiguous)).then_some(k - i)
}

fn day_number(word: &str) -> Option<u32> {
    let digits = word
        .strip_suffix("st")
        .or_else(|| word.strip_suffix("nd"))
        .or_else(|| word.strip_suffix("rd"))
        .or_else(|| word.strip_suffix("th"))
        .unwrap_or(word);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|d| (1..=31).contains(d))
}

fn is_year(word: &str) -> bool {
    word.len() == 4 && word.chars().all(|c| c.is_ascii_digit())
}
