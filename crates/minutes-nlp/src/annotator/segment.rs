//! Sentence segmentation and tokenization.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•+]|\d{1,3}[.)])\s+").expect("Invalid list marker regex")
});

/// Words that end in '.' without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "approx",
    "dept", "inc", "ltd", "co", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

/// Split `text` into trimmed sentence slices, in source order.
///
/// Line breaks always end a sentence. Within a line a sentence ends at
/// `.`, `!` or `?` followed by whitespace or the end of the line, unless the
/// word before the period is a known abbreviation or a single initial.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        let body = match LIST_MARKER.find(line) {
            Some(marker) => &line[marker.end()..],
            None => line,
        };
        split_line(body, &mut sentences);
    }
    sentences
}

fn split_line<'a>(line: &'a str, out: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut start = 0;

    for (k, &(i, c)) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if chars.get(k + 1).is_some_and(|&(_, next)| !next.is_whitespace()) {
            continue;
        }
        if c == '.' && ends_with_abbreviation(&line[start..i]) {
            continue;
        }
        let end = i + c.len_utf8();
        push_trimmed(&line[start..end], out);
        start = end;
    }
    push_trimmed(&line[start..], out);
}

fn push_trimmed<'a>(span: &'a str, out: &mut Vec<&'a str>) {
    let trimmed = span.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let Some(word) = prefix.split_whitespace().last() else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return first.is_uppercase();
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// Split a sentence into token byte ranges.
///
/// A word is a run of letters and digits, joined across a single internal
/// `'`, `’`, `-`, `.` or `/` ("O'Neil", "follow-up", "e.g", "9/26",
/// "2025-10-01"). Every other non-space character is its own token.
pub fn tokenize(sentence: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = sentence.char_indices().collect();
    let byte_at = |k: usize| chars.get(k).map_or(sentence.len(), |&(b, _)| b);
    let mut tokens = Vec::new();
    let mut k = 0;

    while k < chars.len() {
        let (start, c) = chars[k];
        if c.is_whitespace() {
            k += 1;
            continue;
        }
        if !c.is_alphanumeric() {
            tokens.push(start..byte_at(k + 1));
            k += 1;
            continue;
        }

        let mut j = k + 1;
        while j < chars.len() {
            let cj = chars[j].1;
            if cj.is_alphanumeric() {
                j += 1;
            } else if is_joiner(cj) && chars.get(j + 1).is_some_and(|&(_, n)| n.is_alphanumeric()) {
                j += 2;
            } else {
                break;
            }
        }
        tokens.push(start..byte_at(j));
        k = j;
    }
    tokens
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '’' | '-' | '.' | '/')
}
