//! Fuzzy date parser for free-form English date phrases.
//!
//! The whole phrase must be a date expression; anything else is `None`.
//! Relative phrases resolve against the supplied base date.

use std::sync::LazyLock;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use minutes_core::DateParser;
use regex::{Captures, Regex};
use tracing::trace;

use crate::annotator::lexicon;

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";
const WEEKDAYS: &str =
    "monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|wed|thurs|thur|thu|fri|sat|sun";
const COUNTS: &str = r"\d+|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve";

// =============================================================================
// Compiled patterns (compiled once, reused across calls)
// =============================================================================

struct Patterns {
    iso: Regex,
    us: Regex,
    weekday: Regex,
    relative_period: Regex,
    offset: Regex,
    end_of_period: Regex,
    end_of_month: Regex,
    month_day: Regex,
    day_month: Regex,
    month_year: Regex,
    month_only: Regex,
    ordinal: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| {
    let mk = |pattern: String| Regex::new(&pattern).expect("Invalid fuzzy date regex");
    Patterns {
        iso: mk(r"^(?P<y>\d{4})[-/](?P<m>\d{1,2})[-/](?P<d>\d{1,2})$".to_string()),
        us: mk(r"^(?P<m>\d{1,2})/(?P<d>\d{1,2})(?:/(?P<y>\d{4}|\d{2}))?$".to_string()),
        weekday: mk(format!(
            r"^(?:(?P<mod>next|this|coming|last)\s+)?(?P<wd>{WEEKDAYS})$"
        )),
        relative_period: mk(
            r"^(?P<mod>next|this|coming|last)\s+(?P<unit>week|month|year)$".to_string(),
        ),
        offset: mk(format!(
            r"^(?P<in>in\s+)?(?P<n>{COUNTS})\s+(?P<unit>day|week|month|year)s?(?:\s+(?P<dir>from\s+now|later|ago))?$"
        )),
        end_of_period: mk(r"^end\s+of\s+(?:the\s+)?(?P<unit>day|week|month|year)$".to_string()),
        end_of_month: mk(format!(r"^end\s+of\s+(?P<month>{MONTHS})$")),
        month_day: mk(format!(
            r"^(?P<month>{MONTHS})\.?\s+(?P<d>\d{{1,2}})(?:st|nd|rd|th)?(?:,?\s+(?P<y>\d{{4}}))?$"
        )),
        day_month: mk(format!(
            r"^(?P<d>\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?(?P<month>{MONTHS})\.?(?:,?\s+(?P<y>\d{{4}}))?$"
        )),
        month_year: mk(format!(r"^(?P<month>{MONTHS})\.?,?\s+(?P<y>\d{{4}})$")),
        month_only: mk(format!(r"^(?P<month>{MONTHS})$")),
        ordinal: mk(r"^(?P<d>\d{1,2})(?:st|nd|rd|th)$".to_string()),
    }
});

// =============================================================================
// Parser
// =============================================================================

/// The base date and bias a phrase resolves against.
#[derive(Clone, Copy, Debug)]
struct Anchor {
    base: NaiveDate,
    prefer_future: bool,
}

type Form = fn(&str, Anchor) -> Option<NaiveDate>;

const FORMS: [Form; 13] = [
    keyword,
    iso,
    us_slash,
    weekday,
    relative_period,
    offset,
    end_of_period,
    end_of_month,
    month_day,
    day_month,
    month_year,
    month_only,
    ordinal,
];

/// Rule-based [`DateParser`] for English date phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyDateParser;

impl FuzzyDateParser {
    pub fn new() -> Self {
        Self
    }
}

impl DateParser for FuzzyDateParser {
    fn parse(&self, phrase: &str, base: NaiveDate, prefer_future: bool) -> Option<NaiveDate> {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return None;
        }
        let anchor = Anchor {
            base,
            prefer_future,
        };
        let date = FORMS.iter().find_map(|form| form(&normalized, anchor));
        trace!(phrase = %normalized, prefer_future, ?date, "Fuzzy date parse");
        date
    }
}

/// Lower-case, trim surrounding punctuation, collapse whitespace and drop a
/// leading "on" / "the".
fn normalize(phrase: &str) -> String {
    let lower = phrase.to_lowercase();
    let trimmed = lower.trim_matches(|c: char| !c.is_alphanumeric());
    let mut words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() > 1 && words[0] == "on" {
        words.remove(0);
    }
    if words.len() > 1 && words[0] == "the" {
        words.remove(0);
    }
    words.join(" ")
}

// =============================================================================
// Forms
// =============================================================================

fn keyword(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let base = anchor.base;
    match phrase {
        "today" | "tonight" | "now" | "eod" | "end of day" | "end of the day" | "end of today" => {
            Some(base)
        }
        "tomorrow" | "tmrw" => base.succ_opt(),
        "day after tomorrow" => base.checked_add_days(Days::new(2)),
        "yesterday" => base.pred_opt(),
        "day before yesterday" => base.checked_sub_days(Days::new(2)),
        _ => None,
    }
}

fn iso(phrase: &str, _anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.iso.captures(phrase)?;
    NaiveDate::from_ymd_opt(num(&caps, "y")?, num(&caps, "m")?, num(&caps, "d")?)
}

fn us_slash(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.us.captures(phrase)?;
    let month: u32 = num(&caps, "m")?;
    let day: u32 = num(&caps, "d")?;
    match caps.name("y") {
        Some(y) => {
            let year: i32 = y.as_str().parse().ok()?;
            let year = if y.as_str().len() == 2 { 2000 + year } else { year };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        None => with_implicit_year(anchor, |year| NaiveDate::from_ymd_opt(year, month, day)),
    }
}

fn weekday(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.weekday.captures(phrase)?;
    let target = weekday_from_name(&caps["wd"])?;
    let base = anchor.base;
    let ahead = (target.num_days_from_monday() + 7 - base.weekday().num_days_from_monday()) % 7;
    let strictly_ahead = if ahead == 0 { 7 } else { ahead };

    match caps.name("mod").map(|m| m.as_str()) {
        Some("next") => base.checked_add_days(Days::new(strictly_ahead.into())),
        Some("this" | "coming") => base.checked_add_days(Days::new(ahead.into())),
        Some(_) => {
            let behind = (7 - ahead) % 7;
            let strictly_behind = if behind == 0 { 7 } else { behind };
            base.checked_sub_days(Days::new(strictly_behind.into()))
        }
        None if anchor.prefer_future => base.checked_add_days(Days::new(strictly_ahead.into())),
        None => {
            // The named day of the current Monday-start week.
            let monday = base.checked_sub_days(Days::new(base.weekday().num_days_from_monday().into()))?;
            monday.checked_add_days(Days::new(target.num_days_from_monday().into()))
        }
    }
}

fn relative_period(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.relative_period.captures(phrase)?;
    let base = anchor.base;
    let direction = match &caps["mod"] {
        "this" => return Some(base),
        "last" => -1,
        _ => 1,
    };
    let unit = match &caps["unit"] {
        "week" => Unit::Week,
        "month" => Unit::Month,
        _ => Unit::Year,
    };
    unit.shift(base, 1, direction)
}

fn offset(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.offset.captures(phrase)?;
    let n = count(&caps["n"])?;
    let unit = match &caps["unit"] {
        "day" => Unit::Day,
        "week" => Unit::Week,
        "month" => Unit::Month,
        _ => Unit::Year,
    };
    let direction = match caps.name("dir").map(|d| d.as_str()) {
        Some("ago") => -1,
        Some(_) => 1,
        None if caps.name("in").is_some() || anchor.prefer_future => 1,
        None => -1,
    };
    unit.shift(anchor.base, n, direction)
}

fn end_of_period(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.end_of_period.captures(phrase)?;
    let base = anchor.base;
    match &caps["unit"] {
        "day" => Some(base),
        "week" => {
            base.checked_add_days(Days::new((6 - base.weekday().num_days_from_monday()).into()))
        }
        "month" => last_day_of_month(base.year(), base.month()),
        _ => NaiveDate::from_ymd_opt(base.year(), 12, 31),
    }
}

fn end_of_month(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.end_of_month.captures(phrase)?;
    let month = lexicon::month_number(&caps["month"])?;
    with_implicit_year(anchor, |year| last_day_of_month(year, month))
}

fn month_day(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.month_day.captures(phrase)?;
    calendar_date(&caps, anchor)
}

fn day_month(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.day_month.captures(phrase)?;
    calendar_date(&caps, anchor)
}

fn month_year(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.month_year.captures(phrase)?;
    let month = lexicon::month_number(&caps["month"])?;
    clamped(num(&caps, "y")?, month, anchor.base.day())
}

fn month_only(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.month_only.captures(phrase)?;
    let month = lexicon::month_number(&caps["month"])?;
    with_implicit_year(anchor, |year| clamped(year, month, anchor.base.day()))
}

/// A bare day of month; rolls into the next month rather than the next year.
///
/// With `prefer_future`, a day the base month lacks ("the 31st" in
/// September) also lands in the next month.
fn ordinal(phrase: &str, anchor: Anchor) -> Option<NaiveDate> {
    let caps = PATTERNS.ordinal.captures(phrase)?;
    let day: u32 = num(&caps, "d")?;
    let base = anchor.base;
    let next_month = || {
        base.with_day(1)?
            .checked_add_months(Months::new(1))?
            .with_day(day)
    };
    match base.with_day(day) {
        Some(date) if anchor.prefer_future && date < base => next_month(),
        Some(date) => Some(date),
        None if anchor.prefer_future => next_month(),
        None => None,
    }
}

// =============================================================================
// Helpers
// =============================================================================

#[derive(Clone, Copy, Debug)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn shift(self, base: NaiveDate, n: u32, direction: i32) -> Option<NaiveDate> {
        let forward = direction > 0;
        match self {
            Unit::Day | Unit::Week => {
                let days = if matches!(self, Unit::Week) {
                    n.checked_mul(7)?
                } else {
                    n
                };
                let days = Days::new(days.into());
                if forward {
                    base.checked_add_days(days)
                } else {
                    base.checked_sub_days(days)
                }
            }
            Unit::Month | Unit::Year => {
                let months = if matches!(self, Unit::Year) {
                    n.checked_mul(12)?
                } else {
                    n
                };
                if forward {
                    base.checked_add_months(Months::new(months))
                } else {
                    base.checked_sub_months(Months::new(months))
                }
            }
        }
    }
}

/// Explicit-or-implicit year calendar date from `month`, `d` and optional
/// `y` captures.
fn calendar_date(caps: &Captures<'_>, anchor: Anchor) -> Option<NaiveDate> {
    let month = lexicon::month_number(&caps["month"])?;
    let day: u32 = num(caps, "d")?;
    match caps.name("y") {
        Some(_) => NaiveDate::from_ymd_opt(num(caps, "y")?, month, day),
        None => with_implicit_year(anchor, |year| NaiveDate::from_ymd_opt(year, month, day)),
    }
}

/// Build a date in the base year; with `prefer_future`, one already past
/// moves to the following year.
fn with_implicit_year(
    anchor: Anchor,
    make: impl Fn(i32) -> Option<NaiveDate>,
) -> Option<NaiveDate> {
    let year = anchor.base.year();
    let date = make(year)?;
    if anchor.prefer_future && date < anchor.base {
        make(year + 1)
    } else {
        Some(date)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// `day` in the given month, clamped to the month's last day.
fn clamped(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    last.with_day(day.min(last.day()))
}

fn num<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

fn count(word: &str) -> Option<u32> {
    let n = match word {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        digits => return digits.parse().ok(),
    };
    Some(n)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let day = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tues" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thurs" | "thur" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Wednesday.
    fn base() -> NaiveDate {
        date(2025, 9, 24)
    }

    fn future(phrase: &str) -> Option<NaiveDate> {
        FuzzyDateParser.parse(phrase, base(), true)
    }

    fn plain(phrase: &str) -> Option<NaiveDate> {
        FuzzyDateParser.parse(phrase, base(), false)
    }

    #[test]
    fn test_keywords() {
        assert_eq!(plain("today"), Some(base()));
        assert_eq!(plain("EOD"), Some(base()));
        assert_eq!(plain("end of the day"), Some(base()));
        assert_eq!(plain("Tomorrow."), Some(date(2025, 9, 25)));
        assert_eq!(plain("the day after tomorrow"), Some(date(2025, 9, 26)));
        assert_eq!(plain("yesterday"), Some(date(2025, 9, 23)));
        assert_eq!(plain("day before yesterday"), Some(date(2025, 9, 22)));
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(plain("2025-10-01"), Some(date(2025, 10, 1)));
        assert_eq!(plain("2025/10/01"), Some(date(2025, 10, 1)));
        assert_eq!(plain("10/3"), Some(date(2025, 10, 3)));
        assert_eq!(plain("10/3/26"), Some(date(2026, 10, 3)));
        assert_eq!(plain("10/3/2027"), Some(date(2027, 10, 3)));
        assert_eq!(future("3/1"), Some(date(2026, 3, 1)));
        assert_eq!(plain("3/1"), Some(date(2025, 3, 1)));
    }

    #[test]
    fn test_impossible_dates() {
        assert_eq!(plain("2025-02-30"), None);
        assert_eq!(plain("2/30"), None);
        assert_eq!(plain("september 31"), None);
        assert_eq!(plain("31st"), None);
    }

    #[test]
    fn test_bare_weekday_bias() {
        assert_eq!(future("friday"), Some(date(2025, 9, 26)));
        assert_eq!(plain("friday"), Some(date(2025, 9, 26)));
        assert_eq!(future("monday"), Some(date(2025, 9, 29)));
        assert_eq!(plain("monday"), Some(date(2025, 9, 22)));
        assert_eq!(future("wednesday"), Some(date(2025, 10, 1)));
        assert_eq!(plain("Wednesday"), Some(base()));
        assert_eq!(plain("on Fri"), Some(date(2025, 9, 26)));
    }

    #[test]
    fn test_modified_weekdays() {
        assert_eq!(plain("next wednesday"), Some(date(2025, 10, 1)));
        assert_eq!(plain("this wednesday"), Some(base()));
        assert_eq!(plain("coming monday"), Some(date(2025, 9, 29)));
        assert_eq!(plain("last friday"), Some(date(2025, 9, 19)));
        assert_eq!(plain("last wednesday"), Some(date(2025, 9, 17)));
    }

    #[test]
    fn test_relative_periods() {
        assert_eq!(plain("next week"), Some(date(2025, 10, 1)));
        assert_eq!(plain("this week"), Some(base()));
        assert_eq!(plain("next month"), Some(date(2025, 10, 24)));
        assert_eq!(plain("last year"), Some(date(2024, 9, 24)));
    }

    #[test]
    fn test_offsets() {
        assert_eq!(plain("in 3 days"), Some(date(2025, 9, 27)));
        assert_eq!(plain("two weeks from now"), Some(date(2025, 10, 8)));
        assert_eq!(plain("3 days ago"), Some(date(2025, 9, 21)));
        assert_eq!(future("a month"), Some(date(2025, 10, 24)));
        assert_eq!(plain("a month"), Some(date(2025, 8, 24)));
        assert_eq!(
            FuzzyDateParser.parse("in 1 month", date(2025, 1, 31), false),
            Some(date(2025, 2, 28))
        );
        assert_eq!(plain("in 99999999999 days"), None);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(plain("october"), Some(date(2025, 10, 24)));
        assert_eq!(plain("Sept"), Some(date(2025, 9, 24)));
        assert_eq!(plain("march"), Some(date(2025, 3, 24)));
        assert_eq!(future("march"), Some(date(2026, 3, 24)));
        assert_eq!(
            FuzzyDateParser.parse("february", date(2025, 1, 31), false),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_month_day_forms() {
        assert_eq!(plain("october 3rd"), Some(date(2025, 10, 3)));
        assert_eq!(plain("October 3, 2026"), Some(date(2026, 10, 3)));
        assert_eq!(plain("oct. 3"), Some(date(2025, 10, 3)));
        assert_eq!(plain("3rd of october"), Some(date(2025, 10, 3)));
        assert_eq!(future("15 march"), Some(date(2026, 3, 15)));
        assert_eq!(plain("15 march"), Some(date(2025, 3, 15)));
        assert_eq!(plain("march 2026"), Some(date(2026, 3, 24)));
    }

    #[test]
    fn test_end_of_forms() {
        assert_eq!(plain("end of october"), Some(date(2025, 10, 31)));
        assert_eq!(future("end of march"), Some(date(2026, 3, 31)));
        assert_eq!(plain("the end of the month"), Some(date(2025, 9, 30)));
        assert_eq!(plain("end of week"), Some(date(2025, 9, 28)));
        assert_eq!(plain("end of year"), Some(date(2025, 12, 31)));
    }

    #[test]
    fn test_bare_ordinal_rolls_to_next_month() {
        assert_eq!(future("the 3rd"), Some(date(2025, 10, 3)));
        assert_eq!(plain("the 3rd"), Some(date(2025, 9, 3)));
        assert_eq!(future("the 30th"), Some(date(2025, 9, 30)));
    }

    #[test]
    fn test_ordinal_missing_from_base_month() {
        assert_eq!(future("the 31st"), Some(date(2025, 10, 31)));
        assert_eq!(plain("the 31st"), None);
        assert_eq!(
            FuzzyDateParser.parse("the 30th", date(2025, 2, 10), true),
            Some(date(2025, 3, 30))
        );
        assert_eq!(future("the 32nd"), None);
    }

    #[test]
    fn test_unparseable_phrases() {
        assert_eq!(plain(""), None);
        assert_eq!(plain("  ,. "), None);
        assert_eq!(plain("the launch review"), None);
        assert_eq!(plain("Alice owns the roadmap."), None);
        assert_eq!(plain("next"), None);
        assert_eq!(plain("the"), None);
    }
}
