//! Deterministic deadline matcher.
//!
//! An ordered cascade of regex rules over the sentence text. The first rule
//! that matches *and* resolves to a date wins; a rule whose phrase the fuzzy
//! parser cannot resolve hands over to the next rule.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use minutes_core::DateParser;
use regex::Regex;

use crate::calendar::{self, WeekdayModifier};

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

// =============================================================================
// Compiled patterns (compiled once, reused across calls)
// =============================================================================

static RELATIVE_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<mod>next|this|coming)\s+(?P<wd>monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
    .expect("Invalid relative weekday regex")
});

static IN_N_UNITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin\s+(?P<n>\d+)\s+(?P<unit>days?|weeks?|months?)\b")
        .expect("Invalid in-N-units regex")
});

static DAY_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?P<tok>today|tomorrow|yesterday)\b").expect("Invalid day keyword regex")
});

static BEFORE_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?P<kw>before|by)\s+(?P<month>{MONTHS})\b"))
        .expect("Invalid before-month regex")
});

static END_OF_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\bend\s+of\s+(?P<month>{MONTHS})\b"))
        .expect("Invalid end-of-month regex")
});

static BEFORE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:before|by)\s+(?P<time>[\w\s,.-]+)").expect("Invalid before-phrase regex")
});

// =============================================================================
// Cascade
// =============================================================================

/// The rules of the cascade, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRule {
    /// `next|this|coming <weekday>`
    RelativeWeekday,
    /// `in <N> day(s)|week(s)|month(s)`
    InNUnits,
    /// `today|tomorrow|yesterday`
    DayKeyword,
    /// `before|by <month>`, same-year policy
    BeforeMonth,
    /// `end of <month>`, next-year rollover policy
    EndOfMonth,
    /// `before|by <free text>` handed to the fuzzy parser
    BeforePhrase,
}

impl DateRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RelativeWeekday => "relative_weekday",
            Self::InNUnits => "in_n_units",
            Self::DayKeyword => "day_keyword",
            Self::BeforeMonth => "before_month",
            Self::EndOfMonth => "end_of_month",
            Self::BeforePhrase => "before_phrase",
        }
    }
}

/// A date produced by the cascade, tagged with the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateMatch {
    pub rule: DateRule,
    pub date: NaiveDate,
}

type RuleFn = fn(&str, NaiveDate, &dyn DateParser) -> Option<NaiveDate>;

const CASCADE: [(DateRule, RuleFn); 6] = [
    (DateRule::RelativeWeekday, relative_weekday),
    (DateRule::InNUnits, in_n_units),
    (DateRule::DayKeyword, day_keyword),
    (DateRule::BeforeMonth, before_month),
    (DateRule::EndOfMonth, end_of_month),
    (DateRule::BeforePhrase, before_phrase),
];

/// Run the cascade over `text`; `None` when no rule produces a date.
pub fn match_date(text: &str, reference: NaiveDate, parser: &dyn DateParser) -> Option<DateMatch> {
    CASCADE.iter().find_map(|(rule, apply)| {
        apply(text, reference, parser).map(|date| DateMatch { rule: *rule, date })
    })
}

fn relative_weekday(text: &str, reference: NaiveDate, _parser: &dyn DateParser) -> Option<NaiveDate> {
    let caps = RELATIVE_WEEKDAY.captures(text)?;
    let target = calendar::weekday_from_name(&caps["wd"])?;
    calendar::weekday_date(reference, target, WeekdayModifier::from_word(&caps["mod"]))
}

fn in_n_units(text: &str, reference: NaiveDate, _parser: &dyn DateParser) -> Option<NaiveDate> {
    let caps = IN_N_UNITS.captures(text)?;
    let n: u32 = caps["n"].parse().ok()?;
    calendar::in_n(reference, n, &caps["unit"])
}

fn day_keyword(text: &str, reference: NaiveDate, _parser: &dyn DateParser) -> Option<NaiveDate> {
    let caps = DAY_KEYWORD.captures(text)?;
    match caps["tok"].to_ascii_lowercase().as_str() {
        "today" => Some(reference),
        "tomorrow" => reference.succ_opt(),
        "yesterday" => reference.pred_opt(),
        _ => None,
    }
}

/// Month number of a month name, resolved through the fuzzy parser.
fn resolve_month(name: &str, reference: NaiveDate, parser: &dyn DateParser) -> Option<u32> {
    parser
        .parse(&name.to_ascii_lowercase(), reference, false)
        .map(|d| d.month())
}

fn before_month(text: &str, reference: NaiveDate, parser: &dyn DateParser) -> Option<NaiveDate> {
    let caps = BEFORE_MONTH.captures(text)?;
    let month = resolve_month(&caps["month"], reference, parser)?;
    // Same-year policy: a month already past stays in the reference year,
    // unlike `end_of_month`.
    let year = reference.year();
    if caps["kw"].eq_ignore_ascii_case("before") {
        NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
    } else {
        calendar::last_day_of_month(year, month)
    }
}

fn end_of_month(text: &str, reference: NaiveDate, parser: &dyn DateParser) -> Option<NaiveDate> {
    let caps = END_OF_MONTH.captures(text)?;
    let month = resolve_month(&caps["month"], reference, parser)?;
    let year = if month >= reference.month() {
        reference.year()
    } else {
        reference.year() + 1
    };
    calendar::last_day_of_month(year, month)
}

fn before_phrase(text: &str, reference: NaiveDate, parser: &dyn DateParser) -> Option<NaiveDate> {
    let caps = BEFORE_PHRASE.captures(text)?;
    let phrase = caps["time"].trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';'));
    if phrase.is_empty() {
        return None;
    }
    parser.parse(phrase, reference, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Knows month names (day 1 of that month in the base year) and a
    /// couple of canned phrases; everything else is unparseable.
    struct StubParser;

    impl DateParser for StubParser {
        fn parse(&self, phrase: &str, base: NaiveDate, _prefer_future: bool) -> Option<NaiveDate> {
            let month = match phrase {
                "january" | "jan" => 1,
                "march" => 3,
                "september" | "sept" => 9,
                "october" | "oct" => 10,
                "december" => 12,
                "the launch review" => return Some(date(2025, 10, 15)),
                "friday" => return Some(date(2025, 9, 26)),
                _ => return None,
            };
            NaiveDate::from_ymd_opt(base.year(), month, 1)
        }
    }

    struct NullParser;

    impl DateParser for NullParser {
        fn parse(&self, _: &str, _: NaiveDate, _: bool) -> Option<NaiveDate> {
            None
        }
    }

    fn run(text: &str, reference: NaiveDate) -> Option<DateMatch> {
        match_date(text, reference, &StubParser)
    }

    // 2025-09-24 is a Wednesday.
    fn wed() -> NaiveDate {
        date(2025, 9, 24)
    }

    #[test]
    fn test_relative_weekday() {
        let m = run("Alice will finalize the report next Friday.", wed()).unwrap();
        assert_eq!(m.rule, DateRule::RelativeWeekday);
        assert_eq!(m.date, date(2025, 9, 26));
    }

    #[test]
    fn test_this_weekday_same_day() {
        let m = run("Ship it this Wednesday", wed()).unwrap();
        assert_eq!(m.date, wed());
    }

    #[test]
    fn test_in_n_units() {
        let m = run("Ping the vendor in 3 days.", wed()).unwrap();
        assert_eq!(m.rule, DateRule::InNUnits);
        assert_eq!(m.date, date(2025, 9, 27));

        let m = run("Revisit IN 2 Weeks", wed()).unwrap();
        assert_eq!(m.date, date(2025, 10, 8));

        let m = run("Renew the lease in 1 month", date(2025, 1, 31)).unwrap();
        assert_eq!(m.date, date(2025, 2, 28));
    }

    #[test]
    fn test_in_n_with_overflowing_number_falls_through() {
        assert_eq!(run("Do it in 99999999999999999999 days", wed()), None);
    }

    #[test]
    fn test_day_keywords() {
        assert_eq!(run("Send it today", wed()).unwrap().date, wed());
        assert_eq!(
            run("Send it Tomorrow", wed()).unwrap().date,
            date(2025, 9, 25)
        );
        let m = run("We should have sent it yesterday", wed()).unwrap();
        assert_eq!(m.rule, DateRule::DayKeyword);
        assert_eq!(m.date, date(2025, 9, 23));
    }

    #[test]
    fn test_before_month_is_day_before_month_starts() {
        let m = run("Deploy before October.", wed()).unwrap();
        assert_eq!(m.rule, DateRule::BeforeMonth);
        assert_eq!(m.date, date(2025, 9, 30));
    }

    #[test]
    fn test_by_month_is_last_day_of_month() {
        let m = run("Deploy by October.", wed()).unwrap();
        assert_eq!(m.rule, DateRule::BeforeMonth);
        assert_eq!(m.date, date(2025, 10, 31));
    }

    #[test]
    fn test_before_month_keeps_reference_year_for_past_month() {
        // Same-year policy: March is already past in September, yet the year
        // does not roll over.
        let m = run("Close the books by March", wed()).unwrap();
        assert_eq!(m.date, date(2025, 3, 31));
    }

    #[test]
    fn test_end_of_month_rolls_into_next_year() {
        let reference = date(2025, 11, 24);
        let m = run("Wrap up by end of October.", reference).unwrap();
        assert_eq!(m.rule, DateRule::EndOfMonth);
        assert_eq!(m.date, date(2026, 10, 31));
    }

    #[test]
    fn test_end_of_month_current_year() {
        let m = run("Budget due end of December", wed()).unwrap();
        assert_eq!(m.date, date(2025, 12, 31));
        let m = run("Budget due end of September", wed()).unwrap();
        assert_eq!(m.date, date(2025, 9, 30));
    }

    #[test]
    fn test_month_abbreviation() {
        let m = run("Finish by Sept", wed()).unwrap();
        assert_eq!(m.date, date(2025, 9, 30));
    }

    #[test]
    fn test_before_phrase_trims_punctuation() {
        let m = run("Circulate notes before the launch review.", wed()).unwrap();
        assert_eq!(m.rule, DateRule::BeforePhrase);
        assert_eq!(m.date, date(2025, 10, 15));
    }

    #[test]
    fn test_before_phrase_unparseable_yields_nothing() {
        assert_eq!(run("Stop by the office, please.", wed()), None);
    }

    #[test]
    fn test_rule_order_weekday_beats_keyword() {
        // Both rule 1 and rule 3 match; rule 1 wins.
        let m = run("Today we agreed: demo next Monday", wed()).unwrap();
        assert_eq!(m.rule, DateRule::RelativeWeekday);
        assert_eq!(m.date, date(2025, 9, 29));
    }

    #[test]
    fn test_rule_order_in_n_beats_before_month() {
        let m = run("Start in 2 days, finish before October", wed()).unwrap();
        assert_eq!(m.rule, DateRule::InNUnits);
    }

    #[test]
    fn test_unresolved_month_falls_through_to_next_rule() {
        // The parser knows no months, so rules 4 and 5 decline and rule 6
        // gets the phrase, which it cannot parse either.
        assert_eq!(match_date("Deploy before October", wed(), &NullParser), None);
    }

    #[test]
    fn test_by_end_of_skips_to_end_of_month_rule() {
        // "by end" is not a month, so rule 4 does not match at all.
        let m = run("Done by end of September", date(2025, 10, 2)).unwrap();
        assert_eq!(m.rule, DateRule::EndOfMonth);
        assert_eq!(m.date, date(2026, 9, 30));
    }

    #[test]
    fn test_no_rule_matches() {
        assert_eq!(run("Alice owns the roadmap.", wed()), None);
        assert_eq!(run("", wed()), None);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(DateRule::RelativeWeekday.as_str(), "relative_weekday");
        assert_eq!(DateRule::BeforePhrase.as_str(), "before_phrase");
    }
}
