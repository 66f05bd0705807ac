//! Calendar arithmetic for relative deadline phrases.
//!
//! Pure day-granularity computations on [`NaiveDate`]; nothing here reads
//! the clock.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Modifier in front of a weekday name ("next Friday", "this Friday").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekdayModifier {
    /// May resolve to the reference date itself.
    This,
    /// Same as `This`.
    Coming,
    /// Never resolves to the reference date; a full week ahead at most.
    Next,
}

impl WeekdayModifier {
    /// Any word other than `this`/`coming` behaves like `next`.
    pub fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "this" => Self::This,
            "coming" => Self::Coming,
            _ => Self::Next,
        }
    }
}

/// Unit of an "in N units" phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    Day,
    Week,
    Month,
}

impl DurationUnit {
    /// Accepts singular and plural forms, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "days" => Some(Self::Day),
            "week" | "weeks" => Some(Self::Week),
            "month" | "months" => Some(Self::Month),
            _ => None,
        }
    }
}

/// Parse a full weekday name, case-insensitively.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Resolve a weekday relative to `reference`.
///
/// `delta = (target - reference.weekday) mod 7`. `This`/`Coming` advance by
/// `delta` (0 keeps the reference date); `Next` advances by `delta`, or by a
/// full week when `delta` is 0. `None` past the end of the calendar.
pub fn weekday_date(
    reference: NaiveDate,
    target: Weekday,
    modifier: WeekdayModifier,
) -> Option<NaiveDate> {
    let delta = (target.num_days_from_monday() + 7 - reference.weekday().num_days_from_monday()) % 7;
    let offset = match modifier {
        WeekdayModifier::This | WeekdayModifier::Coming => delta,
        WeekdayModifier::Next if delta > 0 => delta,
        WeekdayModifier::Next => 7,
    };
    reference.checked_add_days(Days::new(u64::from(offset)))
}

/// Advance `reference` by `n` units.
///
/// Months are calendar months with the day clamped to the target month's
/// last day (Jan 31 + 1 month is Feb 28/29). `None` on overflow.
pub fn in_n_units(reference: NaiveDate, n: u32, unit: DurationUnit) -> Option<NaiveDate> {
    match unit {
        DurationUnit::Day => reference.checked_add_days(Days::new(u64::from(n))),
        DurationUnit::Week => reference.checked_add_days(Days::new(u64::from(n) * 7)),
        DurationUnit::Month => reference.checked_add_months(Months::new(n)),
    }
}

/// String-unit form of [`in_n_units`]; unknown units yield `None`.
pub fn in_n(reference: NaiveDate, n: u32, unit: &str) -> Option<NaiveDate> {
    in_n_units(reference, n, DurationUnit::parse(unit)?)
}

/// Last day of `month` in `year`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_months(Months::new(1))?.pred_opt()
}
