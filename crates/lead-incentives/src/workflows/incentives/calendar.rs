//! Working-day calendar: Sundays, the 2nd and 4th Saturday of each month and
//! the observed US federal holiday set are days off.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub name: &'static str,
    pub date: NaiveDate,
}

pub fn is_working_day(date: NaiveDate) -> bool {
    match date.weekday() {
        Weekday::Sun => false,
        Weekday::Sat if matches!(nth_saturday(date), 2 | 4) => false,
        _ => holiday_on(date).is_none(),
    }
}

/// Ordinal of the weekday within its month: `floor((day - 1) / 7) + 1`.
pub fn nth_saturday(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    us_holidays(date.year())
        .into_iter()
        .find(|holiday| holiday.date == date)
}

/// Observed holidays falling in `year`, sorted by date.
///
/// A Saturday New Year's Day is observed on Dec 31 of the previous year, so
/// that date is listed under the year it lands in.
pub fn us_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays = Vec::with_capacity(12);

    let fixed: [(&'static str, u32, u32); 5] = [
        ("New Year's Day", 1, 1),
        ("Juneteenth", 6, 19),
        ("Independence Day", 7, 4),
        ("Veterans Day", 11, 11),
        ("Christmas Day", 12, 25),
    ];
    for (name, month, day) in fixed {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            holidays.push(Holiday {
                name,
                date: observed(date),
            });
        }
    }
    if let Some(next_new_year) = NaiveDate::from_ymd_opt(year + 1, 1, 1) {
        holidays.push(Holiday {
            name: "New Year's Day",
            date: observed(next_new_year),
        });
    }

    let floating: [(&'static str, u32, Weekday, u8); 5] = [
        ("Martin Luther King Jr. Day", 1, Weekday::Mon, 3),
        ("Presidents Day", 2, Weekday::Mon, 3),
        ("Labor Day", 9, Weekday::Mon, 1),
        ("Columbus Day", 10, Weekday::Mon, 2),
        ("Thanksgiving Day", 11, Weekday::Thu, 4),
    ];
    for (name, month, weekday, nth) in floating {
        if let Some(date) = NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth) {
            holidays.push(Holiday { name, date });
        }
    }
    if let Some(date) = last_weekday_of_month(year, 5, Weekday::Mon) {
        holidays.push(Holiday {
            name: "Memorial Day",
            date,
        });
    }

    holidays.retain(|holiday| holiday.date.year() == year);
    holidays.sort_by_key(|holiday| holiday.date);
    holidays
}

/// Saturday holidays move to Friday, Sunday holidays to Monday.
fn observed(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
        .or_else(|| NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| (next - first_of_month(date)).num_days() as u32)
        .unwrap_or(31)
}

pub fn working_days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    count_working_days(first, days_in_month(date))
}

/// Working days from `date` (inclusive) to the end of its month.
pub fn remaining_working_days(date: NaiveDate) -> u32 {
    let left = days_in_month(date) - date.day() + 1;
    count_working_days(date, left)
}

/// Inclusive on both ends; zero when `end` precedes `start`.
pub fn working_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let span = (end - start).num_days() as u32 + 1;
    count_working_days(start, span)
}

fn count_working_days(start: NaiveDate, days: u32) -> u32 {
    start
        .iter_days()
        .take(days as usize)
        .filter(|day| is_working_day(*day))
        .count() as u32
}
