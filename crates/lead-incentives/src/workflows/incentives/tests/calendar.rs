use chrono::{Datelike, NaiveDate, Weekday};

use crate::workflows::incentives::calendar::{
    days_in_month, holiday_on, is_working_day, nth_saturday, remaining_working_days,
    working_days_between, working_days_in_month,
};

fn days_of_years(years: std::ops::RangeInclusive<i32>) -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(*years.start(), 1, 1).expect("valid start");
    let end = NaiveDate::from_ymd_opt(*years.end(), 12, 31).expect("valid end");
    start.iter_days().take_while(move |day| *day <= end)
}

#[test]
fn sundays_are_never_working_days() {
    for day in days_of_years(2023..=2027).filter(|day| day.weekday() == Weekday::Sun) {
        assert!(!is_working_day(day), "{day} is a Sunday");
    }
}

#[test]
fn second_and_fourth_saturdays_are_off() {
    for day in days_of_years(2023..=2027).filter(|day| day.weekday() == Weekday::Sat) {
        let expected = !matches!(nth_saturday(day), 2 | 4) && holiday_on(day).is_none();
        assert_eq!(is_working_day(day), expected, "saturday {day}");
        if matches!(nth_saturday(day), 1 | 3 | 5) {
            assert!(is_working_day(day), "{day} should be a working saturday");
        }
    }
}

#[test]
fn month_count_matches_predicate_sum() {
    for year in 2024..=2026 {
        for month in 1..=12 {
            let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
            let expected = first
                .iter_days()
                .take(days_in_month(first) as usize)
                .filter(|day| is_working_day(*day))
                .count() as u32;
            assert_eq!(working_days_in_month(first), expected, "{year}-{month}");
            assert_eq!(remaining_working_days(first), expected, "{year}-{month}");
        }
    }
}

#[test]
fn known_month_totals() {
    let march = NaiveDate::from_ymd_opt(2025, 3, 17).expect("valid");
    assert_eq!(working_days_in_month(march), 24);

    // June 2025 loses Juneteenth and the 2nd/4th Saturdays.
    let june = NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid");
    assert_eq!(working_days_in_month(june), 22);
    assert_eq!(remaining_working_days(june), 15);

    let november = NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid");
    assert_eq!(working_days_in_month(november), 21);
}

#[test]
fn holidays_are_not_working_days() {
    for (year, month, day) in [
        (2025, 1, 1),
        (2025, 1, 20),
        (2025, 5, 26),
        (2025, 7, 4),
        (2025, 11, 27),
        (2025, 12, 25),
        (2026, 7, 3),
    ] {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid");
        assert!(!is_working_day(date), "{date} is a holiday");
    }
}

#[test]
fn range_counts_are_inclusive() {
    let monday = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid");
    let friday = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid");
    assert_eq!(working_days_between(monday, friday), 5);
    assert_eq!(working_days_between(friday, monday), 0);
    assert_eq!(working_days_between(monday, monday), 1);
}
