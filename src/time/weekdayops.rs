use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::time::utility::days_of_month;

/// Days to walk forward from `from` to reach `to` (0..=6).
#[inline]
fn days_until(from: Weekday, to: Weekday) -> u64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as u64
}

/// Smallest date strictly after `d` falling on `weekday`.
///
/// # Panics
///
/// Panics when the result would pass `NaiveDate::MAX`.
pub fn next_weekday(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let days_forward = match days_until(d.weekday(), weekday) {
        0 => 7,
        n => n
    };
    d + Days::new(days_forward)
}

/// Largest date strictly before `d` falling on `weekday`.
///
/// # Panics
///
/// Panics when the result would precede `NaiveDate::MIN`.
pub fn last_weekday(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let days_back = match days_until(weekday, d.weekday()) {
        0 => 7,
        n => n
    };
    d - Days::new(days_back)
}

/// Earliest date in the month of `d` falling on `weekday`.
pub fn first_weekday_of_month(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let first_of_month = d - Days::new((d.day() - 1) as u64);
    first_of_month + Days::new(days_until(first_of_month.weekday(), weekday))
}

/// Latest date in the month of `d` falling on `weekday`.
pub fn last_weekday_of_month(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let eom = d + Days::new((days_of_month(d.year(), d.month()) - d.day()) as u64);
    eom - Days::new(days_until(weekday, eom.weekday()))
}
