// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil UTC assembly.
//!
//! The almanac core produces an hour/minute pair on the *input* calendar
//! date; minute rounding can push the clock past midnight. This module
//! cascades that overflow through the day, month and year fields and packs
//! the result into a `chrono::DateTime<Utc>`.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Number of days in the given month.
///
/// Resolved through chrono's calendar; if the neighbouring month cannot be
/// constructed the conventional maximum of 31 is used instead of failing.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Pack an `(hour, minute)` clock reading on `date` into a UTC instant,
/// rolling the calendar forward when the clock overflows.
///
/// Cascade order: `minute == 60` bumps the hour, `hour == 24` bumps the
/// day, a day past the month's length bumps the month, month 13 bumps the
/// year. Each step resets the overflowed field, so the output fields are
/// always a valid civil date-time (`hour ∈ [0,23]`, `minute ∈ [0,59]`).
pub(crate) fn resolve(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let (mut year, mut month, mut day) = (date.year(), date.month(), date.day());
    let (mut hour, mut minute) = (hour, minute);

    if minute == 60 {
        minute = 0;
        hour += 1;
    }
    if hour == 24 {
        hour = 0;
        day += 1;
        if day > days_in_month(year, month) {
            day = 1;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
    }

    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("rollover produced a civil date outside chrono's representable range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month_regular_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2022, month as u32 + 1), *days);
        }
    }

    #[test]
    fn test_days_in_month_leap_february() {
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_no_overflow_passes_through() {
        let dt = resolve(ymd(2022, 6, 7), 11, 15);
        assert_eq!(
            (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()),
            (2022, 6, 7, 11, 15)
        );
    }

    #[test]
    fn test_minute_sixty_bumps_hour() {
        let dt = resolve(ymd(2022, 6, 7), 11, 60);
        assert_eq!((dt.hour(), dt.minute()), (12, 0));
        assert_eq!(dt.day(), 7);
    }

    #[test]
    fn test_hour_twenty_four_bumps_day() {
        let dt = resolve(ymd(2022, 6, 7), 24, 0);
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (8, 0, 0));
    }

    #[test]
    fn test_minute_cascade_through_midnight() {
        let dt = resolve(ymd(2022, 6, 7), 23, 60);
        assert_eq!(
            (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()),
            (2022, 6, 8, 0, 0)
        );
    }

    #[test]
    fn test_month_rollover_on_thirty_day_month() {
        let dt = resolve(ymd(2022, 6, 30), 24, 0);
        assert_eq!((dt.month(), dt.day()), (7, 1));
    }

    #[test]
    fn test_february_rollover_honours_leap_years() {
        let leap = resolve(ymd(2020, 2, 28), 24, 0);
        assert_eq!((leap.month(), leap.day()), (2, 29));

        let common = resolve(ymd(2022, 2, 28), 24, 0);
        assert_eq!((common.month(), common.day()), (3, 1));
    }

    #[test]
    fn test_year_rollover() {
        let dt = resolve(ymd(2021, 12, 31), 23, 60);
        assert_eq!(
            (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()),
            (2022, 1, 1, 0, 0)
        );
    }
}
