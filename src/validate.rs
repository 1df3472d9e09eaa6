//! Range checks for a day/month/year triple, plus the month-length table
//! shared with the day-borrow arithmetic in [`crate::age`].
//!
//! All of these are total functions over plain integers. The current year is
//! an explicit parameter rather than a clock read, so the whole module stays
//! deterministic.

/// Days in each month on a non-leap basis.
///
/// Both `day_is_valid` and the day borrow in [`crate::age::days_between`]
/// read this table, so February is always 28 here: a February 29 birth day
/// does not validate even in leap years.
pub const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the non-leap length of a 1-indexed month.
pub fn days_in_month(month: i32) -> i32 {
    match month {
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 30, // should never occur but keeps the function total
    }
}

/// True iff `month` is a calendar month (1-indexed).
pub fn month_is_valid(month: i32) -> bool {
    (1..=12).contains(&month)
}

/// True iff `year` is positive and not after `current_year`.
pub fn year_is_valid(year: i32, current_year: i32) -> bool {
    year > 0 && year <= current_year
}

/// True iff `day` exists in `month` (non-leap basis).
///
/// An invalid month makes every day invalid.
pub fn day_is_valid(day: i32, month: i32) -> bool {
    if day <= 0 || !month_is_valid(month) {
        return false;
    }
    day <= days_in_month(month)
}
