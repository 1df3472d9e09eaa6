//! Calendar arithmetic for working out an age in years, months and days.
//!
//! Three small pieces: [`validate`] checks that a day/month/year triple could
//! denote a real calendar date, [`age`] turns a validated birth date into an
//! [`age::Age`] against a reference date, and [`form`] maps raw text fields
//! onto per-field validation messages for whatever front end collects the
//! input. Everything is a pure function of its arguments; the current date is
//! passed in by the caller, never read here.

pub mod age;
pub mod form;
pub mod validate;
