use chrono::NaiveDate;
use rand::Rng;

/// Earliest birth year produced by [`random_birth_date`].
pub const BIRTH_YEAR_MIN: i32 = 1960;
/// Latest birth year produced by [`random_birth_date`].
pub const BIRTH_YEAR_MAX: i32 = 2009;

/// Uniform random birth date: day 1-28, month 1-12, year 1960-2009.
///
/// Day stops at 28 so every month/day combination is a valid calendar date.
pub fn random_birth_date(rng: &mut impl Rng) -> NaiveDate {
    let year = rng.random_range(BIRTH_YEAR_MIN..=BIRTH_YEAR_MAX);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Uniform random amount in the closed interval [min, max].
pub fn random_amount(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    rng.random_range(min..=max)
}
