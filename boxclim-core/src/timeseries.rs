/// Floating point type used throughout the model
pub type FloatValue = f64;

/// Simulation day counter.
///
/// The first simulated day is `1`. Day `0` denotes the initial condition.
pub type DayIndex = i64;

/// Length of the forcing year in days.
pub const DAYS_PER_YEAR: usize = 365;

/// Number of seconds in one simulated day
pub const SECONDS_PER_DAY: FloatValue = 60.0 * 60.0 * 24.0;

/// Position of `day` within the repeating forcing year.
///
/// Day 1 maps to the first row, day 365 to the last and day 366 back to the first.
pub fn day_of_year(day: DayIndex) -> usize {
    (day - 1).rem_euclid(DAYS_PER_YEAR as DayIndex) as usize
}
