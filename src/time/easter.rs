use chrono::{Duration, NaiveDate};

/// Day offsets, relative to Easter Sunday, of the movable holidays.
pub const CLEAN_MONDAY_OFFSET: i64 = -48;
pub const GOOD_FRIDAY_OFFSET: i64 = -2;
pub const EASTER_MONDAY_OFFSET: i64 = 1;
pub const HOLY_SPIRIT_MONDAY_OFFSET: i64 = 50;

/// Orthodox Easter Sunday for the given year, as a Gregorian date.
///
/// The Meeus/Jones/Butcher congruences give the Julian-calendar date,
/// which is then shifted into the Gregorian calendar by the
/// century-dependent offset `century - century/4 - 2` (13 days for
/// 1900-2099). Exact for years in [1800, 2199]; the offset derivation
/// does not hold outside that range.
pub fn orthodox_easter(year: i32) -> NaiveDate {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    // month is always 3 or 4 and day at most 31, so the construction
    // cannot fail for any integer year.
    let julian = NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap();

    let century = year / 100;
    let gregorian_shift = century - century / 4 - 2;
    julian + Duration::days(gregorian_shift as i64)
}
