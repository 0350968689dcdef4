use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{Deserialize, Serialize};

use crate::holiday::holiday::Holiday;
use crate::time::rangeofdates::DateRange;
use crate::time::utility::days_of_year;

/// One calendar day's cost classification.
///
/// `cost` is 0 when the day is a weekend or a holiday and 1 when it
/// would consume a paid-leave day. The weekend and holiday flags are
/// kept separately even though they collapse into the one cost bit,
/// since downstream code needs to recognize holidays falling on
/// weekends.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub cost: u32,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub holiday_name: Option<String>
}

/// Classifies every day in the inclusive range, ascending, no gaps.
///
/// Ranges crossing a year boundary must be supplied with a holiday
/// list covering all years touched.
pub fn day_cost_calendar(
    start_date: NaiveDate,
    end_date: NaiveDate,
    holidays: &[Holiday]
) -> Vec<DayInfo> {
    let range = DateRange::new(start_date, end_date);
    let mut days = Vec::with_capacity(range.len());

    for date in range.iter() {
        let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let matching = holidays.iter().find(|h| h.matches(date));
        let is_holiday = matching.is_some();
        days.push(DayInfo {
            date,
            cost: if is_weekend || is_holiday { 0 } else { 1 },
            is_weekend,
            is_holiday,
            holiday_name: matching.map(|h| h.name.clone())
        });
    }

    days
}

/// Jan 1 through Dec 31 of one year.
pub fn compute_year_calendar(year: i32, holidays: &[Holiday]) -> Vec<DayInfo> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
    let days = day_cost_calendar(start, end, holidays);
    debug_assert_eq!(days.len(), days_of_year(year) as usize);
    days
}

/// Slices a calendar to begin at an explicit effective start date.
///
/// The "plan from today onwards" behavior: the caller supplies the
/// date, so the engine never reads the wall clock.
pub fn truncate_from(days: &[DayInfo], start_date: NaiveDate) -> &[DayInfo] {
    let first = days.partition_point(|d| d.date < start_date);
    &days[first..]
}
