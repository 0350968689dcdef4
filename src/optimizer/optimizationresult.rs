use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holiday::holiday::Holiday;
use crate::optimizer::daycostcalendar::{DayInfo, day_cost_calendar};
use crate::optimizer::efficiencylabel::{Locale, efficiency, efficiency_label};
use crate::time::rangeofdates::DateRange;

/// Minimum calendar span of a window worth reporting.
pub const MIN_WINDOW_DAYS: u32 = 3;

/// A candidate or final vacation window.
///
/// Value object: the engine returns fresh instances per call and the
/// caller owns them. `days` is recomputable from the range and a
/// holiday list, so it is skipped on serialization; the persistence
/// layer stores the remaining fields and re-derives the rest.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub range: DateRange,
    pub total_days: u32,
    pub leave_days_required: u32,
    pub free_days: u32,
    pub efficiency: f64,
    pub efficiency_label: String,
    #[serde(skip)]
    pub days: Vec<DayInfo>
}

impl OptimizationResult {
    /// Derives every field from a non-empty day slice.
    pub fn from_days(days: Vec<DayInfo>, locale: Locale) -> OptimizationResult {
        let total_days = days.len() as u32;
        let leave_days_required: u32 = days.iter().map(|d| d.cost).sum();
        let free_days = days.iter().filter(|d| d.cost == 0).count() as u32;
        let range = DateRange::new(days[0].date, days[days.len() - 1].date);
        OptimizationResult {
            range,
            total_days,
            leave_days_required,
            free_days,
            efficiency: efficiency(total_days, leave_days_required),
            efficiency_label: efficiency_label(total_days, leave_days_required, locale),
            days
        }
    }

    #[inline]
    pub fn contains_holiday(&self) -> bool {
        self.days.iter().any(|d| d.is_holiday)
    }

    /// Validity of a search-produced window: anchored on at least one
    /// holiday, consumes at least one leave day, spans at least three
    /// calendar days. Checked only after expansion, so a short or
    /// all-free base span still gets the chance to grow into a valid
    /// window.
    pub fn is_valid_window(&self) -> bool {
        self.contains_holiday()
            && self.leave_days_required >= 1
            && self.total_days >= MIN_WINDOW_DAYS
    }
}

/// Rebuilds a result from just its date range and a current holiday
/// list: the recomputation entry point for stored plans and shared
/// URLs. No validity filtering here; the range was validated when the
/// plan was first produced.
pub fn compute_single_window(
    start_date: NaiveDate,
    end_date: NaiveDate,
    holidays: &[Holiday],
    locale: Locale
) -> OptimizationResult {
    OptimizationResult::from_days(day_cost_calendar(start_date, end_date, holidays), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn fields_are_derived_from_the_day_slice() {
        // Mon Jan 5 .. Sun Jan 11 2026 with Epiphany on Tue Jan 6.
        let holidays = [Holiday::fixed(d(2026, 1, 6), "Epiphany", "Θεοφάνεια")];
        let result =
            compute_single_window(d(2026, 1, 5), d(2026, 1, 11), &holidays, Locale::English);
        assert_eq!(result.total_days, 7);
        assert_eq!(result.leave_days_required, 4); // Mon, Wed, Thu, Fri
        assert_eq!(result.free_days, 3);
        assert_eq!(result.efficiency, 1.75);
        assert_eq!(result.efficiency_label, "Turn 4 days into 7");
        assert!(result.is_valid_window());
    }

    #[test]
    fn all_workday_window_is_leave_equals_total() {
        // Tue Jan 13 .. Thu Jan 15 2026, no holidays.
        let result = compute_single_window(d(2026, 1, 13), d(2026, 1, 15), &[], Locale::English);
        assert_eq!(result.total_days, 3);
        assert_eq!(result.leave_days_required, 3);
        assert_eq!(result.efficiency, 1.0);
        assert!(!result.is_valid_window()); // no holiday inside
    }

    #[test]
    fn weekend_only_window_fails_the_validity_invariant() {
        // Sat Aug 15 2026 is also the Assumption.
        let holidays = [Holiday::fixed(d(2026, 8, 15), "Assumption of Mary", "Κοίμηση")];
        let result =
            compute_single_window(d(2026, 8, 15), d(2026, 8, 16), &holidays, Locale::English);
        assert_eq!(result.leave_days_required, 0);
        assert!(!result.is_valid_window());
        // Sentinel efficiency: total days, not infinity.
        assert_eq!(result.efficiency, 2.0);
        assert_eq!(result.efficiency_label, "2 free days");
    }

    #[test]
    fn serialization_skips_the_day_slice() {
        let holidays = [Holiday::fixed(d(2026, 1, 6), "Epiphany", "Θεοφάνεια")];
        let result =
            compute_single_window(d(2026, 1, 5), d(2026, 1, 11), &holidays, Locale::English);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("days").is_none());
        assert_eq!(json["total_days"], 7);
    }
}
