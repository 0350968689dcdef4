use chrono::{Duration, NaiveDate};

use crate::holiday::customholiday::CustomHoliday;
use crate::holiday::holiday::Holiday;
use crate::time::easter::{
    CLEAN_MONDAY_OFFSET,
    EASTER_MONDAY_OFFSET,
    GOOD_FRIDAY_OFFSET,
    HOLY_SPIRIT_MONDAY_OFFSET,
    orthodox_easter
};

/// The fixed national holidays, as (month, day, name, localized name).
const FIXED_NATIONAL_HOLIDAYS: [(u32, u32, &str, &str); 8] = [
    (1, 1, "New Year's Day", "Πρωτοχρονιά"),
    (1, 6, "Epiphany", "Θεοφάνεια"),
    (3, 25, "Independence Day", "25η Μαρτίου"),
    (5, 1, "Labour Day", "Εργατική Πρωτομαγιά"),
    (8, 15, "Assumption of Mary", "Κοίμηση της Θεοτόκου"),
    (10, 28, "National Day", "28η Οκτωβρίου"),
    (12, 25, "Christmas Day", "Χριστούγεννα"),
    (12, 26, "Synaxis of the Mother of God", "Σύναξη της Θεοτόκου"),
];

const MOVABLE_HOLIDAYS: [(i64, &str, &str); 4] = [
    (CLEAN_MONDAY_OFFSET, "Clean Monday", "Καθαρά Δευτέρα"),
    (GOOD_FRIDAY_OFFSET, "Good Friday", "Μεγάλη Παρασκευή"),
    (0, "Easter Sunday", "Κυριακή του Πάσχα"),
    (EASTER_MONDAY_OFFSET, "Easter Monday", "Δευτέρα του Πάσχα"),
];

/// Builds the full holiday calendar for one year, sorted ascending by
/// date: the fixed national table, the Easter-relative holidays
/// (optionally including Holy Spirit Monday), and whatever custom
/// entries resolve for this year.
///
/// No deduplication across categories: a custom holiday sharing a date
/// with a national one yields two entries, and both are evaluated when
/// classifying days.
pub fn build_holiday_calendar(
    year: i32,
    include_holy_spirit_monday: bool,
    custom: &[CustomHoliday]
) -> Vec<Holiday> {
    let mut holidays = Vec::with_capacity(
        FIXED_NATIONAL_HOLIDAYS.len() + MOVABLE_HOLIDAYS.len() + 1 + custom.len()
    );

    for (month, day, name, localized_name) in FIXED_NATIONAL_HOLIDAYS {
        // The table only holds valid month/day pairs.
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        holidays.push(Holiday::fixed(date, name, localized_name));
    }

    let easter = orthodox_easter(year);
    for (offset, name, localized_name) in MOVABLE_HOLIDAYS {
        holidays.push(Holiday::movable(easter + Duration::days(offset), name, localized_name));
    }
    if include_holy_spirit_monday {
        holidays.push(Holiday::movable(
            easter + Duration::days(HOLY_SPIRIT_MONDAY_OFFSET),
            "Holy Spirit Monday",
            "Αγίου Πνεύματος"
        ));
    }

    holidays.extend(custom.iter().filter_map(|spec| spec.resolve(year)));

    // Stable sort: entries sharing a date keep their category order.
    holidays.sort_by_key(|h| h.date);
    holidays
}
