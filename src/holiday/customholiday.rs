use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::holiday::holiday::Holiday;
use crate::time::easter::orthodox_easter;

/// Rule deciding which concrete date a custom holiday falls on in a
/// given year.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CustomHolidayRule {
    /// One-time observance; resolves only for its own year.
    FixedDate { date: NaiveDate },
    /// Same month/day every year.
    Recurring { month: u32, day: u32 },
    /// Fixed month/day that relocates to Easter Monday whenever the
    /// fixed occurrence falls on or before Easter Sunday. Patron-saint
    /// feasts are canonically forbidden from landing in Holy Week and
    /// are moved forward instead.
    ConditionallyMovable { month: u32, day: u32 },
    /// Easter Sunday plus a signed day offset.
    EasterOffset { days: i64 },
}

/// A user-supplied holiday specification.
///
/// `localized_name` falls back to `name` when absent. Entries missing a
/// name, or whose rule yields no date for the requested year, resolve
/// to `None` and are silently dropped by the calendar builder.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct CustomHoliday {
    pub name: Option<String>,
    pub localized_name: Option<String>,
    #[serde(flatten)]
    pub rule: CustomHolidayRule
}

impl CustomHoliday {
    pub fn resolve(&self, year: i32) -> Option<Holiday> {
        let name = self.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }

        let easter = orthodox_easter(year);
        let mut is_movable = false;

        let date = match self.rule {
            CustomHolidayRule::FixedDate { date } => {
                if date.year() == year {
                    date
                } else {
                    return None;
                }
            },
            CustomHolidayRule::Recurring { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day)?
            },
            CustomHolidayRule::ConditionallyMovable { month, day } => {
                let fixed = NaiveDate::from_ymd_opt(year, month, day)?;
                // <= so that a feast on Easter Sunday itself relocates too.
                if fixed <= easter {
                    is_movable = true;
                    easter + Duration::days(1)
                } else {
                    fixed
                }
            },
            CustomHolidayRule::EasterOffset { days } => {
                is_movable = true;
                easter + Duration::days(days)
            },
        };

        Some(Holiday {
            date,
            name: name.to_owned(),
            localized_name: self
                .localized_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(name)
                .to_owned(),
            is_movable,
            is_custom: true
        })
    }
}
