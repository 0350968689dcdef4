use chrono::{Datelike, NaiveDate};

use crate::time::rangeofdates::DateRange;

/// User-correctable failures of the date inputs upstream of the
/// engine. The engine itself has no fallible paths; everything a user
/// can get wrong is caught here and reported, never panicked on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Returned when a required field is empty.
    #[error("missing {field} date")]
    MissingInput {
        /// Which input was empty.
        field: &'static str,
    },

    /// Returned when an input is not an ISO `YYYY-MM-DD` date.
    #[error("'{input}' is not a valid date")]
    UnparseableDate {
        /// The offending input text.
        input: String,
    },

    /// Returned when the start date falls after the end date.
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd {
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Returned when a date falls outside the plan's target year.
    #[error("{date} is outside year {year}")]
    DateOutsideYear {
        date: NaiveDate,
        year: i32,
    },

    /// Returned when the start date is before today.
    #[error("start date {start} is in the past")]
    StartInPast {
        start: NaiveDate,
    },
}

fn parse_input(input: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingInput { field });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        ValidationError::UnparseableDate { input: trimmed.to_owned() }
    })
}

/// Validates a user-entered date range against the target year and an
/// explicit "today" supplied by the caller, returning the range the
/// engine can recompute a window from.
pub fn validate_range(
    start_input: &str,
    end_input: &str,
    year: i32,
    today: NaiveDate
) -> Result<DateRange, ValidationError> {
    let start = parse_input(start_input, "start")?;
    let end = parse_input(end_input, "end")?;

    if start > end {
        return Err(ValidationError::StartAfterEnd { start, end });
    }
    for date in [start, end] {
        if date.year() != year {
            return Err(ValidationError::DateOutsideYear { date, year });
        }
    }
    if start < today {
        return Err(ValidationError::StartInPast { start });
    }

    Ok(DateRange::new(start, end))
}
