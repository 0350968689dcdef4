use chrono::{
    Days,
    NaiveDate
};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days.
///
/// The constructor normalizes the bounds, so `start_date <= end_date`
/// always holds and a range is never empty.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl DateRange {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> DateRange {
        if d1 > d2 {
            DateRange {start_date: d2, end_date: d1}
        } else {
            DateRange {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Inclusive-bounds overlap test: sharing a single day counts.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        (self.start_date <= other.end_date) && (other.start_date <= self.end_date)
    }

    pub fn iter(&self) -> DateRangeIterator {
        DateRangeIterator {
            range: self,
            index: 0,
        }
    }
}

pub struct DateRangeIterator<'a> {
    range: &'a DateRange,
    index: usize,
}

impl<'a> Iterator for DateRangeIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range.len() {
            let result = Some(self.range.start_date() + Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }
}
