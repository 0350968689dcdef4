use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single calendar observance.
///
/// Holiday lists are deliberately not deduplicated by date: a custom
/// holiday may coincide with a fixed national one and both entries are
/// kept, since a day counts as a holiday when any entry matches it.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub localized_name: String,
    pub is_movable: bool,
    pub is_custom: bool
}

impl Holiday {
    pub fn fixed(date: NaiveDate, name: &str, localized_name: &str) -> Holiday {
        Holiday {
            date,
            name: name.to_owned(),
            localized_name: localized_name.to_owned(),
            is_movable: false,
            is_custom: false
        }
    }

    pub fn movable(date: NaiveDate, name: &str, localized_name: &str) -> Holiday {
        Holiday {
            date,
            name: name.to_owned(),
            localized_name: localized_name.to_owned(),
            is_movable: true,
            is_custom: false
        }
    }

    #[inline]
    pub fn matches(&self, d: NaiveDate) -> bool {
        self.date == d
    }
}
