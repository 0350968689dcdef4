use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::holiday::holiday::Holiday;
use crate::optimizer::efficiencylabel::Locale;
use crate::optimizer::optimizationresult::{OptimizationResult, compute_single_window};
use crate::time::rangeofdates::DateRange;

/// The subset of an optimization result that survives persistence and
/// URL sharing. The per-day slice is recomputable and never stored; a
/// full result is rebuilt from the range and a current holiday list.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct StoredPlan {
    pub year: i32,
    pub range: DateRange,
    pub total_days: u32,
    pub leave_days_required: u32,
    pub free_days: u32,
    pub efficiency: f64,
    pub efficiency_label: String
}

impl StoredPlan {
    pub fn from_result(result: &OptimizationResult) -> StoredPlan {
        StoredPlan {
            year: result.range.start_date().year(),
            range: result.range,
            total_days: result.total_days,
            leave_days_required: result.leave_days_required,
            free_days: result.free_days,
            efficiency: result.efficiency,
            efficiency_label: result.efficiency_label.clone()
        }
    }

    /// Rebuilds the full result, day slice included, from the stored
    /// range. Given the holiday set the plan was computed with, every
    /// derived field comes back identical.
    pub fn restore(&self, holidays: &[Holiday], locale: Locale) -> OptimizationResult {
        compute_single_window(self.range.start_date(), self.range.end_date(), holidays, locale)
    }

    /// Pairwise conflict check between saved plans.
    pub fn conflicts_with(&self, other: &StoredPlan) -> bool {
        self.range.overlaps(&other.range)
    }
}
