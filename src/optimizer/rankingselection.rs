use crate::optimizer::daycostcalendar::DayInfo;
use crate::optimizer::efficiencylabel::Locale;
use crate::optimizer::optimizationresult::OptimizationResult;
use crate::optimizer::windowsearch::search_windows;

/// Ranks candidates and greedily selects a non-overlapping subset.
///
/// The ordering prefers candidates that consume more of the leave
/// budget, tie-broken by longer total span. This is deliberately not
/// an efficiency sort: the product ranks "best use of the budget you
/// have", so the top window is the one that turns the most leave days
/// into time off, even when a smaller window has a better ratio.
///
/// A `result_cap` of 0 means unbounded.
pub fn rank_and_select(
    mut candidates: Vec<OptimizationResult>,
    result_cap: usize
) -> Vec<OptimizationResult> {
    // The search only emits holiday-anchored windows; this guards
    // against a future strategy that forgets to.
    candidates.retain(OptimizationResult::contains_holiday);

    candidates.sort_by(|a, b| {
        b.leave_days_required
            .cmp(&a.leave_days_required)
            .then(b.total_days.cmp(&a.total_days))
    });

    let mut selected: Vec<OptimizationResult> = Vec::new();
    for candidate in candidates {
        if selected.iter().any(|s| s.range.overlaps(&candidate.range)) {
            continue;
        }
        selected.push(candidate);
        if result_cap > 0 && selected.len() == result_cap {
            break;
        }
    }
    selected
}

/// The end-to-end engine call: candidate search over the calendar,
/// then ranking and non-overlapping selection.
pub fn compute_windows_for_budget(
    calendar: &[DayInfo],
    budget: u32,
    result_cap: usize,
    locale: Locale
) -> Vec<OptimizationResult> {
    rank_and_select(search_windows(calendar, budget, locale), result_cap)
}
