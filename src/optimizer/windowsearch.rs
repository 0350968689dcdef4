use crate::optimizer::daycostcalendar::DayInfo;
use crate::optimizer::efficiencylabel::Locale;
use crate::optimizer::optimizationresult::OptimizationResult;

/// Inclusive index span into a day-cost calendar.
type Span = (usize, usize);

fn span_cost(calendar: &[DayInfo], span: Span) -> u32 {
    calendar[span.0..=span.1].iter().map(|d| d.cost).sum()
}

fn grow_left(calendar: &[DayInfo], start: &mut usize, cost: &mut u32, budget: u32) {
    while *start > 0 && *cost + calendar[*start - 1].cost <= budget {
        *start -= 1;
        *cost += calendar[*start].cost;
    }
}

fn grow_right(calendar: &[DayInfo], end: &mut usize, cost: &mut u32, budget: u32) {
    while *end + 1 < calendar.len() && *cost + calendar[*end + 1].cost <= budget {
        *end += 1;
        *cost += calendar[*end].cost;
    }
}

/// Greedy expansion leftward then rightward from the anchor, one day
/// at a time, stopping at the first day that would push the running
/// cost over the budget or at the calendar bounds.
pub fn expand_both(calendar: &[DayInfo], anchor: usize, budget: u32) -> Span {
    let mut start = anchor;
    let mut end = anchor;
    let mut cost = calendar[anchor].cost;
    grow_left(calendar, &mut start, &mut cost, budget);
    grow_right(calendar, &mut end, &mut cost, budget);
    (start, end)
}

/// Greedy expansion leftward only.
pub fn expand_left(calendar: &[DayInfo], anchor: usize, budget: u32) -> Span {
    let mut start = anchor;
    let mut cost = calendar[anchor].cost;
    grow_left(calendar, &mut start, &mut cost, budget);
    (start, anchor)
}

/// Greedy expansion rightward only.
pub fn expand_right(calendar: &[DayInfo], anchor: usize, budget: u32) -> Span {
    let mut end = anchor;
    let mut cost = calendar[anchor].cost;
    grow_right(calendar, &mut end, &mut cost, budget);
    (anchor, end)
}

/// Bridging window over a pair of holiday indices: feasible when the
/// base span from `left_anchor` to `right_anchor` fits the budget, then
/// expanded outward from both ends under whatever budget remains.
pub fn bridge(
    calendar: &[DayInfo],
    left_anchor: usize,
    right_anchor: usize,
    budget: u32
) -> Option<Span> {
    let mut cost = span_cost(calendar, (left_anchor, right_anchor));
    if cost > budget {
        return None;
    }
    let mut start = left_anchor;
    let mut end = right_anchor;
    grow_left(calendar, &mut start, &mut cost, budget);
    grow_right(calendar, &mut end, &mut cost, budget);
    Some((start, end))
}

/// Indices of the calendar days on which at least one holiday falls.
pub fn holiday_indices(calendar: &[DayInfo]) -> Vec<usize> {
    calendar
        .iter()
        .enumerate()
        .filter(|(_, day)| day.is_holiday)
        .map(|(index, _)| index)
        .collect()
}

/// Enumerates candidate windows anchored on every holiday in the
/// calendar: the three expansion strategies per anchor plus a bridging
/// window per adjacent anchor pair. Spans are converted to results and
/// invariant-filtered only here, after expansion. The output is
/// unranked and may contain overlapping candidates.
pub fn search_windows(
    calendar: &[DayInfo],
    budget: u32,
    locale: Locale
) -> Vec<OptimizationResult> {
    let anchors = holiday_indices(calendar);
    let mut spans: Vec<Span> = Vec::with_capacity(anchors.len() * 4);

    for &anchor in &anchors {
        spans.push(expand_both(calendar, anchor, budget));
        spans.push(expand_left(calendar, anchor, budget));
        spans.push(expand_right(calendar, anchor, budget));
    }
    for pair in anchors.windows(2) {
        if let Some(span) = bridge(calendar, pair[0], pair[1], budget) {
            spans.push(span);
        }
    }

    spans
        .into_iter()
        .map(|(start, end)| {
            OptimizationResult::from_days(calendar[start..=end].to_vec(), locale)
        })
        .filter(OptimizationResult::is_valid_window)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::holiday::holiday::Holiday;
    use crate::optimizer::daycostcalendar::day_cost_calendar;

    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// January 2026 with New Year (Thu Jan 1) and Epiphany (Tue Jan 6).
    fn january_2026() -> Vec<DayInfo> {
        let holidays = [
            Holiday::fixed(d(2026, 1, 1), "New Year's Day", "Πρωτοχρονιά"),
            Holiday::fixed(d(2026, 1, 6), "Epiphany", "Θεοφάνεια"),
        ];
        day_cost_calendar(d(2026, 1, 1), d(2026, 1, 31), &holidays)
    }

    #[test]
    fn anchors_are_the_holiday_days() {
        let calendar = january_2026();
        assert_eq!(holiday_indices(&calendar), vec![0, 5]);
    }

    #[test]
    fn expansion_respects_the_budget() {
        let calendar = january_2026();
        // Anchor on Epiphany (index 5) with a 1-day budget. Rightward:
        // Wed Jan 7 costs 1, Thu Jan 8 would cost a second day.
        let (start, end) = expand_right(&calendar, 5, 1);
        assert_eq!((start, end), (5, 6));
        assert_eq!(span_cost(&calendar, (start, end)), 1);
    }

    #[test]
    fn expansion_extends_through_free_days_at_zero_marginal_cost() {
        let calendar = january_2026();
        // Leftward from Epiphany: Mon Jan 5 costs 1, then Sun/Sat are
        // free, then Fri Jan 2 would need a second leave day.
        let (start, end) = expand_left(&calendar, 5, 1);
        assert_eq!((start, end), (2, 5));
    }

    #[test]
    fn expansion_stops_at_the_calendar_bounds() {
        let calendar = january_2026();
        let (start, _) = expand_both(&calendar, 0, 10);
        assert_eq!(start, 0);
    }

    #[test]
    fn bridge_spans_both_anchors_when_affordable() {
        let calendar = january_2026();
        // Jan 1 .. Jan 6 needs 2 leave days (Fri Jan 2, Mon Jan 5).
        let (start, end) = bridge(&calendar, 0, 5, 2).unwrap();
        assert_eq!(start, 0);
        assert!(end >= 5);
    }

    #[test]
    fn infeasible_bridge_is_rejected() {
        let calendar = january_2026();
        assert!(bridge(&calendar, 0, 5, 1).is_none());
    }

    #[test]
    fn bridge_expands_under_the_remaining_budget() {
        let calendar = january_2026();
        // Budget 3 leaves one day after the 2-day base span; the right
        // expansion takes Wed Jan 7 and then runs into Thu Jan 8.
        let (start, end) = bridge(&calendar, 0, 5, 3).unwrap();
        assert_eq!((start, end), (0, 6));
    }

    #[test]
    fn search_results_satisfy_the_validity_invariant() {
        let calendar = january_2026();
        let results = search_windows(&calendar, 10, Locale::English);
        assert!(!results.is_empty());
        for result in &results {
            assert!(result.leave_days_required >= 1);
            assert!(result.total_days >= 3);
            assert!(result.contains_holiday());
        }
    }

    #[test]
    fn zero_budget_over_a_weekend_holiday_yields_nothing() {
        // Assumption 2026 falls on a Saturday; with no budget there is
        // no way to consume a leave day, so no valid window exists.
        let holidays = [Holiday::fixed(d(2026, 8, 15), "Assumption of Mary", "Κοίμηση")];
        let calendar = day_cost_calendar(d(2026, 8, 1), d(2026, 8, 31), &holidays);
        assert!(search_windows(&calendar, 0, Locale::English).is_empty());
    }

    #[test]
    fn weekend_holiday_becomes_valid_once_expansion_is_possible() {
        let holidays = [Holiday::fixed(d(2026, 8, 15), "Assumption of Mary", "Κοίμηση")];
        let calendar = day_cost_calendar(d(2026, 8, 1), d(2026, 8, 31), &holidays);
        let results = search_windows(&calendar, 1, Locale::English);
        assert!(results.iter().any(|r| r.leave_days_required == 1));
    }

    #[test]
    fn holiday_free_calendar_yields_no_windows() {
        let calendar = day_cost_calendar(d(2026, 2, 1), d(2026, 2, 14), &[]);
        assert!(search_windows(&calendar, 5, Locale::English).is_empty());
    }
}
