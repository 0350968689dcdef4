use std::env;

use leaveopt::configuration::PlannerConfiguration;
use leaveopt::holiday::calendarbuilder::build_holiday_calendar;
use leaveopt::optimizer::daycostcalendar::compute_year_calendar;
use leaveopt::optimizer::rankingselection::compute_windows_for_budget;

fn main() {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => match PlannerConfiguration::from_reader(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{}: {}", path, error);
                std::process::exit(1);
            }
        },
        None => PlannerConfiguration {
            year: 2026,
            leave_budget: 5,
            result_cap: 5,
            include_holy_spirit_monday: true,
            locale: Default::default(),
            custom_holidays: Vec::new()
        },
    };

    let holidays = build_holiday_calendar(
        config.year,
        config.include_holy_spirit_monday,
        &config.custom_holidays
    );
    let calendar = compute_year_calendar(config.year, &holidays);
    let results = compute_windows_for_budget(
        &calendar,
        config.leave_budget,
        config.result_cap,
        config.locale
    );

    println!(
        "{} windows for {} with a {}-day leave budget",
        results.len(),
        config.year,
        config.leave_budget
    );
    for result in &results {
        println!(
            "{} .. {}  {:>2} days, {} leave, efficiency {:.2}  ({})",
            result.range.start_date(),
            result.range.end_date(),
            result.total_days,
            result.leave_days_required,
            result.efficiency,
            result.efficiency_label
        );
    }
}
