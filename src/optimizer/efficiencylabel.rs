use serde::{Deserialize, Serialize};

/// Locales the summary label is rendered in.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Greek
}

/// Ratio of total days off to leave days spent.
///
/// An all-free window reports its total day count instead: a sortable,
/// serializable sentinel standing in for "infinitely efficient". Never
/// f64 infinity, which breaks JSON round-trips and comparisons.
pub fn efficiency(total_days: u32, leave_days_required: u32) -> f64 {
    if leave_days_required == 0 {
        total_days as f64
    } else {
        total_days as f64 / leave_days_required as f64
    }
}

/// Human-readable summary of a window, derived purely from the two day
/// counts. "7 free days" when no leave is spent, otherwise
/// "Turn 2 days into 9" with singular/plural inflection per locale.
pub fn efficiency_label(total_days: u32, leave_days_required: u32, locale: Locale) -> String {
    match locale {
        Locale::English => {
            if leave_days_required == 0 {
                if total_days == 1 {
                    "1 free day".to_owned()
                } else {
                    format!("{} free days", total_days)
                }
            } else if leave_days_required == 1 {
                format!("Turn 1 day into {}", total_days)
            } else {
                format!("Turn {} days into {}", leave_days_required, total_days)
            }
        },
        Locale::Greek => {
            if leave_days_required == 0 {
                if total_days == 1 {
                    "1 ελεύθερη ημέρα".to_owned()
                } else {
                    format!("{} ελεύθερες ημέρες", total_days)
                }
            } else if leave_days_required == 1 {
                format!("Με 1 ημέρα άδειας κερδίζεις {} ημέρες", total_days)
            } else {
                format!(
                    "Με {} ημέρες άδειας κερδίζεις {} ημέρες",
                    leave_days_required, total_days
                )
            }
        },
    }
}
