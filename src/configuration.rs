use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::holiday::customholiday::CustomHoliday;
use crate::optimizer::efficiencylabel::Locale;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Planner settings loaded from a JSON file: the target year, the
/// leave-day budget, and the optional knobs the engine is invoked
/// with.
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfiguration {
    pub year: i32,
    pub leave_budget: u32,
    #[serde(default)]
    pub result_cap: usize,
    #[serde(default = "default_true")]
    pub include_holy_spirit_monday: bool,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub custom_holidays: Vec<CustomHoliday>
}

fn default_true() -> bool {
    true
}

impl PlannerConfiguration {
    pub fn from_reader<P: AsRef<Path>>(path: P) -> Result<PlannerConfiguration, ConfigurationError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
