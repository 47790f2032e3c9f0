#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::headhunter::{HeadHunterSettings, HEADHUNTER_PER_PAGE, HEADHUNTER_URL};
use crate::adapters::superjob::{SuperJobSettings, SUPERJOB_COUNT, SUPERJOB_URL};
use crate::core::render::OutputFormat;
use crate::domain::salary::EstimateMode;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OCCUPATION: &str = "Программист";
pub const DEFAULT_AREA: &str = "Москва";
pub const DEFAULT_PERIOD_DAYS: u32 = 30;
pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "Java",
    "Python",
    "PHP",
    "C",
    "C++",
    "C#",
    "Go",
    "JavaScript",
];

/// Everything a report run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub occupation: String,
    pub languages: Vec<String>,
    pub area: Option<String>,
    #[serde(skip_serializing)]
    pub superjob_api_key: Option<String>,
    pub period_days: u32,
    pub superjob_catalogues: Option<String>,
    pub estimate_mode: EstimateMode,
    pub output_format: OutputFormat,
    pub headhunter_url: String,
    pub superjob_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            occupation: DEFAULT_OCCUPATION.to_string(),
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            area: Some(DEFAULT_AREA.to_string()),
            superjob_api_key: None,
            period_days: DEFAULT_PERIOD_DAYS,
            superjob_catalogues: None,
            estimate_mode: EstimateMode::default(),
            output_format: OutputFormat::default(),
            headhunter_url: HEADHUNTER_URL.to_string(),
            superjob_url: SUPERJOB_URL.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn search_term(&self, language: &str) -> String {
        format!("{} {}", self.occupation, language)
    }

    pub fn headhunter_settings(&self) -> HeadHunterSettings {
        HeadHunterSettings {
            base_url: self.headhunter_url.trim_end_matches('/').to_string(),
            period_days: Some(self.period_days),
            per_page: HEADHUNTER_PER_PAGE,
        }
    }

    /// `None` when no API key is configured.
    pub fn superjob_settings(&self) -> Option<SuperJobSettings> {
        let api_key = self.superjob_api_key.as_deref()?.trim();
        if api_key.is_empty() {
            return None;
        }
        Some(SuperJobSettings {
            base_url: self.superjob_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            catalogues: self.superjob_catalogues.clone(),
            count: SUPERJOB_COUNT,
        })
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("occupation", &self.occupation)?;
        validation::validate_non_empty_list("languages", &self.languages)?;
        if let Some(area) = &self.area {
            validation::validate_non_empty_string("area", area)?;
        }
        // HeadHunter rejects periods above 30 days
        validation::validate_range("period_days", self.period_days, 1, 30)?;
        validation::validate_url("headhunter_url", &self.headhunter_url)?;
        validation::validate_url("superjob_url", &self.superjob_url)?;
        Ok(())
    }
}
