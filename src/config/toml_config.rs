use crate::config::{ReportConfig, DEFAULT_OCCUPATION, DEFAULT_PERIOD_DAYS};
use crate::core::render::OutputFormat;
use crate::domain::salary::EstimateMode;
use crate::utils::error::{Result, VacancyError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub headhunter: HeadHunterConfig,
    #[serde(default)]
    pub superjob: SuperJobConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub occupation: Option<String>,
    pub languages: Option<Vec<String>>,
    /// Omit to search without an area filter.
    pub area: Option<String>,
    pub period_days: Option<u32>,
    pub estimate_mode: Option<EstimateMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadHunterConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuperJobConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub catalogues: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VacancyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VacancyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPERJOB_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(ENV_VAR_PATTERN).map_err(|e| VacancyError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn is_unresolved(value: &str) -> bool {
        Regex::new(ENV_VAR_PATTERN)
            .map(|re| re.is_match(value))
            .unwrap_or(false)
    }

    pub fn into_report_config(self) -> ReportConfig {
        let defaults = ReportConfig::default();

        let api_key = self
            .superjob
            .api_key
            .filter(|key| !key.trim().is_empty() && !Self::is_unresolved(key));

        ReportConfig {
            occupation: self
                .search
                .occupation
                .unwrap_or_else(|| DEFAULT_OCCUPATION.to_string()),
            languages: self.search.languages.unwrap_or(defaults.languages),
            area: self.search.area,
            superjob_api_key: api_key,
            period_days: self.search.period_days.unwrap_or(DEFAULT_PERIOD_DAYS),
            superjob_catalogues: self.superjob.catalogues,
            estimate_mode: self.search.estimate_mode.unwrap_or_default(),
            output_format: self.output.format.unwrap_or_default(),
            headhunter_url: self.headhunter.url.unwrap_or(defaults.headhunter_url),
            superjob_url: self.superjob.url.unwrap_or(defaults.superjob_url),
        }
    }
}
