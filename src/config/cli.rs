use crate::adapters::headhunter::HEADHUNTER_URL;
use crate::adapters::superjob::SUPERJOB_URL;
use crate::config::toml_config::TomlConfig;
use crate::config::{ReportConfig, DEFAULT_AREA, DEFAULT_OCCUPATION, DEFAULT_PERIOD_DAYS};
use crate::core::render::OutputFormat;
use crate::domain::salary::EstimateMode;
use crate::utils::error::{Result, VacancyError};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Programmer vacancies and average salaries from HeadHunter and SuperJob")]
pub struct CliConfig {
    #[arg(
        long,
        help = "Read the report settings from a TOML file instead of flags",
        conflicts_with_all = [
            "occupation",
            "languages",
            "area",
            "no_area",
            "period",
            "catalogues",
            "estimate",
            "format",
            "headhunter_url",
            "superjob_url",
        ]
    )]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_OCCUPATION)]
    pub occupation: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Java,Python,PHP,C,C++,C#,Go,JavaScript"
    )]
    pub languages: Vec<String>,

    #[arg(long, default_value = DEFAULT_AREA)]
    pub area: String,

    #[arg(long, help = "Search everywhere instead of a single area")]
    pub no_area: bool,

    #[arg(long, env = "SUPERJOB_API_KEY", hide_env_values = true)]
    pub superjob_api_key: Option<String>,

    #[arg(long, default_value_t = DEFAULT_PERIOD_DAYS, help = "Recency window in days")]
    pub period: u32,

    #[arg(long, help = "SuperJob catalogue filter")]
    pub catalogues: Option<String>,

    #[arg(long, value_enum, default_value_t = EstimateMode::HalfRange)]
    pub estimate: EstimateMode,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, default_value = HEADHUNTER_URL)]
    pub headhunter_url: String,

    #[arg(long, default_value = SUPERJOB_URL)]
    pub superjob_url: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// 載入 .env：`path` 為 None 時找工作目錄的 .env，找不到不算錯誤。
/// 已存在的環境變數不會被覆蓋。必須在 `CliConfig::parse()` 之前呼叫。
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if path.is_none() && e.not_found() => Ok(None),
        Err(e) => Err(VacancyError::ConfigError {
            message: format!("Failed to load .env file: {}", e),
        }),
    }
}

impl CliConfig {
    /// 組合最終配置：有 --config 時以 TOML 為準
    pub fn report_config(&self) -> Result<ReportConfig> {
        if let Some(path) = &self.config {
            let mut config = TomlConfig::from_file(path)?.into_report_config();
            if config.superjob_api_key.is_none() {
                config.superjob_api_key = self.superjob_api_key.clone();
            }
            return Ok(config);
        }

        Ok(ReportConfig {
            occupation: self.occupation.clone(),
            languages: self.languages.clone(),
            area: (!self.no_area).then(|| self.area.clone()),
            superjob_api_key: self.superjob_api_key.clone(),
            period_days: self.period,
            superjob_catalogues: self.catalogues.clone(),
            estimate_mode: self.estimate,
            output_format: self.format,
            headhunter_url: self.headhunter_url.clone(),
            superjob_url: self.superjob_url.clone(),
        })
    }
}
