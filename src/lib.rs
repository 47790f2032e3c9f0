pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::ReportConfig;
pub use core::engine::{ProviderOutcome, ReportEngine, RunSummary};
pub use core::render::OutputFormat;
pub use domain::salary::{estimate, EstimateMode};
pub use utils::error::{Result, VacancyError};
