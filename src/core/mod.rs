pub mod collector;
pub mod engine;
pub mod render;

pub use crate::domain::model::{
    AreaId, LanguageStat, Report, SalaryRange, Vacancy, VacancyPage, VacancyQuery, VacancyStat,
};
pub use crate::domain::ports::VacancyProvider;
pub use crate::utils::error::Result;
