use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-specific location identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaId(pub String);

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Salary bounds as reported by a vacancy. A zero bound counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vacancy {
    pub salary: Option<SalaryRange>,
}

/// What to search for on a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyQuery {
    pub text: String,
    pub area: Option<AreaId>,
}

/// One page of search results plus the provider's current page count.
#[derive(Debug, Clone, Default)]
pub struct VacancyPage {
    pub vacancies: Vec<Vacancy>,
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VacancyStat {
    pub found: usize,
    pub processed: usize,
    /// Truncated mean of the usable estimates; `None` when nothing was processed.
    pub average: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    #[serde(flatten)]
    pub stat: VacancyStat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub provider: String,
    pub title: String,
    pub rows: Vec<LanguageStat>,
}

impl Report {
    pub fn new(provider: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, language: impl Into<String>, stat: VacancyStat) {
        self.rows.push(LanguageStat {
            language: language.into(),
            stat,
        });
    }

    pub fn get(&self, language: &str) -> Option<&VacancyStat> {
        self.rows
            .iter()
            .find(|row| row.language == language)
            .map(|row| &row.stat)
    }
}
