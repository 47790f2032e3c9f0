use crate::adapters::build_client;
use crate::core::{
    AreaId, SalaryRange, Vacancy, VacancyPage, VacancyProvider, VacancyQuery,
};
use crate::utils::error::{Result, VacancyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const HEADHUNTER_URL: &str = "https://api.hh.ru";
pub const HEADHUNTER_PER_PAGE: u32 = 40;

#[derive(Debug, Clone)]
pub struct HeadHunterSettings {
    pub base_url: String,
    /// Only vacancies published within this many days.
    pub period_days: Option<u32>,
    pub per_page: u32,
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            base_url: HEADHUNTER_URL.to_string(),
            period_days: Some(30),
            per_page: HEADHUNTER_PER_PAGE,
        }
    }
}

/// Node of the `/areas` tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<Area>,
}

/// Depth-first search, parents before children, first exact match wins.
pub fn find_area<'a>(areas: &'a [Area], name: &str) -> Option<&'a Area> {
    for area in areas {
        if area.name == name {
            return Some(area);
        }
        if let Some(found) = find_area(&area.areas, name) {
            return Some(found);
        }
    }
    None
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Item {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<u64>,
    to: Option<u64>,
    #[serde(default)]
    currency: String,
}

impl From<Item> for Vacancy {
    fn from(item: Item) -> Self {
        Vacancy {
            salary: item.salary.map(|salary| SalaryRange {
                from: salary.from,
                to: salary.to,
                currency: salary.currency,
            }),
        }
    }
}

pub struct HeadHunter {
    client: Client,
    settings: HeadHunterSettings,
}

impl HeadHunter {
    pub fn new(settings: HeadHunterSettings) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            settings,
        })
    }

    pub async fn fetch_areas(&self) -> Result<Vec<Area>> {
        let url = format!("{}/areas", self.settings.base_url);
        tracing::debug!("Requesting area tree from {}", url);

        let areas = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(areas)
    }
}

#[async_trait]
impl VacancyProvider for HeadHunter {
    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn currency(&self) -> &str {
        "RUR"
    }

    async fn resolve_area(&self, name: &str) -> Result<AreaId> {
        let areas = self.fetch_areas().await?;
        find_area(&areas, name)
            .map(|area| AreaId(area.id.clone()))
            .ok_or_else(|| VacancyError::LocationNotFound {
                provider: self.name().to_string(),
                area: name.to_string(),
            })
    }

    async fn fetch_page(&self, query: &VacancyQuery, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/vacancies", self.settings.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("text", query.text.clone()),
            ("vacancy_search_fields", "name".to_string()),
            ("page", page.to_string()),
            ("per_page", self.settings.per_page.to_string()),
        ];
        if let Some(area) = &query.area {
            params.push(("area", area.to_string()));
        }
        if let Some(period) = self.settings.period_days {
            params.push(("period", period.to_string()));
        }

        tracing::debug!("GET {} page={} text={}", url, page, query.text);
        let response: SearchResponse = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(VacancyPage {
            vacancies: response.items.into_iter().map(Vacancy::from).collect(),
            pages: response.pages,
        })
    }
}
