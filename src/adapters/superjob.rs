use crate::adapters::build_client;
use crate::core::{
    AreaId, SalaryRange, Vacancy, VacancyPage, VacancyProvider, VacancyQuery,
};
use crate::utils::error::{Result, VacancyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const SUPERJOB_URL: &str = "https://api.superjob.ru/2.0";
pub const SUPERJOB_COUNT: u32 = 100;
/// SuperJob never serves results past this offset.
pub const SUPERJOB_MAX_RESULTS: u32 = 500;
const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone)]
pub struct SuperJobSettings {
    pub base_url: String,
    pub api_key: String,
    /// Catalogue (industry) filter, passed through as-is.
    pub catalogues: Option<String>,
    pub count: u32,
}

impl SuperJobSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: SUPERJOB_URL.to_string(),
            api_key: api_key.into(),
            catalogues: None,
            count: SUPERJOB_COUNT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TownsResponse {
    #[serde(default)]
    objects: Vec<Town>,
}

#[derive(Debug, Deserialize)]
struct Town {
    id: i64,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    objects: Vec<Item>,
    #[serde(default)]
    total: u32,
    more: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Item {
    payment_from: Option<u64>,
    payment_to: Option<u64>,
    #[serde(default)]
    currency: String,
}

impl From<Item> for Vacancy {
    fn from(item: Item) -> Self {
        Vacancy {
            salary: Some(SalaryRange {
                from: item.payment_from,
                to: item.payment_to,
                currency: item.currency,
            }),
        }
    }
}

pub struct SuperJob {
    client: Client,
    settings: SuperJobSettings,
}

impl SuperJob {
    pub fn new(settings: SuperJobSettings) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            settings,
        })
    }

    /// `total` counts vacancies, not pages. Clamped to the result cap, and
    /// cut at the current page once SuperJob reports `more: false`.
    fn page_count(&self, page: u32, total: u32, more: Option<bool>) -> u32 {
        let pages = total
            .min(SUPERJOB_MAX_RESULTS)
            .div_ceil(self.settings.count.max(1));
        match more {
            Some(false) => pages.min(page + 1),
            _ => pages,
        }
    }
}

#[async_trait]
impl VacancyProvider for SuperJob {
    fn name(&self) -> &str {
        "SuperJob"
    }

    fn currency(&self) -> &str {
        "rub"
    }

    async fn resolve_area(&self, name: &str) -> Result<AreaId> {
        let url = format!("{}/towns/", self.settings.base_url);
        tracing::debug!("Looking up town '{}' at {}", name, url);

        let response: TownsResponse = self
            .client
            .get(&url)
            .query(&[("keyword", name), ("all", "true")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let town = response
            .objects
            .into_iter()
            .next()
            .ok_or_else(|| VacancyError::LocationNotFound {
                provider: self.name().to_string(),
                area: name.to_string(),
            })?;
        tracing::debug!("Town '{}' resolved to {} ({})", name, town.id, town.title);
        Ok(AreaId(town.id.to_string()))
    }

    async fn fetch_page(&self, query: &VacancyQuery, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/vacancies/", self.settings.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("keyword", query.text.clone()),
            ("page", page.to_string()),
            ("count", self.settings.count.to_string()),
        ];
        if let Some(area) = &query.area {
            params.push(("town", area.to_string()));
        }
        if let Some(catalogues) = &self.settings.catalogues {
            params.push(("catalogues", catalogues.clone()));
        }

        tracing::debug!("GET {} page={} keyword={}", url, page, query.text);
        let response: SearchResponse = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.settings.api_key.as_str())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(VacancyPage {
            pages: self.page_count(page, response.total, response.more),
            vacancies: response.objects.into_iter().map(Vacancy::from).collect(),
        })
    }
}
