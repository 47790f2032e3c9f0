use crate::domain::model::{AreaId, VacancyPage, VacancyQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A job board that can be searched page by page.
#[async_trait]
pub trait VacancyProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Currency code a salary must carry to be estimated.
    fn currency(&self) -> &str;

    /// Fails with `LocationNotFound` when the board has no such area.
    async fn resolve_area(&self, name: &str) -> Result<AreaId>;

    async fn fetch_page(&self, query: &VacancyQuery, page: u32) -> Result<VacancyPage>;
}
