use crate::core::{Vacancy, VacancyProvider, VacancyQuery, VacancyStat};
use crate::domain::salary::{estimate_with, EstimateMode};
use crate::utils::error::Result;

/// Fetch every page for `query`, starting at page 0 and stopping once the
/// next page index reaches the provider's reported page count.
pub async fn fetch_all<P>(provider: &P, query: &VacancyQuery) -> Result<Vec<Vacancy>>
where
    P: VacancyProvider + ?Sized,
{
    let mut vacancies = Vec::new();
    let mut page = 0;

    loop {
        let result = provider.fetch_page(query, page).await?;
        tracing::debug!(
            "{}: page {} of {} returned {} vacancies",
            provider.name(),
            page + 1,
            result.pages,
            result.vacancies.len()
        );
        vacancies.extend(result.vacancies);

        page += 1;
        if page >= result.pages {
            break;
        }
    }

    Ok(vacancies)
}

pub fn summarize(vacancies: &[Vacancy], currency: &str, mode: EstimateMode) -> VacancyStat {
    let estimates: Vec<f64> = vacancies
        .iter()
        .filter_map(|vacancy| vacancy.salary.as_ref())
        .filter(|salary| salary.currency == currency)
        .filter_map(|salary| estimate_with(mode, salary.from, salary.to))
        .collect();

    let average = if estimates.is_empty() {
        None
    } else {
        let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
        Some(mean.trunc() as i64)
    };

    VacancyStat {
        found: vacancies.len(),
        processed: estimates.len(),
        average,
    }
}

pub async fn collect<P>(provider: &P, query: &VacancyQuery, mode: EstimateMode) -> Result<VacancyStat>
where
    P: VacancyProvider + ?Sized,
{
    let vacancies = fetch_all(provider, query).await?;
    Ok(summarize(&vacancies, provider.currency(), mode))
}
