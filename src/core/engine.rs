use crate::adapters::{HeadHunter, SuperJob};
use crate::config::ReportConfig;
use crate::core::collector::collect;
use crate::core::render::{render, render_table, OutputFormat};
use crate::core::{Report, VacancyProvider, VacancyQuery};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Rendered(Report),
    Skipped { provider: String, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ProviderOutcome>,
}

impl RunSummary {
    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ProviderOutcome::Rendered(report) => Some(report),
            ProviderOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, ProviderOutcome::Skipped { .. }))
            .count()
    }
}

pub struct ReportEngine {
    config: ReportConfig,
}

impl ReportEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// HeadHunter always, SuperJob only when an API key is configured.
    pub fn providers(&self) -> Result<Vec<Box<dyn VacancyProvider>>> {
        let mut providers: Vec<Box<dyn VacancyProvider>> =
            vec![Box::new(HeadHunter::new(self.config.headhunter_settings())?)];

        match self.config.superjob_settings() {
            Some(settings) => providers.push(Box::new(SuperJob::new(settings)?)),
            None => tracing::info!("SUPERJOB_API_KEY is not set, skipping SuperJob"),
        }

        Ok(providers)
    }

    pub async fn build_report(&self, provider: &dyn VacancyProvider) -> Result<Report> {
        let area = match &self.config.area {
            Some(name) => {
                let id = provider.resolve_area(name).await?;
                tracing::debug!("{}: area '{}' resolved to {}", provider.name(), name, id);
                Some(id)
            }
            None => None,
        };

        let title = match &self.config.area {
            Some(name) => format!("{} {}", provider.name(), name),
            None => provider.name().to_string(),
        };
        let mut report = Report::new(provider.name(), title);

        for language in &self.config.languages {
            let query = VacancyQuery {
                text: self.config.search_term(language),
                area: area.clone(),
            };
            let stat = collect(provider, &query, self.config.estimate_mode).await?;
            tracing::info!(
                "{}: {} found={} processed={} average={:?}",
                provider.name(),
                language,
                stat.found,
                stat.processed,
                stat.average
            );
            report.push(language.clone(), stat);
        }

        Ok(report)
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let providers = self.providers()?;
        self.run_with(&providers, out).await
    }

    /// An unknown area only skips that provider; every other error ends the run.
    /// Tables are written as each provider finishes, CSV and JSON once at the end
    /// so stdout holds a single document.
    pub async fn run_with<W: Write>(
        &self,
        providers: &[Box<dyn VacancyProvider>],
        out: &mut W,
    ) -> Result<RunSummary> {
        let format = self.config.output_format;
        let mut summary = RunSummary::default();

        for provider in providers {
            tracing::info!("Collecting vacancies from {}", provider.name());

            match self.build_report(provider.as_ref()).await {
                Ok(report) => {
                    if format == OutputFormat::Table {
                        writeln!(out, "{}", render_table(&report))?;
                    }
                    summary.outcomes.push(ProviderOutcome::Rendered(report));
                }
                Err(e) if e.is_location_not_found() => {
                    tracing::debug!("Skipping {}: {}", provider.name(), e);
                    eprintln!("Error: {}", e);
                    summary.outcomes.push(ProviderOutcome::Skipped {
                        provider: provider.name().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        if format != OutputFormat::Table {
            let reports: Vec<Report> = summary.reports().cloned().collect();
            let text = render(&reports, format)?;
            writeln!(out, "{}", text.trim_end())?;
        }

        Ok(summary)
    }
}
