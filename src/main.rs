use clap::Parser;
use vacancy_stats::config::cli::load_env_file;
use vacancy_stats::utils::error::ErrorSeverity;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{CliConfig, ReportEngine};

#[tokio::main]
async fn main() {
    // .env 要在 clap 讀取 SUPERJOB_API_KEY 之前載入
    let env_file = load_env_file(None);
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vacancy-stats");
    match env_file {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!("{}", e),
    }

    let config = match cli.report_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "Languages: {:?}, area: {:?}, period: {} days, estimate: {:?}, SuperJob key: {}",
        config.languages,
        config.area,
        config.period_days,
        config.estimate_mode,
        if config.superjob_api_key.is_some() { "set" } else { "unset" }
    );

    let engine = ReportEngine::new(config);
    let mut stdout = std::io::stdout().lock();

    match engine.run(&mut stdout).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} report(s), {} provider(s) skipped",
                summary.reports().count(),
                summary.skipped()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
