use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use vacancy_stats::{OutputFormat, ProviderOutcome, ReportConfig, ReportEngine, VacancyError};

fn cells(line: &str) -> Vec<String> {
    line.trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn find_row(table: &str, language: &str) -> Option<Vec<String>> {
    table
        .lines()
        .map(cells)
        .find(|row| row.first().map(String::as_str) == Some(language))
}

fn mock_areas(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/areas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"id": "113", "name": "Root", "areas": [
                    {"id": "1", "name": "Moscow", "areas": []}
                ]}
            ]));
    })
}

fn config(headhunter: &MockServer) -> ReportConfig {
    ReportConfig {
        occupation: "Developer".to_string(),
        languages: vec!["Python".to_string(), "Go".to_string()],
        area: Some("Moscow".to_string()),
        headhunter_url: headhunter.base_url(),
        ..ReportConfig::default()
    }
}

#[tokio::test]
async fn test_end_to_end_headhunter_table() -> Result<()> {
    let server = MockServer::start();
    let areas_mock = mock_areas(&server);

    let python_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Developer Python")
            .query_param("area", "1");
        then.status(200).json_body(json!({
            "items": [{"salary": {"from": 50000, "to": 70000, "currency": "RUR"}}],
            "pages": 1
        }));
    });
    let go_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Developer Go")
            .query_param("area", "1");
        then.status(200).json_body(json!({"items": [], "pages": 0}));
    });

    let engine = ReportEngine::new(config(&server));
    let mut out = Vec::new();
    let summary = engine.run(&mut out).await?;

    areas_mock.assert_hits(1);
    python_mock.assert_hits(1);
    go_mock.assert_hits(1);
    assert_eq!(summary.reports().count(), 1);

    let table = String::from_utf8(out)?;
    assert!(table.starts_with("+HeadHunter Moscow"));
    assert_eq!(
        find_row(&table, "Python").unwrap(),
        vec!["Python", "1", "1", "10000"]
    );
    assert_eq!(find_row(&table, "Go").unwrap(), vec!["Go", "0", "0", "-"]);
    Ok(())
}

#[tokio::test]
async fn test_headhunter_pagination_over_http() -> Result<()> {
    let server = MockServer::start();
    mock_areas(&server);

    let first = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200).json_body(json!({
            "items": [
                {"salary": {"from": 100000, "to": null, "currency": "RUR"}},
                {"salary": {"from": 3000, "to": 4000, "currency": "USD"}}
            ],
            "pages": 2
        }));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(200).json_body(json!({
            "items": [
                {"salary": null},
                {"salary": {"from": null, "to": 100000, "currency": "RUR"}}
            ],
            "pages": 2
        }));
    });
    let third = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "2");
        then.status(200).json_body(json!({"items": [], "pages": 2}));
    });

    let engine = ReportEngine::new(ReportConfig {
        languages: vec!["Rust".to_string()],
        output_format: OutputFormat::Json,
        ..config(&server)
    });
    let mut out = Vec::new();
    engine.run(&mut out).await?;

    first.assert_hits(1);
    second.assert_hits(1);
    third.assert_hits(0);

    let reports: serde_json::Value = serde_json::from_slice(&out)?;
    let rust = &reports[0]["rows"][0];
    assert_eq!(rust["found"], 4);
    assert_eq!(rust["processed"], 2);
    // (120000 + 80000) / 2
    assert_eq!(rust["average"], 100000);
    Ok(())
}

#[tokio::test]
async fn test_unknown_superjob_town_does_not_hide_headhunter() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_areas(&hh);
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(json!({"items": [], "pages": 1}));
    });

    let towns = sj.mock(|when, then| {
        when.method(GET).path("/2.0/towns/");
        then.status(200).json_body(json!({"objects": [], "total": 0}));
    });
    let sj_vacancies = sj.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(json!({"objects": [], "total": 0}));
    });

    let engine = ReportEngine::new(ReportConfig {
        superjob_api_key: Some("v3.test".to_string()),
        superjob_url: sj.url("/2.0"),
        ..config(&hh)
    });
    let mut out = Vec::new();
    let summary = engine.run(&mut out).await?;

    towns.assert_hits(1);
    sj_vacancies.assert_hits(0);
    assert_eq!(summary.skipped(), 1);
    assert!(matches!(
        &summary.outcomes[1],
        ProviderOutcome::Skipped { provider, .. } if provider == "SuperJob"
    ));
    assert!(String::from_utf8(out)?.contains("+HeadHunter Moscow"));
    Ok(())
}

#[tokio::test]
async fn test_superjob_report_in_rubles_only() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_areas(&hh);
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(json!({"items": [], "pages": 1}));
    });

    sj.mock(|when, then| {
        when.method(GET).path("/2.0/towns/").query_param("keyword", "Moscow");
        then.status(200)
            .json_body(json!({"objects": [{"id": 4, "title": "Moscow"}], "total": 1}));
    });
    let vacancies = sj.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .header("x-api-app-id", "v3.test")
            .query_param("town", "4");
        then.status(200).json_body(json!({
            "objects": [
                {"payment_from": 50000, "payment_to": 70000, "currency": "rub"},
                {"payment_from": 1000, "payment_to": 0, "currency": "usd"},
                {"payment_from": 0, "payment_to": 0, "currency": "rub"}
            ],
            "total": 3
        }));
    });

    let engine = ReportEngine::new(ReportConfig {
        languages: vec!["Python".to_string()],
        superjob_api_key: Some("v3.test".to_string()),
        superjob_url: sj.url("/2.0"),
        ..config(&hh)
    });
    let mut out = Vec::new();
    let summary = engine.run(&mut out).await?;

    vacancies.assert_hits(1);
    let superjob = summary.reports().nth(1).unwrap();
    assert_eq!(superjob.title, "SuperJob Moscow");
    let python = superjob.get("Python").unwrap();
    assert_eq!(python.found, 3);
    assert_eq!(python.processed, 1);
    assert_eq!(python.average, Some(10000));
    Ok(())
}

#[tokio::test]
async fn test_json_output_with_both_providers() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_areas(&hh);
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(json!({
            "items": [{"salary": {"from": 50000, "to": 70000, "currency": "RUR"}}],
            "pages": 1
        }));
    });
    sj.mock(|when, then| {
        when.method(GET).path("/2.0/towns/");
        then.status(200).json_body(json!({"objects": [{"id": 4, "title": "Moscow"}]}));
    });
    sj.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(json!({
            "objects": [{"payment_from": 100000, "payment_to": 0, "currency": "rub"}],
            "total": 1,
            "more": false
        }));
    });

    let engine = ReportEngine::new(ReportConfig {
        languages: vec!["Python".to_string()],
        output_format: OutputFormat::Json,
        superjob_api_key: Some("v3.test".to_string()),
        superjob_url: sj.url("/2.0"),
        ..config(&hh)
    });
    let mut out = Vec::new();
    engine.run(&mut out).await?;

    let reports: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(reports.as_array().map(Vec::len), Some(2));
    assert_eq!(reports[0]["title"], "HeadHunter Moscow");
    assert_eq!(reports[0]["rows"][0]["average"], 10000);
    assert_eq!(reports[1]["title"], "SuperJob Moscow");
    assert_eq!(reports[1]["rows"][0]["average"], 120000);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_stops_run() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_areas(&hh);
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(500);
    });
    let towns = sj.mock(|when, then| {
        when.method(GET).path("/2.0/towns/");
        then.status(200).json_body(json!({"objects": [{"id": 4}], "total": 1}));
    });

    let engine = ReportEngine::new(ReportConfig {
        superjob_api_key: Some("v3.test".to_string()),
        superjob_url: sj.url("/2.0"),
        ..config(&hh)
    });
    let mut out = Vec::new();
    let result = engine.run(&mut out).await;

    assert!(matches!(result, Err(VacancyError::ApiError(_))));
    towns.assert_hits(0);
    assert!(out.is_empty());
    Ok(())
}
