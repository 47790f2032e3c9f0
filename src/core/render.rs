use crate::core::Report;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary, RUB",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

fn rows(report: &Report) -> Vec<[String; 4]> {
    report
        .rows
        .iter()
        .map(|row| {
            [
                row.language.clone(),
                row.stat.found.to_string(),
                row.stat.processed.to_string(),
                row.stat
                    .average
                    .map(|average| average.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect()
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

/// ASCII table with the title embedded in the top border when it fits.
pub fn render_table(report: &Report) -> String {
    let header = HEADERS.map(str::to_string);
    let body = rows(report);

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let title_len = report.title.chars().count();
    let top = if title_len + 2 <= separator.chars().count() {
        let tail: String = separator.chars().skip(title_len + 1).collect();
        format!("+{}{}", report.title, tail)
    } else {
        separator.clone()
    };

    let mut lines = vec![top, line(&header, &widths), separator.clone()];
    lines.extend(body.iter().map(|row| line(row, &widths)));
    lines.push(separator);
    lines.join("\n")
}

/// One header, then a row per language of every report, tagged with the provider.
pub fn render_csv(reports: &[Report]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["provider", "language", "found", "processed", "average"])?;
    for report in reports {
        for row in &report.rows {
            writer.write_record([
                report.provider.clone(),
                row.language.clone(),
                row.stat.found.to_string(),
                row.stat.processed.to_string(),
                row.stat.average.map(|a| a.to_string()).unwrap_or_default(),
            ])?;
        }
    }
    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// A single JSON array holding every report.
pub fn render_json(reports: &[Report]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

pub fn render(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(reports
            .iter()
            .map(render_table)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => render_csv(reports),
        OutputFormat::Json => render_json(reports),
    }
}
