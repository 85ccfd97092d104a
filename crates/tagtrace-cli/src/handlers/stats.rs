use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use tagtrace_engine::{Statistic, StatisticSet, StringStatistics};
use tagtrace_types::field_to_string;

use crate::output::StatsReport;
use crate::types::OutputFormat;

pub fn handle(
    input: Option<&Path>,
    column: Option<&str>,
    field: Option<&str>,
    stats: &[Statistic],
    format: OutputFormat,
) -> Result<()> {
    let set = if stats.is_empty() {
        StatisticSet::all()
    } else {
        stats.iter().copied().collect()
    };

    let values = collect_values(input, column, field)?;

    let mut summary = StringStatistics::new(set);
    summary.calculate(values);

    let report = StatsReport::from_summary(&summary);
    match format {
        OutputFormat::Plain => print!("{}", report.render_plain()),
        OutputFormat::Json => println!("{}", report.render_json()),
        OutputFormat::Csv => print!("{}", report.render_csv()?),
    }

    Ok(())
}

/// Pull the values to analyze out of the input, as optional strings
/// (`None` = missing).
fn collect_values(
    input: Option<&Path>,
    column: Option<&str>,
    field: Option<&str>,
) -> Result<Vec<Option<String>>> {
    let Some(path) = input else {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(plain_lines(&content));
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "csv" => {
            let column =
                column.with_context(|| "--column is required for CSV input".to_string())?;
            csv_column(path, column)
        }
        "jsonl" => {
            let field =
                field.with_context(|| "--field is required for JSONL input".to_string())?;
            jsonl_field(path, field)
        }
        _ => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(plain_lines(&content))
        }
    }
}

/// Plain input: one value per line, blank lines are missing.
fn plain_lines(content: &str) -> Vec<Option<String>> {
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

/// CSV input: empty cells are missing. The column is matched by header name
/// first, then as a zero-based index.
fn csv_column(path: &Path, column: &str) -> Result<Vec<Option<String>>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let index = match headers.iter().position(|header| header == column) {
        Some(index) => index,
        None => match column.parse::<usize>() {
            Ok(index) if index < headers.len() => index,
            _ => bail!(
                "column '{}' not found; available columns: {}",
                column,
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        },
    };

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = record.get(index).unwrap_or_default();
        values.push(if cell.is_empty() {
            None
        } else {
            Some(cell.to_string())
        });
    }

    Ok(values)
}

/// JSONL input: `null` or absent fields are missing; non-string scalars are
/// stringified.
fn jsonl_field(path: &Path, field: &str) -> Result<Vec<Option<String>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut values = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("{}:{} is not valid JSON", path.display(), number + 1))?;
        values.push(field_to_string(value.get(field)));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_treat_blank_as_missing() {
        let values = plain_lines("a\n\nb\n   \n");
        assert_eq!(
            values,
            vec![
                Some("a".to_string()),
                None,
                Some("b".to_string()),
                None,
            ]
        );
    }
}
