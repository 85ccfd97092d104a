use anyhow::Result;

use tagtrace_engine::{Statistic, StatisticValue, StringStatistics};

/// A computed statistics report, ready to render in any output format.
///
/// Rows follow the accumulator's configured kind set in report order.
/// Undefined values render as `-` (plain), `null` (JSON), and an empty cell
/// (CSV).
pub struct StatsReport {
    rows: Vec<(Statistic, Option<StatisticValue>)>,
}

impl StatsReport {
    pub fn from_summary(summary: &StringStatistics) -> Self {
        let rows = summary
            .statistics()
            .iter()
            .map(|kind| (kind, summary.statistic(kind)))
            .collect();
        Self { rows }
    }

    pub fn render_plain(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|(kind, _)| kind.display_name().len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (kind, value) in &self.rows {
            let rendered = match value {
                Some(value) => value.to_string(),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "{:<width$}  {}\n",
                kind.display_name(),
                rendered,
                width = width
            ));
        }
        out
    }

    pub fn render_json(&self) -> String {
        let mut map = serde_json::Map::new();
        for (kind, value) in &self.rows {
            let json_value = match value {
                Some(value) => serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
                None => serde_json::Value::Null,
            };
            map.insert(kind.id().to_string(), json_value);
        }
        serde_json::to_string_pretty(&serde_json::Value::Object(map))
            .unwrap_or_else(|_| "{}".to_string())
    }

    pub fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(self.rows.iter().map(|(kind, _)| kind.id()))?;
        writer.write_record(self.rows.iter().map(|(_, value)| match value {
            Some(value) => value.to_string(),
            None => String::new(),
        }))?;

        let data = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush csv output: {}", e))?;
        Ok(String::from_utf8(data)?)
    }
}
