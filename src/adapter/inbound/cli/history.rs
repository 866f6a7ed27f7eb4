//! `unitconv history`.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{ConversionRecord, PartitionKey};
use crate::error::Result;
use crate::infrastructure::bootstrap::open_history;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    id: i64,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "When (UTC)")]
    when: String,
}

impl From<&ConversionRecord> for HistoryRow {
    fn from(record: &ConversionRecord) -> Self {
        let c = &record.conversion;
        Self {
            id: record.id,
            from: format!("{} {}", c.from_amount, c.from_label),
            to: format!("{} {}", c.to_amount, c.to_label),
            when: record
                .created_at()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Show one partition's history, newest first.
pub async fn execute_list(config: &Config, key: &str) -> Result<()> {
    let key: PartitionKey = key.parse()?;
    let history = open_history(config)?;
    let records = history.list(key).await?;

    if output::is_json() {
        output::document(&serde_json::json!({
            "partition": key.to_string(),
            "records": records,
        }));
        return Ok(());
    }

    output::heading(&format!("History: {key}"));
    if records.is_empty() {
        output::note("no conversions recorded");
        return Ok(());
    }
    let rows: Vec<HistoryRow> = records.iter().map(HistoryRow::from).collect();
    output::table(Table::new(rows));
    Ok(())
}

/// Delete one partition's history.
pub async fn execute_clear(config: &Config, key: &str) -> Result<()> {
    let key: PartitionKey = key.parse()?;
    let history = open_history(config)?;
    let removed = history.clear(key).await?;
    output::done(&format!("Removed {removed} record(s) from {key}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::testkit::record::new_record;

    #[test]
    fn row_formats_amounts_and_time() {
        let record = ConversionRecord::from_new(
            3,
            new_record(PartitionKey::Unit(Category::Length), "2", 0),
        );
        let row = HistoryRow::from(&record);
        assert_eq!(row.id, 3);
        assert_eq!(row.from, "2 Meter");
        assert_eq!(row.to, "2 Foot");
        assert_eq!(row.when, "1970-01-01 00:00:00");
    }
}
