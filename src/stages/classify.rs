use crate::buckets::Bucket;
use crate::config::ClassifierConfig;
use crate::error::{Result, SiftError};
use crate::records::UrlRecord;
use crate::report;
use crate::table::Table;
use std::fs;
use std::path::Path;

/// Accepted spellings of the timestamp column, in lookup order.
/// Crawler exports use `Last crawled`; the parse stage writes `LastCrawled`.
const LAST_CRAWLED_COLUMNS: &[&str] = &["Last crawled", "LastCrawled"];

/// Outcome of a classify stage run
#[derive(Debug, Clone)]
pub struct ClassifyOutcome {
    /// Per-bucket counts, descending
    pub summary: Vec<(Bucket, usize)>,

    /// Total number of records classified
    pub total: usize,
}

/// Run the classify stage: URL table in, summary and detail reports out
pub fn run(config: &ClassifierConfig) -> Result<ClassifyOutcome> {
    ::log::info!("Classifying URL table from {}", config.input_path);

    let text = fs::read_to_string(&config.input_path)?;
    let records = read_records(&text)?;
    let total = records.len();

    let grouped = report::group_records(records);
    let summary = report::summarize(&grouped);

    report::save_report(
        &report::render_summary(&summary),
        Path::new(&config.summary_path),
    )?;
    report::save_report(
        &report::render_detail(&grouped),
        Path::new(&config.detail_path),
    )?;

    ::log::info!("Classified {} records into {} buckets", total, summary.len());

    Ok(ClassifyOutcome { summary, total })
}

/// Resolve the table schema once and convert rows into records
///
/// The `URL` column is strictly required; the timestamp column accepts
/// either spelling in `LAST_CRAWLED_COLUMNS`. A row without a value at a
/// resolved column index is a fatal error.
pub fn read_records(text: &str) -> Result<Vec<UrlRecord>> {
    let table = Table::parse(text);
    let url_column = table.require_column(&["URL"])?;
    let crawled_column = table.require_column(LAST_CRAWLED_COLUMNS)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let url = row.get(url_column).ok_or(SiftError::MissingField {
            row: i + 1,
            column: "URL",
        })?;
        let last_crawled = row.get(crawled_column).ok_or(SiftError::MissingField {
            row: i + 1,
            column: "Last crawled",
        })?;
        records.push(UrlRecord::new(url.clone(), last_crawled.clone()));
    }
    Ok(records)
}
