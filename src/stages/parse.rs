use crate::config::RawDumpConfig;
use crate::error::Result;
use crate::parsers;
use crate::report::save_report;
use crate::table;
use std::fs;
use std::path::Path;

/// Header of the normalized URL table
pub const TABLE_HEADER: &str = "URL,LastCrawled";

/// Outcome of a parse stage run
#[derive(Debug, Clone, Copy)]
pub struct ParseOutcome {
    /// Number of records written to the output table
    pub records_written: usize,
}

/// Run the parse stage: raw 404 dump in, normalized URL table out
pub fn run(config: &RawDumpConfig) -> Result<ParseOutcome> {
    ::log::info!("Parsing raw dump from {}", config.input_path);

    let raw = fs::read_to_string(&config.input_path)?;
    let records = parsers::parse_dump(&raw);

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| vec![record.url.clone(), record.last_crawled.clone()])
        .collect();
    save_report(
        &table::render(TABLE_HEADER, &rows),
        Path::new(&config.output_path),
    )?;

    ::log::info!(
        "Wrote {} records to {}",
        records.len(),
        config.output_path
    );

    Ok(ParseOutcome {
        records_written: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dump.txt");
        let output = dir.path().join("table.csv");
        fs::write(
            &input,
            "https://site/a\n\n2024-01-01\n\nhttps://site/b\n\n2024-01-02",
        )
        .unwrap();

        let config = RawDumpConfig {
            input_path: input.to_string_lossy().into_owned(),
            output_path: output.to_string_lossy().into_owned(),
        };
        let outcome = run(&config).unwrap();
        assert_eq!(outcome.records_written, 2);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "URL,LastCrawled\n\
             \"https://site/a\",\"2024-01-01\"\n\
             \"https://site/b\",\"2024-01-02\"\n"
        );
    }

    #[test]
    fn test_run_escapes_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dump.txt");
        let output = dir.path().join("table.csv");
        fs::write(&input, "https://x/\"y\n\n2024-01-01").unwrap();

        let config = RawDumpConfig {
            input_path: input.to_string_lossy().into_owned(),
            output_path: output.to_string_lossy().into_owned(),
        };
        run(&config).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "URL,LastCrawled\n\"https://x/\"\"y\",\"2024-01-01\"\n"
        );
    }

    #[test]
    fn test_run_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = RawDumpConfig {
            input_path: dir
                .path()
                .join("does-not-exist.txt")
                .to_string_lossy()
                .into_owned(),
            output_path: dir.path().join("table.csv").to_string_lossy().into_owned(),
        };
        assert!(run(&config).is_err());
    }
}
