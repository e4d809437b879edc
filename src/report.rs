//! Grouping and report rendering for classified URL records.

use crate::buckets::Bucket;
use crate::records::UrlRecord;
use crate::table;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header of the per-record detail export
pub const DETAIL_HEADER: &str = "bucket,url,last_crawled";

/// Records grouped by bucket
///
/// The grouping is explicitly ordered: buckets appear in the order they
/// were first populated while scanning the input, and records within a
/// bucket keep their original input order.
#[derive(Debug, Default)]
pub struct BucketedRecords {
    groups: Vec<(Bucket, Vec<UrlRecord>)>,
}

impl BucketedRecords {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a record to its bucket, creating the group on first use
    pub fn push(&mut self, bucket: Bucket, record: UrlRecord) {
        match self.groups.iter_mut().find(|(b, _)| *b == bucket) {
            Some((_, records)) => records.push(record),
            None => self.groups.push((bucket, vec![record])),
        }
    }

    /// Groups in first-populated order
    pub fn iter(&self) -> impl Iterator<Item = &(Bucket, Vec<UrlRecord>)> {
        self.groups.iter()
    }

    /// Total record count across all buckets
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Whether no records were grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Classifies records and groups them by bucket, preserving encounter order
pub fn group_records(records: Vec<UrlRecord>) -> BucketedRecords {
    let mut grouped = BucketedRecords::new();
    for record in records {
        let bucket = Bucket::for_url(&record.url);
        grouped.push(bucket, record);
    }
    grouped
}

/// Per-bucket counts sorted by count descending
///
/// The sort is stable: buckets with equal counts keep their
/// first-populated order, so the summary is deterministic for a given
/// input.
pub fn summarize(grouped: &BucketedRecords) -> Vec<(Bucket, usize)> {
    let mut counts: Vec<(Bucket, usize)> = grouped
        .iter()
        .map(|(bucket, records)| (*bucket, records.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Renders the summary: one `<bucket>: <count>` line per populated bucket
pub fn render_summary(summary: &[(Bucket, usize)]) -> String {
    let mut out = String::new();
    for (bucket, count) in summary {
        out.push_str(&format!("{}: {}\n", bucket, count));
    }
    out
}

/// Renders the detail table, grouped by bucket in first-populated order
pub fn render_detail(grouped: &BucketedRecords) -> String {
    let mut rows = Vec::with_capacity(grouped.total());
    for (bucket, records) in grouped.iter() {
        for record in records {
            rows.push(vec![
                bucket.label().to_string(),
                record.url.clone(),
                record.last_crawled.clone(),
            ]);
        }
    }
    table::render(DETAIL_HEADER, &rows)
}

/// Writes a rendered report to disk
pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> UrlRecord {
        UrlRecord::new(url.to_string(), "2024-01-01".to_string())
    }

    #[test]
    fn test_grouping_preserves_encounter_order() {
        let records = vec![
            record("https://site/booking/1"),
            record("https://site/misc-1"),
            record("https://site/booking/2"),
            record("https://site/locations/cape-town"),
        ];
        let grouped = group_records(records);

        let order: Vec<Bucket> = grouped.iter().map(|(bucket, _)| *bucket).collect();
        assert_eq!(order, vec![Bucket::Booking, Bucket::Misc, Bucket::Locations]);

        // Within a bucket, records keep input order
        let (_, booking) = grouped
            .iter()
            .find(|(bucket, _)| *bucket == Bucket::Booking)
            .unwrap();
        assert_eq!(booking[0].url, "https://site/booking/1");
        assert_eq!(booking[1].url, "https://site/booking/2");
    }

    #[test]
    fn test_every_record_is_grouped() {
        let records = vec![
            record("https://site/a"),
            record("https://site/booking"),
            record("https://site/blog/x"),
            record("https://site/b"),
        ];
        let count = records.len();
        let grouped = group_records(records);
        assert_eq!(grouped.total(), count);
    }

    #[test]
    fn test_summary_is_sorted_by_count_descending() {
        // a:3, b:5, c:1 must come out b, a, c
        let mut grouped = BucketedRecords::new();
        for i in 0..3 {
            grouped.push(Bucket::Booking, record(&format!("https://site/booking/{}", i)));
        }
        for i in 0..5 {
            grouped.push(Bucket::Misc, record(&format!("https://site/{}", i)));
        }
        grouped.push(Bucket::Legal, record("https://site/privacy"));

        let summary = summarize(&grouped);
        assert_eq!(
            summary,
            vec![(Bucket::Misc, 5), (Bucket::Booking, 3), (Bucket::Legal, 1)]
        );
    }

    #[test]
    fn test_summary_ties_keep_first_populated_order() {
        let mut grouped = BucketedRecords::new();
        grouped.push(Bucket::Services, record("https://site/services/a"));
        grouped.push(Bucket::Booking, record("https://site/booking/a"));

        let summary = summarize(&grouped);
        assert_eq!(summary, vec![(Bucket::Services, 1), (Bucket::Booking, 1)]);
    }

    #[test]
    fn test_render_summary() {
        let summary = vec![(Bucket::Misc, 2), (Bucket::Booking, 1)];
        assert_eq!(render_summary(&summary), "misc: 2\nbooking: 1\n");
    }

    #[test]
    fn test_render_detail_orders_differ_from_summary() {
        // One booking record first, then two misc records: the detail
        // listing leads with booking (first populated), the summary with
        // misc (higher count)
        let records = vec![
            record("https://site/booking/1"),
            record("https://site/x"),
            record("https://site/y"),
        ];
        let grouped = group_records(records);

        let detail = render_detail(&grouped);
        let lines: Vec<&str> = detail.lines().collect();
        assert_eq!(lines[0], "bucket,url,last_crawled");
        assert_eq!(lines[1], "\"booking\",\"https://site/booking/1\",\"2024-01-01\"");
        assert_eq!(lines[2], "\"misc\",\"https://site/x\",\"2024-01-01\"");
        assert_eq!(lines[3], "\"misc\",\"https://site/y\",\"2024-01-01\"");

        let summary = summarize(&grouped);
        assert_eq!(summary, vec![(Bucket::Misc, 2), (Bucket::Booking, 1)]);
    }

    #[test]
    fn test_empty_grouping() {
        let grouped = group_records(Vec::new());
        assert!(grouped.is_empty());
        assert_eq!(grouped.total(), 0);
        assert_eq!(render_summary(&summarize(&grouped)), "");
        assert_eq!(render_detail(&grouped), "bucket,url,last_crawled\n");
    }
}
