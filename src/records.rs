use serde::{Deserialize, Serialize};

/// A URL that returned 404 during a crawl, with its last-crawled timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The URL, kept as an opaque string
    pub url: String,

    /// Last-crawled timestamp, kept as an opaque string
    pub last_crawled: String,
}

impl UrlRecord {
    /// Create a new record
    pub fn new(url: String, last_crawled: String) -> Self {
        Self { url, last_crawled }
    }
}
