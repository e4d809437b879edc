use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the raw dump parse stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDumpConfig {
    /// Path of the raw text dump to read
    #[serde(default = "default_raw_input_path")]
    pub input_path: String,

    /// Path of the normalized URL table to write
    #[serde(default = "default_table_path")]
    pub output_path: String,
}

/// Configuration for the bucket classify stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Path of the URL table to read
    #[serde(default = "default_table_path")]
    pub input_path: String,

    /// Path of the plain-text summary to write
    #[serde(default = "default_summary_path")]
    pub summary_path: String,

    /// Path of the per-record detail table to write
    #[serde(default = "default_detail_path")]
    pub detail_path: String,
}

/// Enum containing the configuration for each stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "stage")]
pub enum StageConfigType {
    /// Raw dump parse stage configuration
    Parse(RawDumpConfig),

    /// Bucket classify stage configuration
    Classify(ClassifierConfig),
}

impl StageConfigType {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default path of the raw 404 dump
fn default_raw_input_path() -> String {
    "404-urls-raw.txt".to_string()
}

/// Default path of the normalized URL table
fn default_table_path() -> String {
    "404-urls.csv".to_string()
}

/// Default path of the summary report
fn default_summary_path() -> String {
    "404-buckets-summary.txt".to_string()
}

/// Default path of the detail report
fn default_detail_path() -> String {
    "404-urls-bucketed.csv".to_string()
}

impl Default for RawDumpConfig {
    fn default() -> Self {
        Self {
            input_path: default_raw_input_path(),
            output_path: default_table_path(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            input_path: default_table_path(),
            summary_path: default_summary_path(),
            detail_path: default_detail_path(),
        }
    }
}
