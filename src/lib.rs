// Re-export modules
pub mod buckets;
pub mod config;
pub mod error;
pub mod parsers;
pub mod records;
pub mod report;
pub mod stages;
pub mod table;

// Re-export commonly used types for convenience
pub use buckets::Bucket;
pub use error::{Result, SiftError};
pub use records::UrlRecord;

use stages::classify::ClassifyOutcome;
use stages::parse::ParseOutcome;

/// Stages the tool can run
#[derive(Debug, Clone, Copy)]
pub enum StageType {
    /// Normalize a raw 404 dump into a URL table
    Parse,
    /// Classify a URL table into triage buckets
    Classify,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Parse stage outcome
    Parse(ParseOutcome),
    /// Classify stage outcome
    Classify(ClassifyOutcome),
}

/// Main builder for running triage stages
pub struct Sift {
    stage: StageType,
    config: Option<config::StageConfigType>,
}

impl Sift {
    /// Create a new builder for the given stage
    pub fn new(stage: StageType) -> Self {
        Self {
            stage,
            config: None,
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: config::StageConfigType) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        self.config = Some(config::StageConfigType::from_file(path)?);
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, config_str: &str) -> Result<Self> {
        self.config = Some(serde_json::from_str(config_str)?);
        Ok(self)
    }

    /// Run the stage to completion
    pub fn run(self) -> Result<RunOutcome> {
        match self.stage {
            StageType::Parse => {
                let config = match self.config {
                    Some(config::StageConfigType::Parse(parse_config)) => parse_config,
                    Some(_) => {
                        ::log::warn!(
                            "Loaded configuration is not for the parse stage, using defaults"
                        );
                        config::RawDumpConfig::default()
                    }
                    None => config::RawDumpConfig::default(),
                };
                Ok(RunOutcome::Parse(stages::parse::run(&config)?))
            }
            StageType::Classify => {
                let config = match self.config {
                    Some(config::StageConfigType::Classify(classify_config)) => classify_config,
                    Some(_) => {
                        ::log::warn!(
                            "Loaded configuration is not for the classify stage, using defaults"
                        );
                        config::ClassifierConfig::default()
                    }
                    None => config::ClassifierConfig::default(),
                };
                Ok(RunOutcome::Classify(stages::classify::run(&config)?))
            }
        }
    }
}
