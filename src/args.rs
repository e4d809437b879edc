use clap::{Parser, ValueEnum};
use sift_page::config::{ClassifierConfig, RawDumpConfig, StageConfigType};
use sift_page::{Result, StageType};

#[derive(Parser, Debug)]
#[command(name = "sift-page")]
#[command(about = "Buckets 404 URLs from a site crawl for triage")]
#[command(version)]
pub struct Args {
    /// Stage to run
    #[arg(value_enum)]
    pub stage: StageArg,

    /// Override the stage input path
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the parse stage output table path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the classify stage summary path
    #[arg(long)]
    pub summary: Option<String>,

    /// Override the classify stage detail path
    #[arg(long)]
    pub detail: Option<String>,

    /// Path to a JSON stage configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    /// Normalize a raw 404 dump into a URL table
    Parse,
    /// Classify a URL table into triage buckets
    Classify,
}

/// Convert from CLI argument stage to internal stage type
pub fn convert_stage(arg_stage: StageArg) -> StageType {
    match arg_stage {
        StageArg::Parse => StageType::Parse,
        StageArg::Classify => StageType::Classify,
    }
}

/// Build the stage configuration from the config file (if given) and CLI
/// path overrides, falling back to the stage defaults
pub fn build_config(args: &Args) -> Result<StageConfigType> {
    let mut config = match &args.config {
        Some(path) => StageConfigType::from_file(path)?,
        None => match args.stage {
            StageArg::Parse => StageConfigType::Parse(RawDumpConfig::default()),
            StageArg::Classify => StageConfigType::Classify(ClassifierConfig::default()),
        },
    };

    match &mut config {
        StageConfigType::Parse(parse_config) => {
            if let Some(input) = &args.input {
                parse_config.input_path = input.clone();
            }
            if let Some(output) = &args.output {
                parse_config.output_path = output.clone();
            }
        }
        StageConfigType::Classify(classify_config) => {
            if let Some(input) = &args.input {
                classify_config.input_path = input.clone();
            }
            if let Some(summary) = &args.summary {
                classify_config.summary_path = summary.clone();
            }
            if let Some(detail) = &args.detail {
                classify_config.detail_path = detail.clone();
            }
        }
    }

    Ok(config)
}
