use clap::Parser;
use sift_page::config::StageConfigType;
use sift_page::{RunOutcome, Sift, SiftError, StageType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to stage configuration file
    #[arg(short, long)]
    config: String,
}

fn main() -> Result<(), SiftError> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config_path = PathBuf::from(&args.config);
    let config = StageConfigType::from_file(config_path)?;

    // Print the loaded configuration and pick the stage it describes
    let stage = match &config {
        StageConfigType::Parse(parse_config) => {
            println!("Parse stage configuration:");
            println!("  Input dump: {}", parse_config.input_path);
            println!("  Output table: {}", parse_config.output_path);
            StageType::Parse
        }
        StageConfigType::Classify(classify_config) => {
            println!("Classify stage configuration:");
            println!("  Input table: {}", classify_config.input_path);
            println!("  Summary file: {}", classify_config.summary_path);
            println!("  Detail file: {}", classify_config.detail_path);
            StageType::Classify
        }
    };

    // Run the stage
    let outcome = Sift::new(stage).with_config(config).run()?;

    match outcome {
        RunOutcome::Parse(parse) => {
            println!("Wrote {} rows", parse.records_written);
        }
        RunOutcome::Classify(classify) => {
            for (bucket, count) in &classify.summary {
                println!("{}: {}", bucket, count);
            }
        }
    }

    Ok(())
}
