use clap::Parser;
use sift_page::{RunOutcome, Sift};

mod args;
use args::{Args, build_config, convert_stage};

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting triage stage: {:?}", args.stage);

    // Build the stage configuration from the config file and CLI overrides
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Convert from CLI argument stage to internal stage type
    let stage = convert_stage(args.stage);

    let outcome = match Sift::new(stage).with_config(config).run() {
        Ok(outcome) => outcome,
        Err(e) => {
            ::log::error!("Stage failed: {}", e);
            std::process::exit(1);
        }
    };

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
}
