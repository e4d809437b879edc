use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Missing required column '{0}' in input table")]
    MissingColumn(&'static str),

    #[error("Row {row}: missing required field '{column}'")]
    MissingField { row: usize, column: &'static str },
}

pub type Result<T> = std::result::Result<T, SiftError>;
