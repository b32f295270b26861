use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unterminated quoted field starting on line {0}")]
    UnterminatedQuote(usize),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("No format given; pass --format or save a default with `config --format`")]
    MissingFormat,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;
