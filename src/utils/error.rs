use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("country codes file not found: {0}")]
    SourceNotFound(String),

    #[error("failed to read country codes file {path}: {reason}")]
    SourceRead { path: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("country element is missing a {0} field")]
    MissingElement(&'static str),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
