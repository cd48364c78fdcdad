use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown rule category: {0}")]
    UnknownCategory(String),

    #[error("Invalid verdict thresholds: suspicious={suspicious}, spam={spam}")]
    InvalidThresholds { suspicious: f64, spam: f64 },
}

pub type Result<T> = std::result::Result<T, ReportError>;
