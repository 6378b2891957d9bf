use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A required element is missing from the page. The table extractor turns
    /// this into an empty table, so pipelines never return it.
    #[error("Element not found: {0}")]
    NotFound(&'static str),
    #[error("Malformed record at row {row}: {value:?}")]
    MalformedRecord { row: usize, value: String },
    #[error("Unexpected table layout: {0}")]
    Layout(String),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Invalid player id: {0:?}")]
    InvalidPlayerId(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
