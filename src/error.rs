use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Not a valid date time `{value}` for {login}: {source}")]
    InvalidTimestamp {
        login: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Checkpoint `{}`: {source}", path.display())]
    Checkpoint {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Lookup pool closed before all profiles were fetched")]
    PoolClosed,

    #[error("Configuration error: {0}")]
    Config(String),
}
