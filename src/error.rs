use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read task names from {}: {source}", .path.display())]
    TaskNames {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("task name file {} contains no names", .0.display())]
    EmptyTaskNames(PathBuf),

    #[error("invalid api url: {0}")]
    InvalidUrl(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
