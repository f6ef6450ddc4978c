use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a table from its source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch {url}: {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode csv: {0}")]
    Write(std::io::Error),

    #[error("source contains no rows")]
    Empty,
}

/// Rejection raised by the fail-fast and skip parse policies.
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    #[error("row {row}: missing '{column}' cell")]
    MissingCell { row: usize, column: String },

    #[error("row {row}: invalid year '{value}'")]
    InvalidYear { row: usize, value: String },

    #[error("row {row}: invalid sales amount '{value}'")]
    InvalidSales { row: usize, value: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    #[error("row {row}: missing '{column}' cell")]
    MissingCell { row: usize, column: String },

    #[error("row {row}: '{value}' is not a number")]
    InvalidNumber { row: usize, value: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown parse policy '{0}' (expected propagate, fail-fast or skip)")]
    UnknownPolicy(String),

    #[error("invalid COLOR_INTERVAL_MS '{0}'")]
    InvalidInterval(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unprocessable(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<AggregateError> for AppError {
    fn from(err: AggregateError) -> Self {
        Self::unprocessable(err)
    }
}

impl From<RankingError> for AppError {
    fn from(err: RankingError) -> Self {
        Self::unprocessable(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
