//! Errors from the file and parsing shell around the numeric core
//!
//! The projection, IRR and insurance calculations never fail; only loading
//! configs, writing reports and parsing user-supplied cashflows can.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for planner I/O.
pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Error, Debug)]
pub enum PlannerError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config or report JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot CSV could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cashflow token is not a number.
    #[error("Invalid cashflow value: {0:?}")]
    InvalidCashflow(String),
}

impl PlannerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlannerError::Io {
            path: path.into(),
            source,
        }
    }
}
