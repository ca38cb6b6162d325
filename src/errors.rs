//! Unified application error type.
//! All modules (store, report, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Local mirror error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Remote store unreachable: {0}")]
    Remote(String),

    #[error("Remote store rejected the request (HTTP {status}): {message}")]
    RemoteStatus { status: u16, message: String },

    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Missing remote store credential: {0}")]
    MissingCredential(&'static str),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Report error: {0}")]
    Report(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
