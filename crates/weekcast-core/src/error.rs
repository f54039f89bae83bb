use std::time::Duration;

use thiserror::Error;

/// Application-wide error types for weekcast.
#[derive(Error, Debug)]
pub enum AppError {
    /// Retrieving the forecast page failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The forecast page did not yield a usable forecast.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// City name was empty.
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Failures while retrieving the raw forecast page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS, connect, or transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Upstream answered successfully but sent nothing.
    #[error("Empty response body from {0}")]
    EmptyBody(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Failures while turning a raw page into forecast entries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// The three field lists have different lengths.
    #[error(
        "Field misalignment: {conditions} conditions, {dates} dates, {temperatures} temperatures"
    )]
    Misalignment {
        conditions: usize,
        dates: usize,
        temperatures: usize,
    },

    /// Field lists are aligned but too short to cover the forecast window.
    #[error("Insufficient days: found {found}, need at least {required}")]
    InsufficientDays { found: usize, required: usize },

    /// The requested date is not among the reported days.
    #[error("Unknown date: {0}")]
    UnknownDate(String),

    /// The document could not be parsed as HTML.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// A markup selector is not valid CSS.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl AppError {
    /// Returns true if the failure was caused by the caller's input rather
    /// than by the upstream site.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCity(_) | AppError::Extract(ExtractError::UnknownDate(_))
        )
    }

    /// Returns true if the upstream page was fetched but its markup did not
    /// match the expected shape.
    pub fn is_markup_error(&self) -> bool {
        matches!(
            self,
            AppError::Extract(
                ExtractError::Misalignment { .. }
                    | ExtractError::InsufficientDays { .. }
                    | ExtractError::ParseFailure(_)
            )
        )
    }
}
