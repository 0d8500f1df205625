//! Errors raised while fetching listings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("employer identifier must not be empty")]
    Validation,
    #[error("failed to fetch employer details (HTTP {status})")]
    EmployerUnavailable { status: u16 },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
