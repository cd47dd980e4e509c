//! Error types for the verification suite.
//!
//! A failed check is not an error; it is recorded in its [`Report`] as FAIL.
//! These variants cover the surrounding plumbing only.
//!
//! [`Report`]: crate::check::Report

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// Invalid or inconsistent suite configuration.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
