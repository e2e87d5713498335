// ================================================================
// File: authgate-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unrecognized auth mode: {0}")]
    UnrecognizedMode(String),

    /// A verification strategy failed internally (backend unreachable,
    /// bind rejected, etc.). Distinct from a declined credential, which
    /// is not an error at all.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
