use thiserror::Error;

/// Errors that propagate to the caller as typed failures. Remote-call
/// failures never reach this enum; the orchestrators convert those to
/// degraded plan values instead.
#[derive(Error, Debug)]
pub enum CopycraftError {
    #[error("configuration error: {0}")] Config(String),
    #[error("invalid input: {0}")] Validation(String),
}
