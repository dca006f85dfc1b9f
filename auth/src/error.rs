use thiserror::Error;

/// Failure reasons the credential checker can report.
///
/// There is deliberately no distinction between bad username and bad
/// password; every rejection collapses to `Unauthorized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("unauthorized")]
    Unauthorized,
}
