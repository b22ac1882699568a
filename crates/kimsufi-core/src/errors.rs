use thiserror::Error;

/// Core domain errors - no I/O dependencies
///
/// An unresolvable price is not an error: price lookups return `None` and the
/// selector skips the candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid option: {token}")]
    MalformedOptionToken { token: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    pub fn malformed(token: impl Into<String>) -> Self {
        CoreError::MalformedOptionToken {
            token: token.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
