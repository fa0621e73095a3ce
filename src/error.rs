use thiserror::Error;

/// Errors raised when a solver or the input layer rejects its arguments.
///
/// An unreachable target amount is not an error: the solvers report it as
/// [`Solution::NotFound`](crate::cs::Solution::NotFound).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A denomination or amount violates a solver precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The amount exceeds the configured ceiling for the DP table
    #[error("Amount {amount} exceeds the configured limit of {limit}")]
    AmountTooLarge { amount: usize, limit: usize },

    /// Raw text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Parsing produced no usable denominations
    #[error("No valid coin denominations were provided")]
    EmptyDenominations,
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for coin change operations
pub type Result<T> = std::result::Result<T, Error>;
