use thiserror::Error;

/// Every failure a command can hit. The messages are shown to the operator
/// verbatim, prefixed with `Error: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopoError {
    #[error("Invalid position. Please provide a number.")]
    InvalidPosition,
    #[error("Invalid positions. Please provide numbers for start and end.")]
    InvalidPositions,
    #[error("Invalid range. Please provide a positive number.")]
    InvalidRange,
    #[error("No node exists at position {0}")]
    NodeNotFound(String),
    #[error("No node exists at current position {0}")]
    CursorNodeMissing(usize),
    #[error("No data provided for the vector")]
    EmptyPayload,
    #[error("Transaction ID is required")]
    MissingTransactionId,
    #[error("Transaction with ID {0} not found")]
    TransactionNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TopoError>;
