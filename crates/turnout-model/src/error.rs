use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurnoutError {
    #[error("unknown comparison operator: {0}")]
    UnknownOperator(String),
    #[error("unknown table kind: {0}")]
    UnknownTable(String),
    #[error("unknown track variant: {0}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, TurnoutError>;
