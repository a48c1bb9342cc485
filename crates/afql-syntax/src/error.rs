use model::FilterError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("malformed filter expression: {0}")]
    Malformed(String),

    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),

    #[error("missing value in term '{0}'")]
    MissingValue(String),

    #[error(transparent)]
    Filter(#[from] FilterError),
}
