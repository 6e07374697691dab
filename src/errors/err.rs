use thiserror::Error as ThisError;

pub type EvalResult<T> = Result<T, Error>;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("expression cannot be empty")]
    EmptyExpression,
    #[error("invalid character in expression: {0:?}")]
    InvalidCharacter(char),
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid expression")]
    InvalidExpression,
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("cannot divide by zero")]
    DivisionByZero,
}
