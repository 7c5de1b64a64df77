use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// An error raised while tokenizing, parsing or evaluating an expression.
///
/// Syntax errors always carry the position of the offending input. Evaluation
/// errors have no position since the tree does not keep source offsets.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn without_position(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_inner(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnboundVariable { .. } => ErrorKind::Evaluation,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::UnknownFunction { .. } => "UnknownFunction",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnboundVariable { .. } => "UnboundVariable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { remainder } => match remainder.chars().next() {
                Some(character) => ErrorTip::Suggestion(format!(
                    "`{}` does not start any known token",
                    character
                )),
                None => ErrorTip::None,
            },
            ErrorImpl::UnexpectedToken { token, expected } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, token))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Expected {}, found end of input", expected))
            }
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Expression is complete but input continues with `{}`",
                token
            )),
            ErrorImpl::UnknownFunction { name } => {
                ErrorTip::Suggestion(format!("Unknown function `{}`", name))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than {} levels, split it up",
                limit
            )),
            ErrorImpl::UnboundVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` has no bound value", variable))
            }
        }
    }
}

/// The two error categories an expression can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised by tokenizing or parsing.
    Syntax,
    /// Raised by evaluation.
    Evaluation,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "SyntaxError"),
            ErrorKind::Evaluation => write!(f, "EvaluationError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected character in input: {remainder:?}")]
    UnexpectedCharacter { remainder: String },
    #[error("unexpected token {token:?}: expected {expected}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unexpected trailing input: {token:?}")]
    TrailingInput { token: String },
    #[error("unexpected function {name:?} found")]
    UnknownFunction { name: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("unbound variable {variable:?}")]
    UnboundVariable { variable: String },
}
