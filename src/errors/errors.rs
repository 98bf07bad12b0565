use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A positioned diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The token the parser was looking at when the diagnostic was raised.
    pub fn get_found(&self) -> &Token {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => found,
            ErrorImpl::UnrecognisedStatement { found } => found,
            ErrorImpl::NumberParseError { token } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnrecognisedStatement { .. } => "UnrecognisedStatement",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected next token to be `{}`, got `{}` instead",
                expected, found.kind
            )),
            ErrorImpl::UnrecognisedStatement { found } if found.kind == TokenKind::Illegal => {
                ErrorTip::None
            }
            ErrorImpl::UnrecognisedStatement { found } => ErrorTip::Suggestion(format!(
                "no statement starts with `{}`",
                found.literal
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token.literal
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

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
    #[error("expected next token to be {expected}, got {} instead", .found.kind)]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[error("unrecognised statement starting with {found}")]
    UnrecognisedStatement { found: Token },
    #[error("error parsing number: {:?}", .token.literal)]
    NumberParseError { token: Token },
}
