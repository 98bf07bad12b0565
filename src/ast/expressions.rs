use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

// LITERALS

/// Identifier
/// A bare name, either bound by a `let` or referenced in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// Represents a signed 64-bit integer literal in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    /// Parses an `INT` token, reporting overflow as a `NumberParseError`.
    pub fn from_token(token: Token, position: Position) -> Result<Self, Error> {
        debug_assert_eq!(token.kind, TokenKind::Int);

        match token.literal.parse::<i64>() {
            Ok(value) => Ok(IntegerLiteral { token, value }),
            Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token }, position)),
        }
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
