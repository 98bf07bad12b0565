//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;
use std::rc::Rc;

fn unexpected(expected: TokenKind, found: Token, offset: u32) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken { expected, found },
        Position(offset, Rc::new("test.monkey".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = unexpected(TokenKind::Ident, Token::new(TokenKind::Assign, "="), 4);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 4);
    assert_eq!(*error.get_position().1, "test.monkey");
}

#[test]
fn test_get_found() {
    let error = unexpected(TokenKind::Assign, Token::new(TokenKind::Int, "5"), 6);
    assert_eq!(error.get_found(), &Token::new(TokenKind::Int, "5"));

    let error = Error::new(
        ErrorImpl::UnrecognisedStatement {
            found: Token::new(TokenKind::Ident, "foobar"),
        },
        Position::null(),
    );
    assert_eq!(error.get_found().literal, "foobar");
}

#[test]
fn test_unrecognised_statement_error() {
    let error = Error::new(
        ErrorImpl::UnrecognisedStatement {
            found: Token::new(TokenKind::Ident, "foobar"),
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedStatement");
    assert_eq!(error.get_tip().to_string(), "no statement starts with `foobar`");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: Token::new(TokenKind::Int, "99999999999999999999"),
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_error_messages() {
    let error = unexpected(TokenKind::Ident, Token::new(TokenKind::Assign, "="), 4);
    assert_eq!(
        error.get_kind().to_string(),
        "expected next token to be IDENT, got = instead"
    );
    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got = instead at test.monkey:4"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = unexpected(TokenKind::Assign, Token::new(TokenKind::Int, "5"), 0);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "expected next token to be `=`, got `INT` instead")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none_for_illegal_statement() {
    let error = Error::new(
        ErrorImpl::UnrecognisedStatement {
            found: Token::new(TokenKind::Illegal, "@"),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
