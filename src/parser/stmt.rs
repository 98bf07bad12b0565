use crate::{
    ast::{ast::Node, expressions::Identifier, statements::LetStatement},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// `Ok(None)` is an empty statement (a lone `;`). A token that starts no
/// known statement is an `UnrecognisedStatement` error, kept apart from the
/// errors raised by a known statement that is malformed.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    let kind = parser.current_token_kind();

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser).map(Some);
    }

    if kind == TokenKind::Semicolon {
        return Ok(None);
    }

    Err(Error::new(
        ErrorImpl::UnrecognisedStatement {
            found: parser.current_token().clone(),
        },
        parser.get_position(),
    ))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start_token = parser.current_token().clone();

    let name = Identifier::from_token(parser.expect_peek(TokenKind::Ident)?);

    parser.expect_peek(TokenKind::Assign)?;

    // TODO: parse the value once expression parsing lands; until then skip to `;`.
    while !parser.cur_token_is(TokenKind::Semicolon) && !parser.cur_token_is(TokenKind::EOF) {
        parser.next_token();
    }

    Ok(LetStatement::new(start_token, name).into())
}
