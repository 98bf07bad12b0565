use std::rc::Rc;

use crate::{
    ast::{
        ast::{Node, Program},
        expressions::{Identifier, IntegerLiteral},
        statements::LetStatement,
    },
    lexer::tokens::{Token, TokenKind},
    Position,
};

fn ident(name: &str) -> Identifier {
    Identifier::from_token(Token::new(TokenKind::Ident, name))
}

fn int(literal: &str) -> IntegerLiteral {
    IntegerLiteral::from_token(Token::new(TokenKind::Int, literal), Position::null()).unwrap()
}

#[test]
fn test_let_statement_display() {
    let stmt = LetStatement::new(Token::new(TokenKind::Let, "let"), ident("myVar"))
        .with_value(ident("anotherVar").into());

    assert_eq!(stmt.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_let_statement_display_without_value() {
    let stmt = LetStatement::new(Token::new(TokenKind::Let, "let"), ident("x"));

    assert_eq!(Node::from(stmt).to_string(), "let x = ;");
}

#[test]
fn test_program_display_and_literal() {
    let mut program = Program::new();
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");

    program.push(
        LetStatement::new(Token::new(TokenKind::Let, "let"), ident("a"))
            .with_value(int("10").into())
            .into(),
    );
    program.push(LetStatement::new(Token::new(TokenKind::Let, "let"), ident("b")).into());

    assert_eq!(program.len(), 2);
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.to_string(), "let a = 10;let b = ;");
}

#[test]
fn test_node_token_literal() {
    assert_eq!(Node::from(ident("foo")).token_literal(), "foo");
    assert_eq!(Node::from(int("007")).token_literal(), "007");
    assert_eq!(Node::from(int("007")).to_string(), "7");
}

#[test]
fn test_integer_literal_values() {
    assert_eq!(int("0").value, 0);
    assert_eq!(int("9223372036854775807").value, i64::MAX);
}

#[test]
fn test_integer_literal_overflow() {
    let position = Position(7, Rc::new("test.monkey".to_string()));
    let error = IntegerLiteral::from_token(
        Token::new(TokenKind::Int, "9223372036854775808"),
        position,
    )
    .unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.get_found().literal, "9223372036854775808");
}

#[test]
fn test_program_iterates_in_source_order() {
    let mut program = Program::new();
    for name in ["first", "second", "third"] {
        program.push(LetStatement::new(Token::new(TokenKind::Let, "let"), ident(name)).into());
    }

    let names: Vec<String> = (&program)
        .into_iter()
        .map(|node| match node {
            Node::Let(stmt) => stmt.name.to_string(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}
