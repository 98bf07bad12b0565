//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser owns its lexer and pulls tokens on demand, keeping exactly two
//! of them buffered: the current token and one token of lookahead.
//!
//! Tokens are consumed destructively. A failed expectation abandons the
//! statement in progress, records a diagnostic, and resumes after the next
//! semicolon or at the next token that starts a statement.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, instrument, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, owned for the parser's lifetime
    lexer: Lexer,
    /// The token under consideration
    cur_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Byte offset of `cur_token`
    cur_offset: usize,
    /// Byte offset of `peek_token`
    peek_offset: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Diagnostics collected so far, in source order
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser and primes both lookahead slots.
    ///
    /// # Arguments
    ///
    /// * `lexer` - A fresh lexer over the source to parse
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            cur_token: Token::new(TokenKind::EOF, ""),
            peek_token: Token::new(TokenKind::EOF, ""),
            cur_offset: 0,
            peek_offset: 0,
            stmt_lookup: HashMap::new(),
            errors: vec![],
        };
        create_token_lookups(&mut parser);

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shifts peek into current and pulls a fresh token into peek.
    pub fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
        self.cur_offset = self.peek_offset;
        self.peek_offset = self.lexer.token_start();
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances only if the peek token has the expected kind.
    ///
    /// # Returns
    ///
    /// The newly current token, or an `UnexpectedToken` error positioned at
    /// the peek token. On error nothing is consumed.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.next_token();
            Ok(self.cur_token.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek_token.clone(),
                },
                self.get_peek_position(),
            ))
        }
    }

    /// Parses statements until EOF, collecting diagnostics along the way.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(Some(stmt)) => {
                    trace!(statement = %stmt, "parsed statement");
                    program.push(stmt);
                }
                Ok(None) => {}
                Err(error) => {
                    debug!(%error, "recorded diagnostic");
                    self.errors.push(error);
                    if self.synchronize() {
                        continue;
                    }
                }
            }
            self.next_token();
        }

        program
    }

    /// Skips past the statement in progress.
    ///
    /// Stops on `;`, `EOF`, or a token that starts a statement. Returns true in
    /// the last case, where the stopping token has not been consumed.
    fn synchronize(&mut self) -> bool {
        self.next_token();
        loop {
            if self.stmt_lookup.contains_key(&self.cur_token.kind) {
                return true;
            }
            if self.cur_token_is(TokenKind::Semicolon) || self.cur_token_is(TokenKind::EOF) {
                return false;
            }
            self.next_token();
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        Position(self.cur_offset as u32, self.lexer.file())
    }

    /// Returns the source position of the peek token.
    pub fn get_peek_position(&self) -> Position {
        Position(self.peek_offset as u32, self.lexer.file())
    }

    pub fn file(&self) -> Rc<String> {
        self.lexer.file()
    }
}

/// Parses a source buffer into a Program.
///
/// This is the main entry point for parsing. Parsing never stops early: the
/// returned Program holds every statement that parsed, and the diagnostics
/// list holds every failure, in source order.
///
/// # Arguments
///
/// * `source` - The complete source text
/// * `file` - Name attached to diagnostic positions (defaults to `shell`)
#[instrument(skip_all, fields(file = ?file))]
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    debug!(
        statements = program.len(),
        diagnostics = parser.errors().len(),
        "parsed program"
    );

    (program, parser.into_errors())
}
