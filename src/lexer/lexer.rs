use std::rc::Rc;

use tracing::trace;

use crate::{MK_PAIRED_TOKEN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Byte-oriented lexer over a single, fully materialised source buffer.
///
/// `ch` caches `source[position]`, or `None` once the input is exhausted.
/// `read_position` always points one past `position`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
    token_start: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: None,
            token_start: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Looks at the byte after the current one without consuming it.
    pub fn peek_char(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_position).copied()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.ch {
            Some(b'=') => MK_PAIRED_TOKEN!(self, b'=', b'=', TokenKind::Eq, TokenKind::Assign),
            Some(b'!') => MK_PAIRED_TOKEN!(self, b'!', b'=', TokenKind::NotEq, TokenKind::Bang),
            Some(b';') => MK_TOKEN!(TokenKind::Semicolon, String::from(";")),
            Some(b'(') => MK_TOKEN!(TokenKind::LParen, String::from("(")),
            Some(b')') => MK_TOKEN!(TokenKind::RParen, String::from(")")),
            Some(b',') => MK_TOKEN!(TokenKind::Comma, String::from(",")),
            Some(b'+') => MK_TOKEN!(TokenKind::Plus, String::from("+")),
            Some(b'-') => MK_TOKEN!(TokenKind::Minus, String::from("-")),
            Some(b'/') => MK_TOKEN!(TokenKind::Slash, String::from("/")),
            Some(b'*') => MK_TOKEN!(TokenKind::Asterisk, String::from("*")),
            Some(b'>') => MK_TOKEN!(TokenKind::Gt, String::from(">")),
            Some(b'<') => MK_TOKEN!(TokenKind::Lt, String::from("<")),
            Some(b'{') => MK_TOKEN!(TokenKind::LBrace, String::from("{")),
            Some(b'}') => MK_TOKEN!(TokenKind::RBrace, String::from("}")),
            None => return MK_TOKEN!(TokenKind::EOF, String::new()),
            Some(ch) if is_letter(ch) => {
                let literal = self.read_identifier();
                return MK_TOKEN!(lookup_ident(&literal), literal);
            }
            Some(ch) if ch.is_ascii_digit() => {
                return MK_TOKEN!(TokenKind::Int, self.read_number());
            }
            // Lossy for non-ASCII: one token per byte, widened to a char.
            Some(ch) => MK_TOKEN!(TokenKind::Illegal, String::from(ch as char)),
        };

        self.read_char();
        token
    }

    /// Byte offset where the most recently returned token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    // Both runs are pure ASCII, so the half-open byte range is a valid str slice.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while matches!(self.ch, Some(ch) if is_letter(ch) || ch.is_ascii_digit()) {
            self.read_char();
        }
        String::from(&self.source[start..self.position])
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
            self.read_char();
        }
        String::from(&self.source[start..self.position])
    }
}

/// Yields every token up to, but not including, `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::EOF).then_some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Lexes a whole source buffer. The result always ends with a single `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        trace!(token = %token, offset = lex.token_start(), "lexed token");

        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
