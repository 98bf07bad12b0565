//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - A byte-at-a-time state machine with one character of lookahead
//! - Recognition of keywords, identifiers, integers and operators
//! - Token start offsets for positioning diagnostics
//! - Unrecognised bytes, which become `ILLEGAL` tokens rather than errors

pub mod lexer;
pub mod tokens;
