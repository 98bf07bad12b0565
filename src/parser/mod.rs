//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! a lexer and builds a `Program`. It handles:
//!
//! - Two-token lookahead (current and peek), advanced in lockstep
//! - Statement dispatch through a lookup table keyed by token kind
//! - Diagnostic collection with recovery at statement boundaries
//!
//! Expression parsing is not implemented yet: `let` values are skipped up
//! to the terminating semicolon.

pub mod lookups;
pub mod parser;
pub mod stmt;
