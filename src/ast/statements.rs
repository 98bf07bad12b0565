use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Node, expressions::Identifier};

/// `let <name> = <value>;`
///
/// `value` stays `None` until expression parsing exists; the parser skips
/// the right-hand side up to the terminating semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Box<Node>>,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier) -> Self {
        LetStatement {
            token,
            name,
            value: None,
        }
    }

    pub fn with_value(mut self, value: Node) -> Self {
        self.value = Some(Box::new(value));
        self
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}
