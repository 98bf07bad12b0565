use std::{fmt::Display, slice::Iter};

use super::{
    expressions::{Identifier, IntegerLiteral},
    statements::LetStatement,
};

/// Node Kinds
///
/// The closed set of syntax forms the parser produces. Each variant owns its
/// children outright, so a `Program` is a plain tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Let(LetStatement),
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
}

impl Node {
    /// Literal of the token the node was built from.
    pub fn token_literal(&self) -> &str {
        match self {
            Node::Let(stmt) => &stmt.token.literal,
            Node::Identifier(ident) => &ident.token.literal,
            Node::IntegerLiteral(int) => &int.token.literal,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Let(stmt) => write!(f, "{}", stmt),
            Node::Identifier(ident) => write!(f, "{}", ident),
            Node::IntegerLiteral(int) => write!(f, "{}", int),
        }
    }
}

impl From<LetStatement> for Node {
    fn from(stmt: LetStatement) -> Self {
        Node::Let(stmt)
    }
}

impl From<Identifier> for Node {
    fn from(ident: Identifier) -> Self {
        Node::Identifier(ident)
    }
}

impl From<IntegerLiteral> for Node {
    fn from(int: IntegerLiteral) -> Self {
        Node::IntegerLiteral(int)
    }
}

/// Parse root: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn push(&mut self, stmt: Node) {
        self.statements.push(stmt);
    }

    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Node::token_literal)
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
