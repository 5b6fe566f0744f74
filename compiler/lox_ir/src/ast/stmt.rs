//! Statement Types
//!
//! Statements own their nested statements; expressions are referenced by
//! [`ExprId`] into the program's arena.

use std::fmt;

use crate::{ExprId, Name};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ line {}", self.kind, self.line)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its side effects: `expr;`
    Expression(ExprId),

    /// `print expr;`
    Print(ExprId),

    /// `var name;` or `var name = init;`
    Var { name: Name, init: Option<ExprId> },

    /// `{ stmts }`
    Block(Vec<Stmt>),
}
