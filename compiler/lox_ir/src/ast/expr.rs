//! Expression Types
//!
//! All children are indices, not boxes. Every node records the source line
//! of the token a runtime error should be attributed to: the operator for
//! unary and binary nodes, the identifier for variable reads and
//! assignments.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, Name};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ line {}", self.kind, self.line)
    }
}

/// Literal payload, as produced by the parser.
///
/// Numbers are stored as bits for `Hash`; strings are interned.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Literal {
    /// Number literal: 3, 2.5 (stored as `f64` bits)
    Number(u64),
    /// String literal (interned)
    Str(Name),
    /// Boolean literal: true, false
    Bool(bool),
    /// nil
    Nil,
}

impl Literal {
    /// Create a number literal.
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            Literal::Str(name) => write!(f, "Str({name:?})"),
            Literal::Bool(b) => write!(f, "Bool({b})"),
            Literal::Nil => write!(f, "Nil"),
        }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Literal value: 1, "text", true, nil
    Literal(Literal),

    /// Parenthesized expression: (inner)
    Grouping(ExprId),

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Variable reference
    Variable(Name),

    /// Assignment to an existing variable: name = value
    Assign { name: Name, value: ExprId },
}
