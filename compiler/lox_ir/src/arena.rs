//! Arena allocation for the flat expression tree.
//!
//! All expressions of a program live in one contiguous `Vec`; child
//! references are [`ExprId`] indices into it. The parser allocates through
//! the `alloc_*` helpers, bottom-up, so a child always has a smaller id
//! than its parent.

use crate::ast::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
use crate::{ExprId, Name};

/// Contiguous storage for all expressions in a program.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate expression, return ID.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = match u32::try_from(self.exprs.len()) {
            Ok(index) => index,
            Err(_) => panic!("expression arena exceeded {} nodes", u32::MAX),
        };
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // Builders, one per expression kind

    pub fn alloc_literal(&mut self, literal: Literal, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Literal(literal), line))
    }

    pub fn alloc_number(&mut self, value: f64, line: u32) -> ExprId {
        self.alloc_literal(Literal::number(value), line)
    }

    pub fn alloc_string(&mut self, text: Name, line: u32) -> ExprId {
        self.alloc_literal(Literal::Str(text), line)
    }

    pub fn alloc_bool(&mut self, value: bool, line: u32) -> ExprId {
        self.alloc_literal(Literal::Bool(value), line)
    }

    pub fn alloc_nil(&mut self, line: u32) -> ExprId {
        self.alloc_literal(Literal::Nil, line)
    }

    pub fn alloc_grouping(&mut self, inner: ExprId, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Grouping(inner), line))
    }

    pub fn alloc_unary(&mut self, op: UnaryOp, operand: ExprId, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Unary { op, operand }, line))
    }

    pub fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, line))
    }

    pub fn alloc_variable(&mut self, name: Name, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Variable(name), line))
    }

    pub fn alloc_assign(&mut self, name: Name, value: ExprId, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Assign { name, value }, line))
    }
}
