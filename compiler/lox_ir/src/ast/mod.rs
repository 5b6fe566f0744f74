//! AST node types.
//!
//! Expressions live in an [`ExprArena`](crate::ExprArena) and refer to their
//! children by [`ExprId`](crate::ExprId). Statements are ordinary owned
//! values: a program is a `Vec<Stmt>`, a block owns its inner statements.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
