//! Lox IR - syntax tree types for the Lox evaluator.
//!
//! This crate contains the data structures the parser hands to the
//! evaluation core:
//! - Names for interned identifiers and string literals
//! - Expression nodes stored flat in an [`ExprArena`]
//! - Statement nodes owned top-down by the program
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Expressions**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Lines, not spans**: every node carries the source line used in
//!   runtime error reports
//!
//! Number literals are stored as `u64` bits so every node can derive `Hash`.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Literal, Stmt, StmtKind, UnaryOp};
pub use expr_id::ExprId;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
