//! Test modules relocated from implementation files, plus end-to-end
//! programs.
//!
//! There is no parser in this workspace, so programs are assembled
//! directly through `ExprArena` allocation.


use lox_ir::{ExprArena, ExprId, Name, Stmt, StmtKind, StringInterner};

use crate::{buffer_handler, EvalError, InterpreterBuilder};

/// A program under construction: its interner and expression arena.
pub(crate) struct Program {
    pub interner: StringInterner,
    pub arena: ExprArena,
}

/// Everything observable after running a program.
pub(crate) struct Outcome {
    pub output: String,
    pub errors: String,
    pub result: Result<(), EvalError>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            interner: StringInterner::new(),
            arena: ExprArena::new(),
        }
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn string(&mut self, text: &str, line: u32) -> ExprId {
        let text = self.interner.intern(text);
        self.arena.alloc_string(text, line)
    }

    /// Run with a fresh interpreter writing into buffers.
    pub fn run(&self, statements: &[Stmt]) -> Outcome {
        let handler = buffer_handler();
        let mut interpreter = InterpreterBuilder::new(&self.interner, &self.arena)
            .print_handler(handler.clone())
            .build();
        let result = interpreter.interpret(statements);
        Outcome {
            output: handler.get_output(),
            errors: handler.get_errors(),
            result,
        }
    }
}

pub(crate) fn print(expr: ExprId, line: u32) -> Stmt {
    Stmt::new(StmtKind::Print(expr), line)
}

pub(crate) fn expr_stmt(expr: ExprId, line: u32) -> Stmt {
    Stmt::new(StmtKind::Expression(expr), line)
}

pub(crate) fn var(name: Name, init: Option<ExprId>, line: u32) -> Stmt {
    Stmt::new(StmtKind::Var { name, init }, line)
}

pub(crate) fn block(stmts: Vec<Stmt>, line: u32) -> Stmt {
    Stmt::new(StmtKind::Block(stmts), line)
}

#[test]
fn init_tracing_is_idempotent() {
    crate::init_tracing();
    crate::init_tracing();
}
