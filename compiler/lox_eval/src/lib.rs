//! Lox Eval - evaluation core of the Lox scripting language.
//!
//! Takes a program the parser has already validated and runs it.
//!
//! # Architecture
//!
//! - `Value`: number, string, boolean, nil
//! - `Environment`: arena of scopes addressed by `ScopeId`, innermost-first lookup
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Interpreter`: `evaluate` for expressions, `execute` for statements,
//!   `interpret` for a whole program (fail-fast, error reported once)
//! - `PrintHandlerImpl`: where `print` output and runtime errors go
//!
//! # Logging
//!
//! Uses `tracing`. Call [`init_tracing`] and set `RUST_LOG`, for example
//! `RUST_LOG=lox_eval=trace`, to see scope entry/exit and runtime errors.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;
mod value;

pub use environment::{Environment, Scope, ScopeId, UndefinedVariable};
pub use errors::{EvalError, EvalErrorKind, EvalResult, OperandExpectation};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::{stringify, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
