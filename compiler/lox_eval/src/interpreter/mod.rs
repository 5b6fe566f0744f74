//! Tree-walking interpreter for Lox.
//!
//! # Evaluation rules
//!
//! - Expressions reduce to a [`Value`]; binary operands are evaluated
//!   left then right, always both.
//! - Statements only have effects: define a variable, print a line, or
//!   run a block in a fresh child scope.
//! - A runtime error unwinds through every enclosing expression and
//!   statement untouched and is handled exactly once, by [`Interpreter::interpret`].
//!
//! Block scopes are managed by [`ScopedInterpreter`], whose `Drop` pops the
//! scope on every exit path.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_ir::{ExprArena, ExprId, ExprKind, Literal, Stmt, StmtKind, StringInterner};

use crate::errors::{undefined_variable, EvalError, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::{
    ensure_sufficient_stack, evaluate_binary, evaluate_unary, stringify, Environment,
    UndefinedVariable, Value,
};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    /// String interner for identifier and literal text.
    pub interner: &'a StringInterner,
    /// Arena holding every expression of the program.
    pub arena: &'a ExprArena,
    /// Active scope chain.
    pub env: Environment,
    /// Destination for `print` output and reported errors.
    pub print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with a fresh environment writing to stdout.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Run a program: execute each statement in order, stopping at the
    /// first runtime error.
    ///
    /// That error is reported to the error sink as `<message> [line <n>]`
    /// and also returned, so the caller can pick an exit code. Bindings
    /// made at top level persist for later calls.
    #[tracing::instrument(level = "debug", skip_all, fields(count = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        let result = statements.iter().try_for_each(|stmt| self.execute(stmt));
        if let Err(err) = &result {
            tracing::debug!(line = ?err.line, kind = ?err.kind, "runtime error");
            self.print_handler.eprintln(&err.to_string());
        }
        result
    }

    /// Execute a single statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(*expr)?;
                Ok(())
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(*expr)?;
                self.print_handler.println(&stringify(&value));
                Ok(())
            }
            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(init) => self.evaluate(*init)?,
                    None => Value::Nil,
                };
                self.env.define(*name, value);
                Ok(())
            }
            StmtKind::Block(stmts) => self.execute_block(stmts),
        })
    }

    /// Execute statements in a new child scope of the current one.
    ///
    /// The previous scope is current again when this returns, whether it
    /// returns `Ok` or `Err`.
    pub fn execute_block(&mut self, stmts: &[Stmt]) -> Result<(), EvalError> {
        let mut scoped = self.scoped();
        tracing::trace!(depth = scoped.env.depth(), "enter block");
        for stmt in stmts {
            scoped.execute(stmt)?;
        }
        Ok(())
    }

    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr(id))
    }

    fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Literal(literal) => Ok(self.literal_value(literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { op, operand } => {
                let value = self.evaluate(operand)?;
                evaluate_unary(&value, op).map_err(|e| {
                    tracing::debug!(
                        op = op.as_symbol(),
                        operand = value.type_name(),
                        line = expr.line,
                        "unary operator rejected operand"
                    );
                    e.with_line(expr.line)
                })
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(&left, &right, op).map_err(|e| {
                    tracing::debug!(
                        op = op.as_symbol(),
                        left = left.type_name(),
                        right = right.type_name(),
                        line = expr.line,
                        "binary operator rejected operands"
                    );
                    e.with_line(expr.line)
                })
            }
            ExprKind::Variable(name) => self
                .env
                .get(name, expr.line)
                .map_err(|e| self.undefined(e)),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env
                    .assign(name, value.clone(), expr.line)
                    .map_err(|e| self.undefined(e))?;
                Ok(value)
            }
        }
    }

    fn literal_value(&self, literal: Literal) -> Value {
        match literal {
            Literal::Number(bits) => Value::Number(f64::from_bits(bits)),
            Literal::Str(text) => Value::string(self.interner.lookup(text)),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Nil => Value::Nil,
        }
    }

    #[cold]
    fn undefined(&self, err: UndefinedVariable) -> EvalError {
        undefined_variable(self.interner.lookup(err.name)).with_line(err.line)
    }

    /// Get captured `print` output (empty unless a buffer handler is installed).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Get captured error reports (empty unless a buffer handler is installed).
    pub fn get_error_output(&self) -> String {
        self.print_handler.get_errors()
    }

    /// Clear captured output and error reports.
    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}
