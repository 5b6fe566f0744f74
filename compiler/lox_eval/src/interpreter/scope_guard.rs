//! RAII scope guard for block execution.
//!
//! [`ScopedInterpreter`] pushes a child scope when created and pops it when
//! dropped, so the enclosing scope is restored on normal exit, on `?`
//! early return, and during unwinding.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`,
//! so the block body runs through the guard exactly as it would through
//! the interpreter.
//!
//! ```text
//! {
//!     let mut scoped = interpreter.scoped();
//!     scoped.env.define(name, value);
//!     scoped.execute(stmt)?;
//! } // pop_scope called here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// RAII guard that pops the scope it pushed.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        tracing::trace!(depth = self.interpreter.env.depth(), "leave block");
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a child scope and return a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use lox_ir::{ExprArena, StringInterner};
    use pretty_assertions::assert_eq;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn guard_pops_on_drop() {
        let interner = StringInterner::new();
        let arena = ExprArena::new();
        let mut interpreter = Interpreter::new(&interner, &arena);
        let x = interner.intern("x");

        {
            let mut scoped = interpreter.scoped();
            scoped.env.define(x, Value::Number(1.0));
            assert_eq!(scoped.env.depth(), 2);
        }

        assert_eq!(interpreter.env.depth(), 1);
        assert_eq!(interpreter.env.lookup(x), None);
    }

    #[test]
    fn with_env_scope_returns_closure_result() {
        let interner = StringInterner::new();
        let arena = ExprArena::new();
        let mut interpreter = Interpreter::new(&interner, &arena);

        let depth = interpreter.with_env_scope(|scoped| scoped.env.depth());
        assert_eq!(depth, 2);
        assert_eq!(interpreter.env.depth(), 1);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let interner = StringInterner::new();
        let arena = ExprArena::new();
        let mut interpreter = Interpreter::new(&interner, &arena);

        interpreter.with_env_scope(|outer| {
            outer.with_env_scope(|inner| assert_eq!(inner.env.depth(), 3));
            assert_eq!(outer.env.depth(), 2);
        });
        assert_eq!(interpreter.env.depth(), 1);
    }

    #[test]
    fn guard_pops_during_unwind() {
        let interner = StringInterner::new();
        let arena = ExprArena::new();
        let mut interpreter = Interpreter::new(&interner, &arena);

        let result = catch_unwind(AssertUnwindSafe(|| {
            interpreter.with_env_scope(|_| panic!("boom"));
        }));

        assert!(result.is_err());
        assert_eq!(interpreter.env.depth(), 1);
    }
}
