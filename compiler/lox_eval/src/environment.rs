//! Environment for variable scoping in the interpreter.
//!
//! Scopes live in an arena and are addressed by [`ScopeId`]. Each scope
//! records its parent's id, so lookups walk the chain innermost-first
//! without reference counting. Blocks push and pop scopes in strict LIFO
//! order, which keeps the arena a plain stack: popping a scope is a
//! `truncate`, and no scope ever outlives its parent.

use rustc_hash::FxHashMap;

use lox_ir::Name;

use crate::Value;

/// Index of a scope in the environment's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope, created with the environment.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Error returned by `get` and `assign` when no scope binds the name.
///
/// Carries the interned name; the interpreter resolves it to text for the
/// diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndefinedVariable {
    pub name: Name,
    pub line: u32,
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Variable bindings in this scope (`FxHashMap` for faster hashing with `Name` keys).
    bindings: FxHashMap<Name, Value>,
    /// Enclosing scope; `None` only for the root.
    parent: Option<ScopeId>,
}

impl Scope {
    fn with_parent(parent: ScopeId) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Enclosing scope, if any.
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Whether this scope itself binds `name` (ancestors not consulted).
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }
}

/// Environment for the interpreter: the chain of live scopes.
pub struct Environment {
    /// All live scopes; the current scope is always the last one.
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    /// Create a new environment with a root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
            current: ScopeId::ROOT,
        }
    }

    /// Number of live scopes, counting the root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost scope.
    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// Get a scope by id.
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    /// Push a child of the current scope and make it current.
    #[inline]
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope::with_parent(self.current));
        self.current = id;
        id
    }

    /// Discard the current scope and make its parent current.
    ///
    /// The root scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        let Some(parent) = self.scopes[self.current.index()].parent else {
            return;
        };
        debug_assert_eq!(
            self.current.index() + 1,
            self.scopes.len(),
            "scopes must be popped innermost-first"
        );
        self.scopes.truncate(self.current.index());
        self.current = parent;
    }

    /// Define a variable in the current scope, overwriting any binding of
    /// the same name in that scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.scopes[self.current.index()]
            .bindings
            .insert(name, value);
    }

    /// Find the innermost scope binding `name`.
    fn resolve(&self, name: Name) -> Option<ScopeId> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let scope = &self.scopes[scope_id.index()];
            if scope.contains(name) {
                return Some(scope_id);
            }
            id = scope.parent;
        }
        None
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let id = self.resolve(name)?;
        self.scopes[id.index()].bindings.get(&name).cloned()
    }

    /// Look up a variable, failing if no enclosing scope binds it.
    pub fn get(&self, name: Name, line: u32) -> Result<Value, UndefinedVariable> {
        self.lookup(name).ok_or(UndefinedVariable { name, line })
    }

    /// Overwrite an existing binding in the innermost scope that has it.
    ///
    /// Never creates a binding.
    pub fn assign(&mut self, name: Name, value: Value, line: u32) -> Result<(), UndefinedVariable> {
        let id = self.resolve(name).ok_or(UndefinedVariable { name, line })?;
        self.scopes[id.index()].bindings.insert(name, value);
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
