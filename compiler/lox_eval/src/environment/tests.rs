use super::*;
use lox_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_define_get() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Number(42.0));
    assert_eq!(env.get(x, 1), Ok(Value::Number(42.0)));
}

#[test]
fn test_redefine_overwrites_same_scope() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Number(1.0));
    env.define(x, Value::string("two"));
    assert_eq!(env.lookup(x), Some(Value::string("two")));
}

#[test]
fn test_get_undefined_carries_name_and_line() {
    let interner = StringInterner::new();
    let missing = interner.intern("missing");

    let env = Environment::new();
    assert_eq!(
        env.get(missing, 12),
        Err(UndefinedVariable {
            name: missing,
            line: 12
        })
    );
}

#[test]
fn test_get_searches_ancestors() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Bool(true));
    env.push_scope();
    env.push_scope();
    assert_eq!(env.get(x, 1), Ok(Value::Bool(true)));
}

#[test]
fn test_shadowing_leaves_outer_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Number(1.0));

    env.push_scope();
    env.define(x, Value::Number(2.0));
    assert_eq!(env.lookup(x), Some(Value::Number(2.0)));

    env.pop_scope();
    assert_eq!(env.lookup(x), Some(Value::Number(1.0)));
}

#[test]
fn test_assign_mutates_enclosing_scope() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Number(1.0));

    let inner = env.push_scope();
    assert!(env.assign(x, Value::Number(5.0), 3).is_ok());
    // Assignment did not declare in the inner scope.
    assert_eq!(env.scope(inner).map(|s| s.contains(x)), Some(false));

    env.pop_scope();
    assert_eq!(env.lookup(x), Some(Value::Number(5.0)));
}

#[test]
fn test_assign_targets_innermost_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Number(1.0));
    env.push_scope();
    env.define(x, Value::Number(2.0));

    assert!(env.assign(x, Value::Number(3.0), 1).is_ok());
    assert_eq!(env.lookup(x), Some(Value::Number(3.0)));

    env.pop_scope();
    assert_eq!(env.lookup(x), Some(Value::Number(1.0)));
}

#[test]
fn test_assign_undefined_does_not_declare() {
    let interner = StringInterner::new();
    let y = interner.intern("y");

    let mut env = Environment::new();
    env.push_scope();
    assert_eq!(
        env.assign(y, Value::Nil, 4),
        Err(UndefinedVariable { name: y, line: 4 })
    );
    assert_eq!(env.lookup(y), None);
    env.pop_scope();
    assert_eq!(env.lookup(y), None);
}

#[test]
fn test_push_pop_depth_and_parents() {
    let mut env = Environment::new();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.current_scope(), ScopeId::ROOT);

    let child = env.push_scope();
    let grandchild = env.push_scope();
    assert_eq!(env.depth(), 3);
    assert_eq!(env.scope(grandchild).and_then(Scope::parent), Some(child));
    assert_eq!(env.scope(child).and_then(Scope::parent), Some(ScopeId::ROOT));

    env.pop_scope();
    assert_eq!(env.current_scope(), child);
    env.pop_scope();
    assert_eq!(env.current_scope(), ScopeId::ROOT);
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_root_scope_is_never_popped() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.define(x, Value::Nil);
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(x), Some(Value::Nil));
}

#[test]
fn test_sibling_blocks_do_not_share_bindings() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.push_scope();
    env.define(x, Value::Number(1.0));
    env.pop_scope();

    env.push_scope();
    assert_eq!(env.lookup(x), None);
    env.pop_scope();
}
