//! Runtime values for the Lox interpreter.
//!
//! Every expression reduces to one of four kinds. There is no implicit
//! coercion: operators check kinds themselves (see `operators.rs`).

use std::fmt;
use std::rc::Rc;

/// Runtime value in the Lox interpreter.
#[derive(Clone, Debug)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// Immutable text, shared so variable reads clone cheaply.
    Str(Rc<str>),
    /// Boolean value.
    Bool(bool),
    /// The absence of a value.
    Nil,
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Only `nil` and `false` are falsy; `0` and `""` are truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Get the type name for tracing and diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
        }
    }
}

/// Value equality as seen by `==` and `!=`.
///
/// `nil` equals only `nil`; values of different kinds are never equal.
/// Numbers use IEEE comparison, so `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

/// Display form used by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let text = n.to_string();
    f.write_str(text.strip_suffix(".0").unwrap_or(&text))
}

/// Canonical printed text of a value: `3.0` prints as `3`, `3.5` as `3.5`.
pub fn stringify(value: &Value) -> String {
    value.to_string()
}
