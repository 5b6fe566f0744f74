//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator set and the value kinds are
//! both fixed, so a `match` gives exhaustiveness checking for free.
//!
//! | operator            | operands                     |
//! |---------------------|------------------------------|
//! | `==` `!=`           | any                          |
//! | `<` `<=` `>` `>=`   | two numbers                  |
//! | `-` `*` `/`         | two numbers                  |
//! | `+`                 | two numbers or two strings   |

use lox_ir::BinaryOp;

use crate::errors::{
    division_by_zero, operands_must_be_numbers, operands_must_be_numbers_or_strings, EvalError,
    EvalResult,
};
use crate::Value;

/// Evaluate a binary operation on two already-evaluated operands.
///
/// Errors carry no line; the caller attributes them to the operator token.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => number_operands(left, right).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => number_operands(left, right).map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => eval_div(left, right),
        // IEEE ordering: any comparison involving NaN is false
        BinaryOp::Lt => number_operands(left, right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => number_operands(left, right).map(|(a, b)| Value::Bool(a <= b)),
        BinaryOp::Gt => number_operands(left, right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => number_operands(left, right).map(|(a, b)| Value::Bool(a >= b)),
    }
}

/// Both operands as numbers, or the two-numbers type error.
#[inline]
fn number_operands(left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers()),
    }
}

/// `+` on two numbers sums, on two strings concatenates.
fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => Err(operands_must_be_numbers_or_strings()),
    }
}

/// The zero check runs before the operand check: `"a" / 0` is a division
/// by zero, not a type error. `-0` counts as zero.
fn eval_div(left: &Value, right: &Value) -> EvalResult {
    if matches!(right, Value::Number(n) if *n == 0.0) {
        return Err(division_by_zero());
    }
    number_operands(left, right).map(|(a, b)| Value::Number(a / b))
}
