//! Unary operator implementations for the evaluator.

use lox_ir::UnaryOp;

use crate::errors::{operand_must_be_number, EvalResult};
use crate::Value;

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(operand_must_be_number()),
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
    }
}
