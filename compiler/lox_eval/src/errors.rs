//! Runtime error types for the evaluator.
//!
//! `EvalErrorKind` gives each failure a typed category; the factory
//! functions below are the only constructors and populate both `kind` and
//! `message`. Operator helpers create errors without a line. The
//! interpreter attaches the line of the offending token with
//! [`EvalError::with_line`] before the error leaves the expression that
//! raised it.

use crate::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// What an operator required of its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandExpectation {
    /// A unary operator needed a number.
    Number,
    /// A binary operator needed two numbers.
    Numbers,
    /// `+` needed two numbers or two strings.
    NumbersOrStrings,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Operand kind does not satisfy the operator's precondition.
    TypeMismatch { expected: OperandExpectation },
    /// Right operand of `/` was zero.
    DivisionByZero,
    /// Read of, or assignment to, a name no enclosing scope binds.
    UndefinedVariable { name: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected } => match expected {
                OperandExpectation::Number => write!(f, "Operand must be a number"),
                OperandExpectation::Numbers => write!(f, "Operands must be numbers"),
                OperandExpectation::NumbersOrStrings => {
                    write!(f, "Operands must be two numbers or two strings")
                }
            },
            Self::DivisionByZero => write!(f, "Cannot divide by 0"),
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
    /// Source line of the token the error is attributed to.
    pub line: Option<u32>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            line: None,
        }
    }

    /// Attribute the error to a source line, unless it already has one.
    ///
    /// Errors from nested sub-expressions keep their innermost line.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }
}

/// `<message> [line <n>]`, the form written to the error channel.
impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} [line {line}]", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn operand_must_be_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: OperandExpectation::Number,
    })
}

#[cold]
pub fn operands_must_be_numbers() -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: OperandExpectation::Numbers,
    })
}

#[cold]
pub fn operands_must_be_numbers_or_strings() -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: OperandExpectation::NumbersOrStrings,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_match_kinds() {
        assert_eq!(operand_must_be_number().message, "Operand must be a number");
        assert_eq!(operands_must_be_numbers().message, "Operands must be numbers");
        assert_eq!(
            operands_must_be_numbers_or_strings().message,
            "Operands must be two numbers or two strings"
        );
        assert_eq!(division_by_zero().message, "Cannot divide by 0");
        assert_eq!(undefined_variable("x").message, "Undefined variable 'x'.");
    }

    #[test]
    fn display_appends_line() {
        let err = division_by_zero().with_line(3);
        assert_eq!(err.to_string(), "Cannot divide by 0 [line 3]");
    }

    #[test]
    fn display_without_line() {
        assert_eq!(division_by_zero().to_string(), "Cannot divide by 0");
    }

    #[test]
    fn innermost_line_wins() {
        let err = operands_must_be_numbers().with_line(2).with_line(9);
        assert_eq!(err.line, Some(2));
    }
}
