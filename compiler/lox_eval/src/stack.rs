//! Native stack growth for deeply nested programs.
//!
//! `evaluate` recurses once per nested expression (a grouping, an operand,
//! an assignment's right-hand side) and `execute` once per nested block.
//! Both route through [`ensure_sufficient_stack`], so a program like
//! `((((...1...))))` or `{{{{...}}}}` only costs heap-allocated stack
//! segments instead of overflowing the thread's stack.

/// Headroom below which the evaluator switches to a fresh segment. One
/// `eval_expr` frame plus a `Value` and an `EvalError` fits well inside it.
#[cfg(not(target_arch = "wasm32"))]
const EVAL_RED_ZONE: usize = 64 * 1024;

/// Size of each new segment: room for several thousand evaluator frames.
#[cfg(not(target_arch = "wasm32"))]
const EVAL_SEGMENT: usize = 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    if stacker::remaining_stack().is_some_and(|left| left < EVAL_RED_ZONE) {
        tracing::trace!(segment = EVAL_SEGMENT, "growing evaluator stack");
    }
    stacker::maybe_grow(EVAL_RED_ZONE, EVAL_SEGMENT, f)
}

/// WASM manages its own stack; evaluation recurses directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
