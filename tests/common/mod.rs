//! Common test utilities for pcalc integration tests

pub use pcalc::{evaluate, EvalError};

/// Helper to evaluate an expression and flatten the error to its message
pub fn eval(input: &str) -> Result<i64, String> {
    evaluate(input).map_err(|e| e.to_string())
}
