//! Runtime argument contracts
//!
//! Each validator either hands back the capability it proved (a [`Source`],
//! a [`CursorHandle`], a [`Callable`], a count) or fails with a
//! [`ContractViolation`]. Validation never advances or otherwise mutates
//! the value it inspects.
//!
//! The typed operations in [`crate::ops`] need none of this: their trait
//! bounds reject non-conforming arguments at compile time.

use thiserror::Error;
use tracing::debug;

use crate::dynamic::{Callable, CursorHandle, Source, Value};

/// An argument failed an input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// Value cannot produce a cursor.
    #[error("{found} is not iterable")]
    NotIterable {
        /// Kind of the rejected value.
        found: &'static str,
    },

    /// Value has no advance capability.
    #[error("{found} is not an iterator")]
    NotIterator {
        /// Kind of the rejected value.
        found: &'static str,
    },

    /// Value cannot be invoked.
    #[error("{found} is not a function")]
    NotCallable {
        /// Kind of the rejected value.
        found: &'static str,
    },

    /// Function takes the wrong number of arguments.
    #[error("function `{name}` takes {actual} argument(s), expected {expected}")]
    ArityMismatch {
        /// Name of the rejected function.
        name: String,
        /// Required number of arguments.
        expected: usize,
        /// Number of arguments the function declares.
        actual: usize,
    },

    /// Value is not a non-negative integer.
    #[error("{found} is not a valid count")]
    InvalidCount {
        /// Rendering of the rejected value.
        found: String,
    },
}

fn reject(violation: ContractViolation) -> ContractViolation {
    debug!(%violation, "contract check failed");
    violation
}

/// Prove that `value` can produce a cursor.
///
/// Lists, strings (by character), lazy sequences and cursors (their
/// remaining elements) are iterable.
pub fn assert_is_iterable(value: &Value) -> Result<Source, ContractViolation> {
    match value {
        Value::List(items) => Ok(Source::Items(items.clone())),
        Value::Str(text) => Ok(Source::Text(text.clone())),
        Value::Seq(sequence) => Ok(Source::Seq(sequence.clone())),
        Value::Cursor(handle) => Ok(Source::Cursor(handle.clone())),
        other => Err(reject(ContractViolation::NotIterable {
            found: other.kind(),
        })),
    }
}

/// Prove that `value` can be advanced.
pub fn assert_is_iterator(value: &Value) -> Result<CursorHandle, ContractViolation> {
    match value {
        Value::Cursor(handle) => Ok(handle.clone()),
        other => Err(reject(ContractViolation::NotIterator {
            found: other.kind(),
        })),
    }
}

/// Prove that `value` is a function taking exactly `arity` arguments.
pub fn assert_is_function(value: &Value, arity: usize) -> Result<Callable, ContractViolation> {
    match value {
        Value::Func(callable) if callable.arity() == arity => Ok(callable.clone()),
        Value::Func(callable) => Err(reject(ContractViolation::ArityMismatch {
            name: callable.name().to_string(),
            expected: arity,
            actual: callable.arity(),
        })),
        other => Err(reject(ContractViolation::NotCallable {
            found: other.kind(),
        })),
    }
}

/// Prove that `value` is a non-negative whole number usable by `take`/`skip`.
pub fn assert_is_count(value: &Value) -> Result<usize, ContractViolation> {
    let count = match value {
        Value::Int(i) => usize::try_from(*i).ok(),
        Value::Float(x) if x.fract() == 0.0 && *x >= 0.0 && *x <= usize::MAX as f64 => {
            Some(*x as usize)
        }
        _ => None,
    };
    count.ok_or_else(|| {
        reject(ContractViolation::InvalidCount {
            found: value.to_string(),
        })
    })
}
