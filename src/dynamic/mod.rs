//! Runtime-shaped values and validated operations
//!
//! The typed layer in [`crate::ops`] checks its argument contracts at compile
//! time. Inputs whose shape is only known at runtime (JSON documents, CLI
//! arguments) are represented as [`Value`]s instead and go through
//! [`ops`], which validates every argument with [`crate::contract`] before
//! traversal begins.
//!
//! ```
//! use star_it::dynamic::{ops, Builtins, Value};
//!
//! let builtins = Builtins::standard();
//! let seq = Value::from(serde_json::json!([1, 3, 5, 6, 7, 3, 1]));
//!
//! let total = ops::reduce(&seq, &builtins.resolve("add"), None).unwrap();
//! assert_eq!(total, Value::Int(26));
//!
//! let err = ops::every(&Value::Int(4), &builtins.resolve("is_odd")).unwrap_err();
//! assert_eq!(err.to_string(), "integer is not iterable");
//! ```

mod builtins;
mod callable;
pub mod ops;
mod sequence;
mod value;

pub use builtins::{Builtins, FunctionInfo};
pub use callable::Callable;
pub use sequence::{CursorHandle, Elements, Sequence, Source};
pub use value::Value;
