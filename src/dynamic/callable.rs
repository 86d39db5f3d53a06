//! Function values

use std::fmt;
use std::rc::Rc;

use super::value::Value;

/// Named function value with a fixed number of positional arguments.
#[derive(Clone)]
pub struct Callable {
    name: Rc<str>,
    arity: usize,
    body: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Callable {
    /// Wrap a closure taking exactly `arity` arguments.
    pub fn new<F>(name: &str, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self {
            name: Rc::from(name),
            arity,
            body: Rc::new(body),
        }
    }

    /// One-argument function.
    pub fn unary<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Self::new(name, 1, move |args| body(&args[0]))
    }

    /// Two-argument function.
    pub fn binary<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + 'static,
    {
        Self::new(name, 2, move |args| body(&args[0], &args[1]))
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of positional arguments.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke with positional arguments.
    ///
    /// Callers validate the argument count through
    /// [`crate::contract::assert_is_function`] before traversal starts; a
    /// mismatched call here is a bug in the caller and panics.
    pub fn call(&self, args: &[Value]) -> Value {
        assert_eq!(
            args.len(),
            self.arity,
            "function `{}` called with {} argument(s)",
            self.name,
            args.len()
        );
        (self.body)(args)
    }

    pub(crate) fn same(&self, other: &Callable) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
