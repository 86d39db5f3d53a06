//! Registry of named builtin functions
//!
//! Lets runtime-shaped callers (the CLI, JSON pipelines) refer to predicates,
//! transforms and reducers by name.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use super::callable::Callable;
use super::value::Value;

/// Metadata describing a registered function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionInfo {
    /// Registered name.
    pub name: String,
    /// Number of positional arguments.
    pub arity: usize,
}

/// Name-indexed function registry.
#[derive(Debug, Default)]
pub struct Builtins {
    entries: BTreeMap<String, Callable>,
}

impl Builtins {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the standard predicates, transforms and reducers.
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(Callable::unary("is_odd", |v| Value::Bool(is_odd(v))));
        registry.register(Callable::unary("is_even", |v| {
            Value::Bool(v.as_f64().is_some() && !is_odd(v) && is_integral(v))
        }));
        registry.register(Callable::unary("is_positive", |v| {
            Value::Bool(v.as_f64().is_some_and(|x| x > 0.0))
        }));
        registry.register(Callable::unary("not", |v| Value::Bool(!v.is_truthy())));
        registry.register(Callable::unary("identity", Value::clone));
        registry.register(Callable::unary("double", |v| add(v, v)));
        registry.register(Callable::unary("square", |v| multiply(v, v)));
        registry.register(Callable::unary("negate", |v| match v {
            Value::Int(i) => i.checked_neg().map_or(Value::Float(-(*i as f64)), Value::Int),
            Value::Float(x) => Value::Float(-x),
            _ => Value::Null,
        }));
        registry.register(Callable::binary("add", add));
        registry.register(Callable::binary("multiply", multiply));
        registry.register(Callable::binary("max", |a, b| extremum(a, b, |x, y| x >= y)));
        registry.register(Callable::binary("min", |a, b| extremum(a, b, |x, y| x <= y)));
        registry.register(Callable::binary("concat", |a, b| {
            Value::Str(Rc::from(format!("{}{}", a, b)))
        }));

        registry
    }

    /// Register a function under its own name, replacing any previous entry.
    pub fn register(&mut self, callable: Callable) {
        self.entries.insert(callable.name().to_string(), callable);
    }

    /// Look up a function value by name.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries.get(name).cloned().map(Value::Func)
    }

    /// Resolve a name the way the CLI does: a registered name becomes a
    /// function value, anything else stays a plain string (and is later
    /// rejected by the callable contract).
    pub fn resolve(&self, name: &str) -> Value {
        self.get(name).unwrap_or_else(|| Value::str(name))
    }

    /// Registered functions in name order.
    pub fn list(&self) -> Vec<FunctionInfo> {
        self.entries
            .values()
            .map(|callable| FunctionInfo {
                name: callable.name().to_string(),
                arity: callable.arity(),
            })
            .collect()
    }
}

fn is_integral(v: &Value) -> bool {
    match v {
        Value::Int(_) => true,
        Value::Float(x) => x.fract() == 0.0,
        _ => false,
    }
}

fn is_odd(v: &Value) -> bool {
    match v {
        Value::Int(i) => i % 2 != 0,
        Value::Float(x) => x.fract() == 0.0 && (x % 2.0).abs() == 1.0,
        _ => false,
    }
}

fn add(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_add(*y)
            .map_or(Value::Float(*x as f64 + *y as f64), Value::Int),
        (Value::Str(_), _) | (_, Value::Str(_)) => Value::Str(Rc::from(format!("{}{}", a, b))),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => Value::Float(x + y),
            _ => Value::Null,
        },
    }
}

fn multiply(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_mul(*y)
            .map_or(Value::Float(*x as f64 * *y as f64), Value::Int),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => Value::Float(x * y),
            _ => Value::Null,
        },
    }
}

fn extremum(a: &Value, b: &Value, keep_first: fn(f64, f64) -> bool) -> Value {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) if keep_first(x, y) => a.clone(),
        (Some(_), Some(_)) => b.clone(),
        _ => Value::Null,
    }
}
