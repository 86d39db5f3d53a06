//! Runtime-shaped values
//!
//! Scalars compare by value; every reference kind (list, record, sequence,
//! cursor, function) compares by identity, the way strict equality treats
//! them in dynamically typed hosts.

use std::fmt;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::callable::Callable;
use super::sequence::{CursorHandle, Sequence};

/// Dynamically typed value accepted by [`crate::dynamic::ops`].
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value; also the "not found" and "no value" sentinel.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text; iterates by character.
    Str(Rc<str>),
    /// Materialized list.
    List(Rc<[Value]>),
    /// Key/value record. Not iterable.
    Record(Rc<[(String, Value)]>),
    /// Lazy, re-iterable sequence.
    Seq(Sequence),
    /// Stateful single-pass cursor.
    Cursor(CursorHandle),
    /// Callable value.
    Func(Callable),
}

impl Value {
    /// Short name of the value's kind, used in contract messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Seq(_) => "sequence",
            Value::Cursor(_) => "cursor",
            Value::Func(_) => "function",
        }
    }

    /// Truthiness used to interpret predicate results.
    ///
    /// `null`, `false`, `0`, `0.0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Numeric view of integers and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Build a list value.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(items.into_iter().collect())
    }

    /// Build a string value.
    pub fn str(text: &str) -> Self {
        Value::Str(Rc::from(text))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            (Value::Seq(a), Value::Seq(b)) => a.same(b),
            (Value::Cursor(a), Value::Cursor(b)) => a.same(b),
            (Value::Func(a), Value::Func(b)) => a.same(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Func(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(Rc::from(s)),
            serde_json::Value::Array(items) => Value::list(items.into_iter().map(Value::from)),
            serde_json::Value::Object(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Sequences and cursors are drained when serialized; serializing an
/// unbounded sequence does not terminate.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Seq(sequence) => {
                let mut seq = serializer.serialize_seq(None)?;
                for item in sequence.erased_cursor() {
                    seq.serialize_element(&item)?;
                }
                seq.end()
            }
            Value::Cursor(handle) => {
                let mut seq = serializer.serialize_seq(None)?;
                while let Some(item) = handle.advance() {
                    seq.serialize_element(&item)?;
                }
                seq.end()
            }
            Value::Func(callable) => {
                serializer.serialize_str(&format!("<function {}>", callable.name()))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(_) => write!(f, "[record]"),
            Value::Seq(_) => write!(f, "[sequence]"),
            Value::Cursor(_) => write!(f, "[cursor]"),
            Value::Func(callable) => write!(f, "[function {}]", callable.name()),
        }
    }
}
