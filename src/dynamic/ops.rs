//! Validated operations over runtime-shaped values
//!
//! Every function checks all of its arguments against the contracts in
//! [`crate::contract`] before touching the source, then delegates to the
//! typed operation in [`crate::ops`]. Lazy operations validate at
//! construction and return a [`Value::Seq`].
//!
//! Predicates and transforms must take one argument, reducers two. Predicate
//! results are interpreted by [`Value::is_truthy`].

use tracing::debug;

use super::{Callable, CursorHandle, Sequence, Value};
use crate::contract::{
    assert_is_count, assert_is_function, assert_is_iterable, assert_is_iterator,
    ContractViolation,
};
use crate::ops;
use crate::protocol::Iterable;

type Result<T> = std::result::Result<T, ContractViolation>;

fn holds(predicate: &Callable, element: Value) -> bool {
    predicate.call(&[element]).is_truthy()
}

/// `true` when `predicate` holds for every element.
pub fn every(seq: &Value, predicate: &Value) -> Result<bool> {
    let source = assert_is_iterable(seq)?;
    let predicate = assert_is_function(predicate, 1)?;
    debug!(op = "every", predicate = predicate.name(), "arguments validated");
    Ok(ops::every(source, |element| holds(&predicate, element)))
}

/// `true` when `predicate` holds for some element.
pub fn some(seq: &Value, predicate: &Value) -> Result<bool> {
    let source = assert_is_iterable(seq)?;
    let predicate = assert_is_function(predicate, 1)?;
    debug!(op = "some", predicate = predicate.name(), "arguments validated");
    Ok(ops::some(source, |element| holds(&predicate, element)))
}

/// First matching element, or `null`.
pub fn find(seq: &Value, predicate: &Value) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    let predicate = assert_is_function(predicate, 1)?;
    debug!(op = "find", predicate = predicate.name(), "arguments validated");
    Ok(ops::find(source, |element| holds(&predicate, element.clone())).unwrap_or(Value::Null))
}

/// Position of the first matching element, or `-1`.
pub fn find_index(seq: &Value, predicate: &Value) -> Result<i64> {
    let source = assert_is_iterable(seq)?;
    let predicate = assert_is_function(predicate, 1)?;
    debug!(op = "find_index", predicate = predicate.name(), "arguments validated");
    Ok(position(ops::find_index(source, |element| {
        holds(&predicate, element)
    })))
}

/// Call `f` once per element.
pub fn for_each(seq: &Value, f: &Value) -> Result<()> {
    let source = assert_is_iterable(seq)?;
    let f = assert_is_function(f, 1)?;
    debug!(op = "for_each", function = f.name(), "arguments validated");
    ops::for_each(source, |element| {
        f.call(&[element]);
    });
    Ok(())
}

/// `true` when some element strictly equals `value`.
pub fn includes(seq: &Value, value: &Value) -> Result<bool> {
    let source = assert_is_iterable(seq)?;
    debug!(op = "includes", "arguments validated");
    Ok(ops::includes(source, value))
}

/// Position of the first element strictly equal to `value`, or `-1`.
pub fn index_of(seq: &Value, value: &Value) -> Result<i64> {
    let source = assert_is_iterable(seq)?;
    debug!(op = "index_of", "arguments validated");
    Ok(position(ops::index_of(source, value)))
}

/// Position of the last element strictly equal to `value`, or `-1`.
pub fn last_index_of(seq: &Value, value: &Value) -> Result<i64> {
    let source = assert_is_iterable(seq)?;
    debug!(op = "last_index_of", "arguments validated");
    Ok(position(ops::last_index_of(source, value)))
}

/// Left fold with a two-argument reducer.
///
/// Without `initial` the first element seeds the accumulator, and an empty
/// source produces `null`.
pub fn reduce(seq: &Value, f: &Value, initial: Option<&Value>) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    let f = assert_is_function(f, 2)?;
    debug!(
        op = "reduce",
        reducer = f.name(),
        seeded = initial.is_some(),
        "arguments validated"
    );
    let step = |accumulator: Value, element: Value| f.call(&[accumulator, element]);
    Ok(match initial {
        Some(initial) => ops::reduce_from(source, initial.clone(), step),
        None => ops::reduce(source, step).unwrap_or(Value::Null),
    })
}

/// Lazy sequence of the elements satisfying `predicate`.
pub fn filter(seq: &Value, predicate: &Value) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    let predicate = assert_is_function(predicate, 1)?;
    debug!(op = "filter", predicate = predicate.name(), "arguments validated");
    let filtered = ops::filter(source, move |element: &Value| {
        holds(&predicate, element.clone())
    });
    Ok(Value::Seq(Sequence::new(filtered)))
}

/// Lazy sequence of `f(element)`.
pub fn map(seq: &Value, f: &Value) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    let f = assert_is_function(f, 1)?;
    debug!(op = "map", function = f.name(), "arguments validated");
    let mapped = ops::map(source, move |element: Value| f.call(&[element]));
    Ok(Value::Seq(Sequence::new(mapped)))
}

/// Lazy sequence without the first `count` elements.
pub fn skip(seq: &Value, count: &Value) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    let count = assert_is_count(count)?;
    debug!(op = "skip", count, "arguments validated");
    Ok(Value::Seq(Sequence::new(ops::skip(source, count))))
}

/// Lazy sequence of at most the first `count` elements.
pub fn take(seq: &Value, count: &Value) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    let count = assert_is_count(count)?;
    debug!(op = "take", count, "arguments validated");
    Ok(Value::Seq(Sequence::new(ops::take(source, count))))
}

/// Fresh cursor over an iterable value.
pub fn cursor_of(seq: &Value) -> Result<Value> {
    let source = assert_is_iterable(seq)?;
    Ok(Value::Cursor(CursorHandle::new(source.cursor())))
}

/// Advance a cursor value; `None` once it is exhausted.
pub fn advance(cursor: &Value) -> Result<Option<Value>> {
    Ok(assert_is_iterator(cursor)?.advance())
}

fn position(index: Option<usize>) -> i64 {
    index
        .and_then(|i| i64::try_from(i).ok())
        .unwrap_or(-1)
}
