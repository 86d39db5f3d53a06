//! Iteration protocol
//!
//! An [`Iterable`] hands out a fresh cursor on every request without being
//! consumed. The cursor is any [`Iterator`]: advance is `next()`, and
//! `Option` is the `value | exhausted` signal.
//!
//! Standard collections implement the protocol through shared references
//! (`&Vec<T>`, `&[T]`, ...), so the same collection can be traversed any
//! number of times. Ranges are cloned per request.

mod generated;

pub use generated::{from_fn, Generated};

use std::collections::VecDeque;
use std::ops::{Range, RangeFrom, RangeInclusive};

/// A value that can produce independent cursors over its elements.
///
/// `cursor` takes `&self`: requesting a cursor must not consume or mutate
/// the iterable, and two cursors never share position.
pub trait Iterable {
    /// Element type yielded by the cursor.
    type Item;

    /// Cursor type.
    type Cursor: Iterator<Item = Self::Item>;

    /// Obtain a fresh cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor;
}

impl<'a, T> Iterable for &'a [T] {
    type Item = &'a T;
    type Cursor = std::slice::Iter<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        let slice: &'a [T] = *self;
        slice.iter()
    }
}

impl<'a, T, const N: usize> Iterable for &'a [T; N] {
    type Item = &'a T;
    type Cursor = std::slice::Iter<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        let array: &'a [T; N] = *self;
        array.iter()
    }
}

impl<'a, T> Iterable for &'a Vec<T> {
    type Item = &'a T;
    type Cursor = std::slice::Iter<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        let vec: &'a Vec<T> = *self;
        vec.iter()
    }
}

impl<'a, T> Iterable for &'a VecDeque<T> {
    type Item = &'a T;
    type Cursor = std::collections::vec_deque::Iter<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        let deque: &'a VecDeque<T> = *self;
        deque.iter()
    }
}

impl<A> Iterable for Range<A>
where
    Range<A>: Iterator<Item = A> + Clone,
{
    type Item = A;
    type Cursor = Range<A>;

    fn cursor(&self) -> Self::Cursor {
        self.clone()
    }
}

impl<A> Iterable for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator<Item = A> + Clone,
{
    type Item = A;
    type Cursor = RangeInclusive<A>;

    fn cursor(&self) -> Self::Cursor {
        self.clone()
    }
}

/// Unbounded: only safe behind a short-circuiting or `take`-limited consumer.
impl<A> Iterable for RangeFrom<A>
where
    RangeFrom<A>: Iterator<Item = A> + Clone,
{
    type Item = A;
    type Cursor = RangeFrom<A>;

    fn cursor(&self) -> Self::Cursor {
        self.clone()
    }
}
