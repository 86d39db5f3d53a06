//! Dynamic iterables and cursors
//!
//! [`Sequence`] erases any typed `Iterable<Item = Value>` so lazy results can
//! travel inside a [`Value`]. [`CursorHandle`] is a shared single-pass cursor.
//! [`Source`] is the validated iterable capability handed out by
//! [`crate::contract::assert_is_iterable`].

use std::cell::RefCell;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::rc::Rc;

use super::value::Value;
use crate::protocol::Iterable;

type BoxedCursor = Box<dyn Iterator<Item = Value>>;

trait ErasedIterable {
    fn erased_cursor(&self) -> BoxedCursor;
}

impl<S> ErasedIterable for S
where
    S: Iterable<Item = Value>,
    S::Cursor: 'static,
{
    fn erased_cursor(&self) -> BoxedCursor {
        Box::new(Iterable::cursor(self))
    }
}

/// Lazy, re-iterable sequence of values.
#[derive(Clone)]
pub struct Sequence {
    inner: Rc<dyn ErasedIterable>,
}

impl Sequence {
    /// Erase a typed iterable.
    pub fn new<S>(source: S) -> Self
    where
        S: Iterable<Item = Value> + 'static,
        S::Cursor: 'static,
    {
        Self {
            inner: Rc::new(source),
        }
    }

    /// Fresh cursor from the start of the sequence.
    pub fn erased_cursor(&self) -> Box<dyn Iterator<Item = Value>> {
        self.inner.erased_cursor()
    }

    pub(crate) fn same(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

/// Shared, fused, single-pass cursor.
///
/// Clones advance the same underlying position.
#[derive(Clone)]
pub struct CursorHandle {
    inner: Rc<RefCell<Fuse<BoxedCursor>>>,
}

impl CursorHandle {
    /// Wrap a cursor.
    pub fn new<I>(cursor: I) -> Self
    where
        I: Iterator<Item = Value> + 'static,
    {
        let boxed: BoxedCursor = Box::new(cursor);
        Self {
            inner: Rc::new(RefCell::new(boxed.fuse())),
        }
    }

    /// Next value, or `None` once exhausted (and forever after).
    pub fn advance(&self) -> Option<Value> {
        self.inner.borrow_mut().next()
    }

    pub(crate) fn same(&self, other: &CursorHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CursorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorHandle").finish_non_exhaustive()
    }
}

/// A value proven to be iterable.
#[derive(Debug, Clone)]
pub enum Source {
    /// List elements.
    Items(Rc<[Value]>),
    /// Characters of a string, each as a one-character string.
    Text(Rc<str>),
    /// Lazy sequence; restarts per cursor.
    Seq(Sequence),
    /// Remaining elements of a shared cursor.
    Cursor(CursorHandle),
}

impl Iterable for Source {
    type Item = Value;
    type Cursor = Elements;

    fn cursor(&self) -> Elements {
        let state = match self {
            Source::Items(items) => ElementsState::Items {
                items: Rc::clone(items),
                next: 0,
            },
            Source::Text(text) => ElementsState::Text {
                text: Rc::clone(text),
                offset: 0,
            },
            Source::Seq(sequence) => ElementsState::Erased(sequence.erased_cursor()),
            Source::Cursor(handle) => ElementsState::Shared(handle.clone()),
        };
        Elements { state }
    }
}

/// Cursor over a [`Source`].
pub struct Elements {
    state: ElementsState,
}

enum ElementsState {
    Items { items: Rc<[Value]>, next: usize },
    Text { text: Rc<str>, offset: usize },
    Erased(BoxedCursor),
    Shared(CursorHandle),
    Done,
}

impl Iterator for Elements {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let element = match &mut self.state {
            ElementsState::Items { items, next } => {
                let element = items.get(*next).cloned();
                *next += 1;
                element
            }
            ElementsState::Text { text, offset } => text[*offset..].chars().next().map(|ch| {
                *offset += ch.len_utf8();
                Value::Str(Rc::from(ch.to_string()))
            }),
            ElementsState::Erased(cursor) => cursor.next(),
            ElementsState::Shared(handle) => handle.advance(),
            ElementsState::Done => None,
        };
        if element.is_none() {
            self.state = ElementsState::Done;
        }
        element
    }
}

impl FusedIterator for Elements {}

impl fmt::Debug for Elements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            ElementsState::Items { .. } => "items",
            ElementsState::Text { .. } => "text",
            ElementsState::Erased(_) => "sequence",
            ElementsState::Shared(_) => "cursor",
            ElementsState::Done => "done",
        };
        f.debug_struct("Elements").field("state", &state).finish()
    }
}
