//! Lazy sequence operations
//!
//! Each operation wraps its source in a new iterable and does no work until a
//! cursor is advanced. Cursors are explicit state machines holding at most the
//! source cursor and a counter; no element is buffered.
//!
//! Every lazy value is itself [`Iterable`] (each `cursor()` restarts from a
//! fresh source cursor) and [`IntoIterator`] (single pass, consumes the value).

use std::iter::{Fuse, FusedIterator};

use crate::protocol::Iterable;

/// Elements of `seq` satisfying `predicate`, in order.
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        source: seq,
        predicate,
    }
}

/// `transform(element)` for each element of `seq`.
pub fn map<S, F, B>(seq: S, transform: F) -> Map<S, F>
where
    S: Iterable,
    F: FnMut(S::Item) -> B,
{
    Map {
        source: seq,
        transform,
    }
}

/// Every element of `seq` after the first `count`.
pub fn skip<S: Iterable>(seq: S, count: usize) -> Skip<S> {
    Skip { source: seq, count }
}

/// At most the first `count` elements of `seq`.
pub fn take<S: Iterable>(seq: S, count: usize) -> Take<S> {
    Take { source: seq, count }
}

/// Lazy filtered sequence. Created by [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

/// Cursor over a [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterCursor<C, P> {
    source: Fuse<C>,
    predicate: P,
}

impl<S, P> Iterable for Filter<S, P>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            source: self.source.cursor().fuse(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<S, P> IntoIterator for Filter<S, P>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = FilterCursor<S::Cursor, P>;

    fn into_iter(self) -> Self::IntoIter {
        FilterCursor {
            source: self.source.cursor().fuse(),
            predicate: self.predicate,
        }
    }
}

impl<C, P> Iterator for FilterCursor<C, P>
where
    C: Iterator,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let predicate = &mut self.predicate;
        self.source.find(|element| predicate(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<C, P> FusedIterator for FilterCursor<C, P>
where
    C: Iterator,
    P: FnMut(&C::Item) -> bool,
{
}

/// Lazy transformed sequence. Created by [`map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

/// Cursor over a [`Map`].
#[derive(Debug, Clone)]
pub struct MapCursor<C, F> {
    source: Fuse<C>,
    transform: F,
}

impl<S, F, B> Iterable for Map<S, F>
where
    S: Iterable,
    F: FnMut(S::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            source: self.source.cursor().fuse(),
            transform: self.transform.clone(),
        }
    }
}

impl<S, F, B> IntoIterator for Map<S, F>
where
    S: Iterable,
    F: FnMut(S::Item) -> B,
{
    type Item = B;
    type IntoIter = MapCursor<S::Cursor, F>;

    fn into_iter(self) -> Self::IntoIter {
        MapCursor {
            source: self.source.cursor().fuse(),
            transform: self.transform,
        }
    }
}

impl<C, F, B> Iterator for MapCursor<C, F>
where
    C: Iterator,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.source.next().map(&mut self.transform)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<C, F, B> FusedIterator for MapCursor<C, F>
where
    C: Iterator,
    F: FnMut(C::Item) -> B,
{
}

/// Lazy suffix of a sequence. Created by [`skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

/// Cursor over a [`Skip`].
///
/// `pending` holds how many elements are still to be discarded; the discard
/// happens on the first advance, not when the cursor is created.
#[derive(Debug, Clone)]
pub struct SkipCursor<C> {
    source: Fuse<C>,
    pending: usize,
}

impl<S: Iterable> Iterable for Skip<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor {
            source: self.source.cursor().fuse(),
            pending: self.count,
        }
    }
}

impl<S: Iterable> IntoIterator for Skip<S> {
    type Item = S::Item;
    type IntoIter = SkipCursor<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<C: Iterator> Iterator for SkipCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.source.next().is_none() {
                // Short source: nothing left to discard or yield.
                self.pending = 0;
                return None;
            }
        }
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

impl<C: Iterator> FusedIterator for SkipCursor<C> {}

/// Lazy prefix of a sequence. Created by [`take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

/// Cursor over a [`Take`].
///
/// Once `remaining` reaches zero the source is never advanced again.
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    source: C,
    remaining: usize,
}

impl<S: Iterable> Iterable for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            source: self.source.cursor(),
            remaining: self.count,
        }
    }
}

impl<S: Iterable> IntoIterator for Take<S> {
    type Item = S::Item;
    type IntoIter = TakeCursor<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<C: Iterator> Iterator for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.next() {
            Some(element) => {
                self.remaining -= 1;
                Some(element)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

impl<C: Iterator> FusedIterator for TakeCursor<C> {}
