//! Generator-backed iterables
//!
//! A generator body is modelled as a factory closure. Every cursor request
//! re-enters the factory, so the iterable itself carries no traversal state.

use std::fmt;

use super::Iterable;

/// Iterable whose cursors come from calling a factory.
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct Generated<F> {
    factory: F,
}

/// Build an iterable from a factory returning anything iterable.
///
/// ```
/// use star_it::protocol::{from_fn, Iterable};
///
/// let squares = from_fn(|| (1..=3).map(|n| n * n));
/// assert_eq!(squares.cursor().collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(squares.cursor().last(), Some(9));
/// ```
pub fn from_fn<F, I>(factory: F) -> Generated<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Generated { factory }
}

impl<F, I> Iterable for Generated<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = I::IntoIter;

    fn cursor(&self) -> Self::Cursor {
        (self.factory)().into_iter()
    }
}

impl<F> fmt::Debug for Generated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated").finish_non_exhaustive()
    }
}
