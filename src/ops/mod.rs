//! Traversal operations over any [`Iterable`](crate::protocol::Iterable)
//!
//! Eager operations drain a fresh cursor and return a scalar; lazy operations
//! return a new iterable that pulls from its source one element at a time.
//!
//! Argument contracts are the trait bounds: a non-iterable source or a
//! closure of the wrong shape is rejected at compile time, before anything
//! is traversed. Runtime-shaped inputs go through [`crate::dynamic::ops`].

mod eager;
mod lazy;

pub use eager::{
    every, find, find_index, for_each, includes, index_of, last_index_of, reduce, reduce_from,
    some,
};
pub use lazy::{
    filter, map, skip, take, Filter, FilterCursor, Map, MapCursor, Skip, SkipCursor, Take,
    TakeCursor,
};
