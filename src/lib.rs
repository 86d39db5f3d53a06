//! # Lazy sequence operations over any iterable
//!
//! `every`, `some`, `filter`, `find`, `find_index`, `for_each`, `includes`,
//! `index_of`, `last_index_of`, `map`, `reduce`, `skip` and `take` work
//! uniformly on anything implementing [`Iterable`]: slices, vectors, deques,
//! ranges, generator-backed iterables and custom types.
//!
//! ## Laziness
//!
//! `filter`, `map`, `skip` and `take` return new iterables and do no work
//! until a cursor is advanced. They pull one element at a time, buffer
//! nothing and never advance their source further than needed, so they are
//! safe on unbounded sources:
//!
//! ```
//! use star_it::{filter, take, Iterable};
//!
//! let odd = filter(1u64.., |n: &u64| n % 2 == 1);
//! let first: Vec<u64> = take(odd, 3).cursor().collect();
//! assert_eq!(first, [1, 3, 5]);
//! ```
//!
//! ## Eager operations
//!
//! ```
//! use star_it::{every, find_index, index_of, last_index_of, reduce_from};
//!
//! let seq = vec![1, 3, 5, 6, 7, 3, 1];
//! assert!(!every(&seq, |n| n % 2 == 1));
//! assert_eq!(find_index(&seq, |n| n % 2 == 0), Some(3));
//! assert_eq!(index_of(&seq, &3), Some(1));
//! assert_eq!(last_index_of(&seq, &3), Some(5));
//! assert_eq!(reduce_from(&seq, 0, |total, n| total + n), 26);
//! ```
//!
//! ## Runtime-shaped input
//!
//! [`dynamic`] carries the same operations over JSON-like [`dynamic::Value`]s,
//! validating each argument against the [`contract`] checks before traversal.

#![warn(missing_docs, missing_debug_implementations)]

pub mod contract;
pub mod dynamic;
pub mod logging;
pub mod ops;
pub mod protocol;
#[cfg(any(test, feature = "test-support"))]
pub mod tree;

pub use contract::ContractViolation;
pub use ops::{
    every, filter, find, find_index, for_each, includes, index_of, last_index_of, map, reduce,
    reduce_from, skip, some, take,
};
pub use protocol::{from_fn, Iterable};
