//! Eager scalar operations
//!
//! Each call requests its own cursor from the source and drains it only as far
//! as the answer requires. Nothing is retained between calls.

use std::borrow::Borrow;

use crate::protocol::Iterable;

/// `true` when every element satisfies `predicate`.
///
/// Stops at the first failing element. An empty sequence is vacuously `true`.
pub fn every<S, P>(seq: S, mut predicate: P) -> bool
where
    S: Iterable,
    P: FnMut(S::Item) -> bool,
{
    for element in seq.cursor() {
        if !predicate(element) {
            return false;
        }
    }
    true
}

/// `true` when at least one element satisfies `predicate`.
///
/// Stops at the first match. An empty sequence is `false`.
pub fn some<S, P>(seq: S, mut predicate: P) -> bool
where
    S: Iterable,
    P: FnMut(S::Item) -> bool,
{
    for element in seq.cursor() {
        if predicate(element) {
            return true;
        }
    }
    false
}

/// First element satisfying `predicate`, or `None`.
pub fn find<S, P>(seq: S, mut predicate: P) -> Option<S::Item>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    seq.cursor().find(|element| predicate(element))
}

/// Position of the first element satisfying `predicate`.
pub fn find_index<S, P>(seq: S, predicate: P) -> Option<usize>
where
    S: Iterable,
    P: FnMut(S::Item) -> bool,
{
    seq.cursor().position(predicate)
}

/// Invoke `f` once per element, in traversal order.
pub fn for_each<S, F>(seq: S, f: F)
where
    S: Iterable,
    F: FnMut(S::Item),
{
    seq.cursor().for_each(f);
}

/// `true` when some element equals `value`.
pub fn includes<S, V>(seq: S, value: &V) -> bool
where
    S: Iterable,
    S::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    index_of(seq, value).is_some()
}

/// Position of the first element equal to `value`.
pub fn index_of<S, V>(seq: S, value: &V) -> Option<usize>
where
    S: Iterable,
    S::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    seq.cursor().position(|element| Borrow::<V>::borrow(&element) == value)
}

/// Position of the last element equal to `value`.
///
/// Always drains the whole sequence; never call it on an unbounded source.
pub fn last_index_of<S, V>(seq: S, value: &V) -> Option<usize>
where
    S: Iterable,
    S::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    let mut last = None;
    for (index, element) in seq.cursor().enumerate() {
        if Borrow::<V>::borrow(&element) == value {
            last = Some(index);
        }
    }
    last
}

/// Left fold seeded with the first element.
///
/// Folding starts at the second element. An empty source has no seed and
/// yields `None` instead of a fabricated accumulator.
pub fn reduce<S, F>(seq: S, f: F) -> Option<S::Item>
where
    S: Iterable,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut cursor = seq.cursor();
    let seed = cursor.next()?;
    Some(cursor.fold(seed, f))
}

/// Left fold starting from `initial`, visiting every element.
pub fn reduce_from<S, A, F>(seq: S, initial: A, f: F) -> A
where
    S: Iterable,
    F: FnMut(A, S::Item) -> A,
{
    seq.cursor().fold(initial, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::from_fn;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    const SCENARIO: [i32; 7] = [1, 3, 5, 6, 7, 3, 1];

    fn is_odd(x: &i32) -> bool {
        x % 2 != 0
    }

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_every_and_some() {
        assert!(!every(&SCENARIO, is_odd));
        assert!(some(&SCENARIO, is_odd));
        assert!(every(&SCENARIO, |x| *x > 0));
        assert!(!some(&SCENARIO, |x| *x > 7));
    }

    #[test]
    fn test_empty_sequence_edges() {
        let empty: Vec<i32> = Vec::new();
        assert!(every(&empty, |_| false));
        assert!(!some(&empty, |_| true));
        assert_eq!(find(&empty, |_| true), None);
        assert_eq!(find_index(&empty, |_| true), None);
        assert_eq!(last_index_of(&empty, &1), None);
    }

    #[test]
    fn test_every_short_circuits() {
        let visited = Cell::new(0);
        let result = every(&SCENARIO, |x| {
            visited.set(visited.get() + 1);
            is_odd(x)
        });
        assert!(!result);
        assert_eq!(visited.get(), 4, "should stop at the 6");
    }

    #[test]
    fn test_some_short_circuits_on_infinite_source() {
        assert!(some(1u64.., |n| n * n > 50));
        assert_eq!(find(0.., |n: &i32| *n > 0 && n % 17 == 0), Some(17));
    }

    #[test]
    fn test_find_and_find_index() {
        assert_eq!(find(&SCENARIO, |x| is_even(x)), Some(&6));
        assert_eq!(find_index(&SCENARIO, is_even), Some(3));
        assert_eq!(find_index(&SCENARIO, |x| *x == 42), None);
    }

    #[test]
    fn test_index_lookups() {
        assert!(includes(&SCENARIO, &5));
        assert!(!includes(&SCENARIO, &4));
        assert_eq!(index_of(&SCENARIO, &3), Some(1));
        assert_eq!(index_of(&SCENARIO, &4), None);
        assert_eq!(last_index_of(&SCENARIO, &3), Some(5));
        assert_eq!(last_index_of(&SCENARIO, &4), None);
    }

    #[test]
    fn test_index_counts_yielded_elements() {
        // Positions follow the cursor, not the backing store.
        let odds = from_fn(|| SCENARIO.into_iter().filter(|x| x % 2 != 0));
        assert_eq!(index_of(odds.clone(), &7), Some(3));
        assert_eq!(last_index_of(odds, &3), Some(4));
    }

    #[test]
    fn test_last_index_of_drains_everything() {
        let counter = Cell::new(0);
        let pulled = &counter;
        let counted = from_fn(move || {
            SCENARIO
                .into_iter()
                .inspect(move |_| pulled.set(pulled.get() + 1))
        });
        assert_eq!(last_index_of(counted, &1), Some(6));
        assert_eq!(counter.get(), SCENARIO.len());
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut visited = Vec::new();
        for_each(&SCENARIO, |x| visited.push(*x));
        assert_eq!(visited, SCENARIO);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(&SCENARIO, |a, b| if a > b { a } else { b }), Some(&7));
        assert_eq!(reduce(0..0, |a: i32, b| a + b), None);
        assert_eq!(reduce(19..20, |a, b| a + b), Some(19));
        assert_eq!(reduce_from(&SCENARIO, 0, |acc, x| acc + x), 26);
        assert_eq!(reduce_from(&Vec::<i32>::new(), 0, |acc, x| acc + x), 0);
    }

    #[test]
    fn test_reduce_seeds_with_first_element() {
        let mut calls = Vec::new();
        let total = reduce(1..=4, |acc, x| {
            calls.push((acc, x));
            acc + x
        });
        assert_eq!(total, Some(10));
        assert_eq!(calls, vec![(1, 2), (3, 3), (6, 4)]);
    }

    #[test]
    fn test_reduce_from_changes_accumulator_type() {
        let words = ["star", "it"];
        let joined = reduce_from(&words, String::new(), |mut acc, word| {
            if !acc.is_empty() {
                acc.push('-');
            }
            acc.push_str(word);
            acc
        });
        assert_eq!(joined, "star-it");
    }

    #[test]
    fn test_panicking_callback_stops_for_each_and_keeps_effects() {
        let seq = [1, 3, 5, 6, 7];
        let mut visited = Vec::new();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            for_each(&seq, |n| {
                if visited.len() == 2 {
                    panic!("callback failed on {}", n);
                }
                visited.push(*n);
            });
        }));

        let payload = outcome.expect_err("callback panic propagates");
        let message = payload.downcast_ref::<String>().map(String::as_str);
        assert_eq!(message, Some("callback failed on 5"));
        assert_eq!(visited, [1, 3]);
    }

    #[test]
    fn test_panicking_reducer_propagates() {
        let steps = Cell::new(0);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            reduce_from(&[1, 2, 3, 4], 0, |acc, n| {
                steps.set(steps.get() + 1);
                assert!(*n < 3, "reducer rejected {}", n);
                acc + n
            })
        }));
        assert!(outcome.is_err());
        assert_eq!(steps.get(), 3);
    }
}
