//! Table-driven checks of every operation against small fixed inputs.

mod common;

use std::collections::VecDeque;

use common::{is_even, is_odd, PullCounter, SCENARIO};
use star_it::{
    every, filter, find, find_index, for_each, from_fn, includes, index_of, last_index_of, map,
    reduce, reduce_from, skip, some, take, Iterable,
};
use test_case::test_case;

fn collect<S: Iterable>(seq: S) -> Vec<S::Item> {
    seq.cursor().collect()
}

#[test]
fn test_running_example() {
    let seq = SCENARIO.to_vec();

    assert!(!every(&seq, is_odd));
    assert!(some(&seq, is_even));
    assert_eq!(
        collect(filter(&seq, |n: &&i64| is_odd(n))),
        [&1, &3, &5, &7, &3, &1]
    );
    assert_eq!(find(&seq, |n: &&i64| is_even(n)), Some(&6));
    assert_eq!(find_index(&seq, is_even), Some(3));
    assert!(includes(&seq, &7));
    assert_eq!(index_of(&seq, &3), Some(1));
    assert_eq!(last_index_of(&seq, &3), Some(5));
    assert_eq!(reduce(map(&seq, |n| *n), |a, b| a + b), Some(26));
    assert_eq!(reduce_from(&seq, 0, |total, n| total + n), 26);
}

#[test_case(&[], true, false ; "empty")]
#[test_case(&[1, 3, 5], true, true ; "all odd")]
#[test_case(&[2, 4], false, false ; "all even")]
#[test_case(&[1, 2], false, true ; "mixed")]
fn test_every_and_some(values: &[i64], all_odd: bool, any_odd: bool) {
    assert_eq!(every(values, is_odd), all_odd);
    assert_eq!(some(values, is_odd), any_odd);
    assert_eq!(every(values, is_odd), !some(values, |n| !is_odd(n)));
}

#[test_case(&[1, 3, 5, 6, 7, 3, 1], 3, Some(1), Some(5) ; "repeated")]
#[test_case(&[1, 3, 5, 6, 7, 3, 1], 9, None, None ; "absent")]
#[test_case(&[], 3, None, None ; "empty")]
#[test_case(&[4], 4, Some(0), Some(0) ; "single")]
fn test_index_lookups(values: &[i64], needle: i64, first: Option<usize>, last: Option<usize>) {
    assert_eq!(index_of(values, &needle), first);
    assert_eq!(last_index_of(values, &needle), last);
    assert_eq!(includes(values, &needle), first.is_some());
}

#[test_case(5, 0, &[] ; "take none")]
#[test_case(5, 2, &[0, 1] ; "take some")]
#[test_case(5, 5, &[0, 1, 2, 3, 4] ; "take exactly all")]
#[test_case(5, 9, &[0, 1, 2, 3, 4] ; "take more than available")]
fn test_take_under_supply(len: i64, count: usize, expected: &[i64]) {
    assert_eq!(collect(take(0..len, count)), expected);
}

#[test_case(5, 0, &[0, 1, 2, 3, 4] ; "skip none")]
#[test_case(5, 3, &[3, 4] ; "skip some")]
#[test_case(5, 5, &[] ; "skip all")]
#[test_case(5, 9, &[] ; "skip past the end")]
fn test_skip_under_supply(len: i64, count: usize, expected: &[i64]) {
    assert_eq!(collect(skip(0..len, count)), expected);
}

#[test]
fn test_take_yields_then_signals_exhaustion() {
    let mut cursor = take(from_fn(|| (1..).step_by(2)), 2).cursor();
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_take_never_advances_source_past_count() {
    let counter = PullCounter::default();
    let pulled = &counter;
    let source = from_fn(move || (0..).inspect(move |_| pulled.record()));

    assert_eq!(collect(take(source, 3)), [0, 1, 2]);
    assert_eq!(counter.get(), 3);
}

#[test]
fn test_find_short_circuits() {
    let counter = PullCounter::default();
    let pulled = &counter;
    let source = from_fn(move || (0..).inspect(move |_| pulled.record()));

    assert_eq!(find(source, |n: &u32| *n == 4), Some(4));
    assert_eq!(counter.get(), 5);
}

#[test]
fn test_for_each_runs_once_per_element_in_order() {
    let mut seen = Vec::new();
    for_each(&VecDeque::from([3, 1, 2]), |n| seen.push(*n));
    assert_eq!(seen, [3, 1, 2]);
}

#[test]
fn test_reduce_edge_cases() {
    let empty: Vec<i64> = Vec::new();
    assert_eq!(reduce(&empty, |a, _| a), None);
    assert_eq!(reduce_from(&empty, 0, |total, n| total + n), 0);
    assert_eq!(reduce(&[42], |a, _| a), Some(&42));
    // The seeded fold may change type.
    let joined = reduce_from(&["a", "b", "c"], String::new(), |mut acc, s| {
        acc.push_str(s);
        acc
    });
    assert_eq!(joined, "abc");
}

#[test]
fn test_partially_drained_cursor_does_not_rewind() {
    let doubled = map(3..6, |n| n * 2);
    let mut cursor = doubled.cursor();
    assert_eq!(cursor.next(), Some(6));
    assert_eq!(cursor.by_ref().collect::<Vec<_>>(), [8, 10]);
    assert_eq!(cursor.next(), None);
    // A new request starts over.
    assert_eq!(collect(doubled), [6, 8, 10]);
}
