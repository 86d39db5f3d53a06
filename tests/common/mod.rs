#![allow(dead_code)]

use std::cell::Cell;

use star_it::dynamic::Value;
use star_it::tree::TreeNode;

/// The running example: `[1, 3, 5, 6, 7, 3, 1]`.
pub const SCENARIO: [i64; 7] = [1, 3, 5, 6, 7, 3, 1];

pub fn is_odd(n: &i64) -> bool {
    n % 2 != 0
}

pub fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

/// `a -> [b, c]`, `b -> [d, e]`, `c -> [f]`.
pub fn sample_tree() -> TreeNode<char> {
    let mut a = TreeNode::new('a');
    a.add_child(TreeNode::new('b'))
        .add_children([TreeNode::new('d'), TreeNode::new('e')]);
    a.add_child(TreeNode::new('c')).add_child(TreeNode::new('f'));
    a
}

/// Full tree of the given depth where every inner node has `fanout` children.
/// Values number the nodes in creation (preorder) order.
pub fn full_tree(depth: usize, fanout: usize) -> TreeNode<usize> {
    fn build(depth: usize, fanout: usize, next: &mut usize) -> TreeNode<usize> {
        let mut node = TreeNode::new(*next);
        *next += 1;
        if depth > 0 {
            for _ in 0..fanout {
                node.add_child(build(depth - 1, fanout, next));
            }
        }
        node
    }
    build(depth, fanout, &mut 0)
}

/// Integer list value.
pub fn int_list(values: &[i64]) -> Value {
    Value::list(values.iter().copied().map(Value::Int))
}

/// Integer values, for comparing drained sequences.
pub fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

/// Drain a lazy sequence value.
pub fn drain(value: &Value) -> Vec<Value> {
    match value {
        Value::Seq(sequence) => sequence.erased_cursor().collect(),
        other => panic!("expected a sequence, got {}", other.kind()),
    }
}

/// Counts how many elements a source yields to its consumer.
#[derive(Debug, Default)]
pub struct PullCounter {
    pulled: Cell<usize>,
}

impl PullCounter {
    pub fn record(&self) {
        self.pulled.set(self.pulled.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.pulled.get()
    }
}
