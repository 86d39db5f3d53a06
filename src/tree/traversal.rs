//! Descendant traversal
//!
//! Depth-first keeps a stack of frames, one per open level, so the walk is
//! lazy and needs O(depth) space. After yielding a child it continues into
//! that child's subtree in the child's own order: a depth-first child opens
//! a frame over its children, a breadth-first child opens a nested
//! level-order cursor.
//! Breadth-first keeps the current level and collects the next one while the
//! current level is being yielded. It does not consult descendants' orders.

use std::iter::FusedIterator;
use std::slice;

use super::node::{Order, TreeNode};

/// Cursor over the descendants of a [`TreeNode`], excluding the node itself.
#[derive(Debug, Clone)]
pub struct Descendants<'a, T> {
    state: State<'a, T>,
}

#[derive(Debug, Clone)]
enum State<'a, T> {
    DepthFirst {
        /// Frames of every level still being walked
        stack: Vec<Frame<'a, T>>,
    },
    BreadthFirst {
        level: Vec<&'a TreeNode<T>>,
        position: usize,
        next_level: Vec<&'a TreeNode<T>>,
    },
}

#[derive(Debug, Clone)]
enum Frame<'a, T> {
    Children(slice::Iter<'a, TreeNode<T>>),
    Nested(Box<Descendants<'a, T>>),
}

impl<'a, T> Frame<'a, T> {
    fn open(node: &'a TreeNode<T>) -> Self {
        match node.order() {
            Order::DepthFirst => Frame::Children(node.children().iter()),
            Order::BreadthFirst => {
                Frame::Nested(Box::new(Descendants::new(node, Order::BreadthFirst)))
            }
        }
    }
}

impl<'a, T> Descendants<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>, order: Order) -> Self {
        let state = match order {
            Order::DepthFirst => State::DepthFirst {
                stack: vec![Frame::Children(root.children().iter())],
            },
            Order::BreadthFirst => State::BreadthFirst {
                level: root.children().iter().collect(),
                position: 0,
                next_level: Vec::new(),
            },
        };
        Self { state }
    }

    /// Number of levels currently open (depth-first) or buffered (breadth-first).
    pub fn depth(&self) -> usize {
        match &self.state {
            State::DepthFirst { stack } => stack.len(),
            State::BreadthFirst { level, next_level, .. } => {
                usize::from(!level.is_empty()) + usize::from(!next_level.is_empty())
            }
        }
    }
}

impl<'a, T> Iterator for Descendants<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::DepthFirst { stack } => loop {
                match stack.last_mut()? {
                    Frame::Children(children) => match children.next() {
                        Some(node) => {
                            stack.push(Frame::open(node));
                            return Some(node);
                        }
                        None => {
                            stack.pop();
                        }
                    },
                    Frame::Nested(nested) => match nested.next() {
                        Some(node) => return Some(node),
                        None => {
                            stack.pop();
                        }
                    },
                }
            },
            State::BreadthFirst {
                level,
                position,
                next_level,
            } => loop {
                if let Some(&node) = level.get(*position) {
                    *position += 1;
                    next_level.extend(node.children().iter());
                    return Some(node);
                }
                if next_level.is_empty() {
                    level.clear();
                    return None;
                }
                std::mem::swap(level, next_level);
                next_level.clear();
                *position = 0;
            },
        }
    }
}

impl<T> FusedIterator for Descendants<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// a -> [b, c], b -> [d, e], c -> [f]
    fn sample() -> TreeNode<char> {
        let mut a = TreeNode::new('a');
        let b = a.add_child(TreeNode::new('b'));
        b.add_children([TreeNode::new('d'), TreeNode::new('e')]);
        a.add_child(TreeNode::new('c')).add_child(TreeNode::new('f'));
        a
    }

    fn values(descendants: Descendants<'_, char>) -> String {
        descendants.map(|node| *node.value()).collect()
    }

    #[test]
    fn test_depth_first_preorder() {
        let tree = sample();
        assert_eq!(values(tree.descendants()), "bdecf");
    }

    #[test]
    fn test_breadth_first_level_order() {
        let tree = sample().with_order(Order::BreadthFirst);
        assert_eq!(values(tree.descendants()), "bcdef");
    }

    #[test]
    fn test_explicit_order_overrides_node_setting() {
        let tree = sample().with_order(Order::BreadthFirst);
        assert_eq!(values(tree.descendants_in(Order::DepthFirst)), "bdecf");
    }

    #[test]
    fn test_subtree_traversal_excludes_subtree_root() {
        let tree = sample();
        let b = &tree.children()[0];
        assert_eq!(values(b.descendants()), "de");
    }

    #[test]
    fn test_exhausted_traversal_stays_exhausted() {
        let tree = sample();
        for order in [Order::DepthFirst, Order::BreadthFirst] {
            let mut cursor = tree.descendants_in(order);
            assert_eq!(cursor.by_ref().count(), 5);
            assert!(cursor.next().is_none());
            assert!(cursor.next().is_none());
        }
    }

    #[test]
    fn test_deep_chain() {
        let mut root = TreeNode::new(0);
        let mut tip = &mut root;
        for value in 1..=50 {
            tip = tip.add_child(TreeNode::new(value));
        }

        let depth_first: Vec<i32> = root.descendants().map(|n| *n.value()).collect();
        let breadth_first: Vec<i32> = root
            .descendants_in(Order::BreadthFirst)
            .map(|n| *n.value())
            .collect();
        assert_eq!(depth_first, (1..=50).collect::<Vec<_>>());
        assert_eq!(breadth_first, depth_first);
    }

    #[test]
    fn test_depth_first_continues_in_child_order() {
        // root -> [b], b (breadth-first) -> [d, e], d -> [x]
        let mut root = TreeNode::new('r');
        let b = root.add_child(TreeNode::new('b').with_order(Order::BreadthFirst));
        b.add_child(TreeNode::new('d')).add_child(TreeNode::new('x'));
        b.add_child(TreeNode::new('e'));

        assert_eq!(values(root.descendants()), "bdex");
        // Level order never consults descendants' settings.
        assert_eq!(values(root.descendants_in(Order::BreadthFirst)), "bdex");
    }

    #[test]
    fn test_breadth_first_child_inside_depth_first_walk() {
        // a -> [b, c], b (breadth-first) -> [d -> [g], e -> [h]], c -> [f]
        let mut a = TreeNode::new('a');
        let b = a.add_child(TreeNode::new('b').with_order(Order::BreadthFirst));
        b.add_child(TreeNode::new('d')).add_child(TreeNode::new('g'));
        b.add_child(TreeNode::new('e')).add_child(TreeNode::new('h'));
        a.add_child(TreeNode::new('c')).add_child(TreeNode::new('f'));

        assert_eq!(values(a.descendants()), "bdeghcf");
        let mut cursor = a.descendants();
        cursor.next(); // b
        // Root frame plus the nested level-order cursor for b.
        assert_eq!(cursor.depth(), 2);
    }

    #[test]
    fn test_depth_first_stack_tracks_open_levels() {
        let tree = sample();
        let mut cursor = tree.descendants();
        assert_eq!(cursor.depth(), 1);
        cursor.next(); // b
        cursor.next(); // d
        assert_eq!(cursor.depth(), 3);
    }
}
