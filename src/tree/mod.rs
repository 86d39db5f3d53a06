//! Hierarchical node with configurable descendant order
//!
//! `&TreeNode<T>` is an [`Iterable`](crate::protocol::Iterable) whose cursor
//! walks the node's descendants depth-first (preorder) or breadth-first
//! (level order). It exists to exercise the traversal operations against a
//! custom iterable and is only compiled for tests and the `test-support`
//! feature.

mod node;
mod traversal;

pub use node::{Order, TreeNode};
pub use traversal::Descendants;
