//! Hierarchical node
//!
//! A node owns its children outright (no sharing, no cycles). Children are
//! appended after construction and never removed.

use std::fmt;

use super::traversal::Descendants;
use crate::protocol::Iterable;

/// Order in which a node's descendants are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Preorder: each child, then that child's whole subtree.
    #[default]
    DepthFirst,

    /// Level order: all children, then all grandchildren, and so on.
    BreadthFirst,
}

/// Tree node carrying a value and an ordered list of children.
///
/// Iterating a node visits its descendants only; the node itself is never
/// yielded.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
    order: Order,
}

impl<T> TreeNode<T> {
    /// Create a leaf with depth-first order.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
            order: Order::DepthFirst,
        }
    }

    /// Builder-style order selection.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Node payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Direct children, in insertion order.
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    /// Traversal order used when this node is iterated.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Change the traversal order.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    /// Append a child and return it for further building.
    pub fn add_child(&mut self, child: TreeNode<T>) -> &mut TreeNode<T> {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Append several children, keeping their order.
    pub fn add_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = TreeNode<T>>,
    {
        self.children.extend(children);
    }

    /// Descendants in this node's order.
    ///
    /// A depth-first walk continues into each child's subtree in that
    /// child's own order; a breadth-first walk uses level order throughout.
    pub fn descendants(&self) -> Descendants<'_, T> {
        Descendants::new(self, self.order)
    }

    /// Descendants in an explicit order, ignoring this node's own setting.
    /// Descendants' settings still apply as in [`TreeNode::descendants`].
    pub fn descendants_in(&self, order: Order) -> Descendants<'_, T> {
        Descendants::new(self, order)
    }
}

impl<'a, T> Iterable for &'a TreeNode<T> {
    type Item = &'a TreeNode<T>;
    type Cursor = Descendants<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        let node: &'a TreeNode<T> = *self;
        node.descendants()
    }
}

impl<'a, T> IntoIterator for &'a TreeNode<T> {
    type Item = &'a TreeNode<T>;
    type IntoIter = Descendants<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.descendants()
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if !self.children.is_empty() {
            write!(f, "(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
