//! Lazy in-order traversals. Both keep an explicit stack of the nodes whose left subtrees are
//! being visited, so walking a degenerate tree doesn't recurse.

use std::iter::FusedIterator;

use crate::ordered::{Link, Node};

/// Borrowing in-order traversal of an [`OrderedTree`][crate::OrderedTree]. Yields every element
/// exactly once, in ascending order.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.element)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Consuming in-order traversal of an [`OrderedTree`][crate::OrderedTree]. Yields every element
/// by value, in ascending order.
pub struct IntoInOrder<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoInOrder<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

// Nodes left on the stack still own their right subtrees. Draining them here keeps a partially
// consumed traversal from dropping those subtrees recursively.
impl<T> Drop for IntoInOrder<T> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<T> Iterator for IntoInOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { element, right, .. } = *node;
        self.push_left_spine(right);
        Some(element)
    }
}

impl<T> FusedIterator for IntoInOrder<T> {}
