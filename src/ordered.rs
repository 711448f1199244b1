//! A mutable, unbalanced BST that owns each subtree through a `Box`. Removing an element walks
//! down to the child slot holding it and stores the replacement subtree back into that slot, so
//! re-linking after a deletion is just a move of owned handles. An unbalanced tree can be as deep
//! as it is large, so the operations walk the tree with loops and explicit stacks.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting an equal element is rejected.
//! assert!(!tree.insert(1));
//!
//! assert!(tree.remove(&1));
//! assert_eq!(tree.find(&1), None);
//!
//! // Removing it again finds nothing.
//! assert!(!tree.remove(&1));
//! ```

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::io;

use tracing::{instrument, trace};

use crate::iter::{InOrder, IntoInOrder};
use crate::util::Removal;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree holding distinct elements. This can be used for inserting,
/// finding, and removing elements, and for walking them in ascending order.
///
/// Two trees compare equal only when they have the same shape and hold equal elements at every
/// position. Trees holding the same elements but built in a different insertion order are usually
/// _not_ equal.
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    /// Copies the tree node by node with an explicit stack, keeping its exact shape.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut pending = Vec::new();
        if let Some(node) = self.root.as_deref() {
            pending.push((node, &mut root));
        }

        while let Some((source, slot)) = pending.pop() {
            let copy = slot.insert(Node::new_boxed(source.element.clone()));
            if let Some(left) = source.left.as_deref() {
                pending.push((left, &mut copy.left));
            }
            if let Some(right) = source.right.as_deref() {
                pending.push((right, &mut copy.right));
            }
        }

        Self { root }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root)
            .finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Potentially finds the stored element equal to `element`. The returned reference points at
    /// the instance that was inserted, not at the probe.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, element: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.element),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Inserts `element` as a new leaf and returns `true`. If an equal element is already stored,
    /// nothing changes and `false` is returned. The tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            match slot {
                None => {
                    *slot = Some(Node::new_boxed(element));
                    return true;
                }
                Some(node) => match element.cmp(&node.element) {
                    Ordering::Less => slot = &mut node.left,
                    Ordering::Equal => {
                        trace!("duplicate rejected");
                        return false;
                    }
                    Ordering::Greater => slot = &mut node.right,
                },
            }
        }
    }

    /// Removes the element equal to `element` and returns `true`. If no such element is stored,
    /// the tree is untouched and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [5, 2, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &8]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: Ord,
    {
        self.take(element).is_some()
    }

    /// Removes the element equal to `element` and hands the stored instance back. Returns `None`
    /// (leaving the tree untouched) when no such element is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("kept"));
    ///
    /// assert_eq!(tree.take(&String::from("kept")), Some(String::from("kept")));
    /// assert_eq!(tree.take(&String::from("kept")), None);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn take(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let removal = Node::remove(&mut self.root, element);
        if matches!(removal, Removal::NotFound) {
            trace!("element not found");
        }
        removal.into_removed()
    }

    /// Drops every element in the tree.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        release(self.root.take());
    }

    /// Returns `true` if both trees have the same shape and hold equal elements at every
    /// position. This is _not_ set equality: the same elements inserted in a different order
    /// may produce a different shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let chain: OrderedTree<_> = [1, 2, 3].into_iter().collect();
    /// let balanced: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(chain.iter().eq(balanced.iter()));
    /// assert!(!chain.structural_equals(&balanced));
    /// assert!(chain.structural_equals(&chain.clone()));
    /// ```
    pub fn structural_equals<U>(&self, other: &OrderedTree<U>) -> bool
    where
        T: PartialEq<U>,
    {
        Node::subtree_equals(self.root.as_deref(), other.root.as_deref())
    }

    /// Like [`structural_equals`][Self::structural_equals] for a value whose type is only known at
    /// runtime. Anything that isn't an `OrderedTree<T>` is simply not equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let numbers: OrderedTree<_> = [1, 2].into_iter().collect();
    /// let words: OrderedTree<_> = ["1", "2"].into_iter().collect();
    ///
    /// assert!(numbers.structural_equals_any(&numbers.clone()));
    /// assert!(!numbers.structural_equals_any(&words));
    /// assert!(!numbers.structural_equals_any(&42));
    /// ```
    pub fn structural_equals_any(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        match other.downcast_ref::<Self>() {
            Some(other) => self.structural_equals(other),
            None => {
                trace!("compared against a different type");
                false
            }
        }
    }

    /// Walks the elements in ascending order. Every call starts a fresh traversal.
    pub fn traverse_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Shorthand for [`traverse_in_order`][Self::traverse_in_order].
    pub fn iter(&self) -> InOrder<'_, T> {
        self.traverse_in_order()
    }

    /// Writes every element on its own line, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_in_order(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"1\n2\n3\n");
    /// ```
    pub fn write_in_order<W>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        for element in self.iter() {
            writeln!(out, "{}", element)?;
        }
        out.flush()
    }

    /// Prints every element to stdout on its own line, in ascending order.
    pub fn print_in_order(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.write_in_order(io::stdout().lock())
    }

}

impl<T, U> PartialEq<OrderedTree<U>> for OrderedTree<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &OrderedTree<U>) -> bool {
        self.structural_equals(other)
    }
}

impl<T> Eq for OrderedTree<T> where T: Eq {}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoInOrder<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoInOrder::new(self.root.take())
    }
}

/// Drops a subtree without recursing. Each left child is rotated up over its parent until the
/// current node has no left child, at which point it is dropped and its right child is next. This
/// keeps degenerate (list shaped) trees from exhausting the stack.
fn release<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = match node.left.take() {
            Some(mut left) => {
                node.left = left.right.take();
                left.right = Some(node);
                Some(left)
            }
            None => node.right.take(),
        };
    }
}

/// A single stored element and its (possibly empty) subtrees.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    /// Removes `element` from the subtree hanging off `root`, storing whatever replaces the
    /// removed node back into the slot that held it.
    fn remove(root: &mut Link<T>, element: &T) -> Removal<T>
    where
        T: Ord,
    {
        let Some(slot) = Self::matching_slot(root, element) else {
            return Removal::NotFound;
        };
        let Some(node) = slot.take() else {
            return Removal::NotFound;
        };

        let (replacement, removed) = node.unlink();
        *slot = replacement;
        Removal::Removed(removed)
    }

    /// Walks down from `slot` to the child slot holding `element`, if any.
    fn matching_slot<'a>(mut slot: &'a mut Link<T>, element: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        loop {
            let ordering = element.cmp(&slot.as_deref()?.element);
            if ordering == Ordering::Equal {
                return Some(slot);
            }

            let node = slot.as_mut()?;
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Takes this node out of the tree. Returns the subtree that takes its place along with the
    /// removed element.
    fn unlink(mut self: Box<Self>) -> (Link<T>, T)
    where
        T: Ord,
    {
        match (self.left.take(), self.right.take()) {
            (None, None) => (None, self.element),
            (Some(child), None) | (None, Some(child)) => (Some(child), self.element),
            // Two children: relabel this node with the in-order successor and splice the
            // successor's old position out of the right subtree.
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let Some(successor) = Self::extract_min(&mut right) else {
                    unreachable!("A non-empty right subtree has a minimum.");
                };
                let removed = std::mem::replace(&mut self.element, successor);
                self.left = Some(left);
                self.right = right;

                if cfg!(debug_assertions) {
                    if let Some(right) = self.right.as_deref() {
                        assert!(self.element < right.element);
                    }
                }

                (Some(self), removed)
            }
        }
    }

    /// Detaches the smallest node of the subtree in `slot` and returns its element. The smallest
    /// node's right subtree takes its place, which is `slot` itself when the subtree's root is the
    /// smallest.
    fn extract_min(mut slot: &mut Link<T>) -> Option<T> {
        while slot.as_deref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min.element)
    }

    fn subtree_equals<U>(this: Option<&Self>, other: Option<&Node<U>>) -> bool
    where
        T: PartialEq<U>,
    {
        let mut pending = vec![(this, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(this), Some(other)) => {
                    if this.element != other.element {
                        return false;
                    }
                    pending.push((this.right.as_deref(), other.right.as_deref()));
                    pending.push((this.left.as_deref(), other.left.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}
