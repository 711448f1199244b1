//! This crate exposes a mutable, unbalanced Binary Search Tree (BST) over any totally ordered
//! element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants no two stored elements compare equal, and
//! searching takes `O(height)` (where `height` is the longest path from the
//! root `Node` to a leaf `Node`). [`OrderedTree`] never rebalances, so the
//! height depends entirely on insertion order: inserting sorted elements
//! produces a chain. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for element in [5, 2, 8, 6, 9, 7] {
//!     tree.insert(element);
//! }
//!
//! // 5 has two children so it is relabeled with its in-order successor.
//! assert!(tree.remove(&5));
//!
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [2, 6, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod iter;
mod ordered;
mod util;

pub use iter::{InOrder, IntoInOrder};
pub use ordered::OrderedTree;
