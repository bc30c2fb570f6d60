// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: construction, structural queries, presentation state.

use alloc::vec::Vec;
use kurbo::Point;
use smallvec::SmallVec;

use crate::types::{NodeId, Presentation, Value};

/// Structural record for a node. Written once by [`HeapTree::from_values`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Shape {
    value: Value,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Binary tree built from a level-order (heap) value list.
///
/// Nodes live in an arena indexed by [`NodeId`]. Structure (values and child
/// links) is fixed at construction and kept apart from the mutable
/// [`Presentation`] of each node, so a layout or highlight pass can never
/// rewire the tree.
///
/// ## Example
///
/// ```rust
/// use core::num::NonZeroU32;
/// use sapling_heap_tree::{HeapTree, NodeId};
///
/// let values: Vec<NonZeroU32> = [1, 2, 3, 4, 5]
///     .into_iter()
///     .filter_map(NonZeroU32::new)
///     .collect();
/// let tree = HeapTree::from_values(&values);
///
/// assert_eq!(tree.len(), 5);
/// let two = tree.left(NodeId::ROOT).unwrap();
/// let four = tree.left(two).unwrap();
/// assert_eq!(tree.value(four).map(NonZeroU32::get), Some(4));
/// assert_eq!(tree.path_to(four), vec![NodeId::ROOT, two, four]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeapTree {
    shapes: Vec<Shape>,
    presentation: Vec<Presentation>,
}

/// Build a tree from level-order values, or `None` when `values` is empty.
pub fn build(values: &[Value]) -> Option<HeapTree> {
    let tree = HeapTree::from_values(values);
    (!tree.is_empty()).then_some(tree)
}

impl HeapTree {
    /// Build a tree where the node at index `i` holds `values[i]` and has
    /// children at `2i + 1` and `2i + 2` when those are in range.
    ///
    /// Every index in range produces a node; an empty slice produces an empty
    /// tree with no root. All nodes start unhighlighted and without an anchor.
    pub fn from_values(values: &[Value]) -> Self {
        let len = values.len();
        let slot = |s: Option<usize>| s.filter(|&c| c < len).map(NodeId);
        let shapes: Vec<Shape> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let id = NodeId(i);
                Shape {
                    value,
                    left: slot(id.left_slot()),
                    right: slot(id.right_slot()),
                }
            })
            .collect();
        let presentation = alloc::vec![Presentation::default(); len];
        let tree = Self {
            shapes,
            presentation,
        };
        tracing::debug!(nodes = len, height = tree.height(), "built heap tree");
        tree
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        (!self.is_empty()).then_some(NodeId::ROOT)
    }

    /// Returns true if `id` refers to a node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.shapes.len()
    }

    /// Value stored at `id`.
    pub fn value(&self, id: NodeId) -> Option<Value> {
        self.shapes.get(id.0).map(|s| s.value)
    }

    /// Left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.shapes.get(id.0).and_then(|s| s.left)
    }

    /// Right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.shapes.get(id.0).and_then(|s| s.right)
    }

    /// Existing children of `id`, left first.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.left(id).into_iter().chain(self.right(id))
    }

    /// Parent of `id`, or `None` for the root or a foreign identifier.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.contains(id) {
            return None;
        }
        id.parent_slot()
    }

    /// Depth of `id`, with the root at depth 0.
    pub fn depth_of(&self, id: NodeId) -> Option<u32> {
        if !self.contains(id) {
            return None;
        }
        // Depth is floor(log2(i + 1)); `i + 1` cannot overflow for a stored index.
        Some(usize::BITS - 1 - (id.0 + 1).leading_zeros())
    }

    /// Number of levels in the tree (0 when empty).
    pub fn height(&self) -> u32 {
        usize::BITS - self.len().leading_zeros()
    }

    /// Nodes from the root to `id`, both inclusive.
    ///
    /// Returns an empty path when `id` is not part of this tree.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(node);
            current = node.parent_slot();
        }
        path.reverse();
        path
    }

    /// Depth-first pre-order traversal: node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_> {
        let mut stack = SmallVec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }
        Preorder { tree: self, stack }
    }

    /// Presentation state of `id`.
    pub fn presentation(&self, id: NodeId) -> Option<&Presentation> {
        self.presentation.get(id.0)
    }

    /// Anchor (circle top-left corner) of `id`, if layout has run.
    pub fn anchor(&self, id: NodeId) -> Option<Point> {
        self.presentation.get(id.0).and_then(|p| p.anchor)
    }

    /// Record the anchor for `id`. Foreign identifiers are ignored.
    pub fn set_anchor(&mut self, id: NodeId, anchor: Point) {
        if let Some(p) = self.presentation.get_mut(id.0) {
            p.anchor = Some(anchor);
        }
    }

    /// Returns true if `id` is on the highlighted path.
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.presentation.get(id.0).is_some_and(|p| p.highlighted)
    }

    /// Iterate highlighted nodes in index order.
    pub fn highlighted(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.presentation
            .iter()
            .enumerate()
            .filter(|(_, p)| p.highlighted)
            .map(|(i, _)| NodeId(i))
    }

    /// Clear the highlight flag on every node.
    pub fn clear_highlights(&mut self) {
        for p in &mut self.presentation {
            p.highlighted = false;
        }
    }

    /// Make `path` the only highlighted nodes.
    ///
    /// All flags are cleared first, then every node in `path` is set.
    /// Identifiers outside the tree are ignored.
    pub fn highlight_path(&mut self, path: &[NodeId]) {
        self.clear_highlights();
        for id in path {
            if let Some(p) = self.presentation.get_mut(id.0) {
                p.highlighted = true;
            }
        }
    }
}

/// Pre-order iterator returned by [`HeapTree::preorder`].
///
/// Uses an explicit stack, so arbitrarily deep trees do not recurse.
#[derive(Clone, Debug)]
pub struct Preorder<'a> {
    tree: &'a HeapTree,
    stack: SmallVec<[NodeId; 32]>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(right) = self.tree.right(id) {
            self.stack.push(right);
        }
        if let Some(left) = self.tree.left(id) {
            self.stack.push(left);
        }
        Some(id)
    }
}
