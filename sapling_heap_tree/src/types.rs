// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the heap tree: node identifiers, values, and per-node presentation.

use core::num::NonZeroU32;

use kurbo::Point;

/// A node value. Values are strictly positive and need not be unique.
pub type Value = NonZeroU32;

/// Identifier for a node in a [`HeapTree`](crate::HeapTree).
///
/// The identifier is the node's 0-based position in the level-order input,
/// so the children of `i` are `2i + 1` and `2i + 2`. Identifiers are only
/// meaningful for the tree they came from; trees are rebuilt, never edited.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of any non-empty tree.
    pub const ROOT: Self = Self(0);

    /// Create an identifier from a level-order index.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// The level-order index of this node.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Index of the left child slot, if it is representable.
    pub(crate) fn left_slot(self) -> Option<usize> {
        self.0.checked_mul(2)?.checked_add(1)
    }

    /// Index of the right child slot, if it is representable.
    pub(crate) fn right_slot(self) -> Option<usize> {
        self.0.checked_mul(2)?.checked_add(2)
    }

    /// The heap parent, or `None` for the root.
    pub(crate) fn parent_slot(self) -> Option<Self> {
        (self.0 > 0).then(|| Self((self.0 - 1) / 2))
    }
}

/// Presentation state of a node.
///
/// These are the only per-node fields that change after a tree is built:
/// layout writes `anchor`, clicks toggle `highlighted`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Presentation {
    /// Top-left corner of the node's circle in canvas space.
    ///
    /// `None` until the first layout pass.
    pub anchor: Option<Point>,
    /// Whether the node lies on the currently selected root→node path.
    pub highlighted: bool,
}
