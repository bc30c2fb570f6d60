// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight state: which root→node path is currently selected.
//!
//! ## Minimal example
//!
//! ```
//! use core::num::NonZeroU32;
//! use sapling_heap_tree::{HeapTree, NodeId};
//! use sapling_surface::HighlightState;
//!
//! let values: Vec<NonZeroU32> = [1, 2, 3].into_iter().filter_map(NonZeroU32::new).collect();
//! let mut tree = HeapTree::from_values(&values);
//! let mut state = HighlightState::default();
//!
//! let path = tree.path_to(NodeId::from_index(2));
//! assert!(state.select(&mut tree, path.clone()));
//! assert_eq!(state.path(), path.as_slice());
//! assert_eq!(tree.highlighted().collect::<Vec<_>>(), path);
//!
//! // An empty path (a miss) keeps the current selection.
//! assert!(!state.select(&mut tree, Vec::new()));
//! assert_eq!(state.target(), Some(NodeId::from_index(2)));
//! ```

use alloc::vec::Vec;
use sapling_heap_tree::{HeapTree, NodeId};

/// Selection state of one tree.
///
/// Starts `Idle`. Each successful hit moves to `PathHighlighted` with the new
/// path, replacing any previous one. There is no way back to `Idle` other than
/// building a new tree, which starts with no highlights.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HighlightState {
    /// Nothing selected.
    #[default]
    Idle,
    /// The root→target path that is highlighted, root first.
    PathHighlighted(Vec<NodeId>),
}

impl HighlightState {
    /// Returns true if nothing is selected.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The highlighted path, root first; empty when idle.
    pub fn path(&self) -> &[NodeId] {
        match self {
            Self::Idle => &[],
            Self::PathHighlighted(path) => path,
        }
    }

    /// The selected node (last element of the path).
    pub fn target(&self) -> Option<NodeId> {
        self.path().last().copied()
    }

    /// Select `path`, updating the highlight flags of `tree`.
    ///
    /// Every node's flag is cleared, then the nodes of `path` are flagged. An
    /// empty path changes nothing and returns `false`.
    pub fn select(&mut self, tree: &mut HeapTree, path: Vec<NodeId>) -> bool {
        if path.is_empty() {
            return false;
        }
        tree.highlight_path(&path);
        *self = Self::PathHighlighted(path);
        true
    }

    /// Forget the selection. Used when the tree it refers to is replaced.
    pub(crate) fn reset(&mut self) {
        *self = Self::Idle;
    }
}
