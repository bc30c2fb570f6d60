// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sapling Layout: positions for the nodes of a [`HeapTree`].
//!
//! The layout is the classic halving-offset drawing of a binary tree. The root
//! sits at a chosen origin; each child is one row below its parent and shifted
//! left or right by the parent's horizontal spacing, and that spacing halves at
//! every level. Rows are evenly spaced. Halving keeps the two subtrees of any
//! node on their own side of it, so sibling subtrees never cross.
//!
//! Positions are the *anchors* of the node circles: the top-left corner of the
//! circle's bounding square, in canvas pixels. Renderers and hit tests offset
//! them by the node radius to get the center.
//!
//! ## API overview
//!
//! - [`LayoutParams`]: origin and spacings for one layout pass.
//! - [`layout`]: writes an anchor for every node.
//! - [`ViewportLayout`]: derives [`LayoutParams`] from a viewport size, used
//!   when the drawing surface is created or resized.
//!
//! ```rust
//! use core::num::NonZeroU32;
//! use kurbo::Point;
//! use sapling_heap_tree::{HeapTree, NodeId};
//! use sapling_layout::{LayoutParams, layout};
//!
//! let values: Vec<NonZeroU32> = [1, 2, 3].into_iter().filter_map(NonZeroU32::new).collect();
//! let mut tree = HeapTree::from_values(&values);
//! layout(
//!     &mut tree,
//!     &LayoutParams {
//!         origin: Point::new(100.0, 10.0),
//!         horizontal_spacing: 40.0,
//!         vertical_spacing: 60.0,
//!     },
//! );
//! assert_eq!(tree.anchor(NodeId::ROOT), Some(Point::new(100.0, 10.0)));
//! assert_eq!(tree.anchor(NodeId::from_index(1)), Some(Point::new(60.0, 70.0)));
//! assert_eq!(tree.anchor(NodeId::from_index(2)), Some(Point::new(140.0, 70.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Size};
use sapling_heap_tree::{HeapTree, NodeId};
use smallvec::{SmallVec, smallvec};

/// Parameters for a single [`layout`] pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Anchor of the root node.
    pub origin: Point,
    /// Horizontal offset from the root to each of its children.
    ///
    /// Each level below uses half of the spacing of the level above.
    pub horizontal_spacing: f64,
    /// Vertical distance between consecutive rows. Constant across depths.
    pub vertical_spacing: f64,
}

impl LayoutParams {
    /// Horizontal offset between a node at `depth` and each of its children.
    ///
    /// This is `horizontal_spacing / 2^depth`. It tends to zero for very deep
    /// trees, which then collapse visually but stay well defined.
    pub fn spacing_at_depth(&self, depth: u32) -> f64 {
        let mut spacing = self.horizontal_spacing;
        for _ in 0..depth {
            if spacing == 0.0 {
                break;
            }
            spacing *= 0.5;
        }
        spacing
    }
}

/// Assign an anchor to every node of `tree`.
///
/// The root is placed at `params.origin`. A node at `(x, y)` laid out with
/// spacing `h` places its left child at `(x - h, y + v)` and its right child at
/// `(x + h, y + v)`, where `v` is the vertical spacing; the children are laid
/// out with spacing `h / 2`.
///
/// The result only depends on the tree's shape and `params`, so repeating a
/// pass with the same parameters reproduces the same anchors. An empty tree is
/// left untouched.
pub fn layout(tree: &mut HeapTree, params: &LayoutParams) {
    let Some(root) = tree.root() else {
        return;
    };

    // Explicit stack in pre-order so deep trees do not recurse.
    let mut stack: SmallVec<[(NodeId, Point, f64); 32]> =
        smallvec![(root, params.origin, params.horizontal_spacing)];
    while let Some((id, at, spacing)) = stack.pop() {
        tree.set_anchor(id, at);
        let row = at.y + params.vertical_spacing;
        let next = spacing * 0.5;
        if let Some(right) = tree.right(id) {
            stack.push((right, Point::new(at.x + spacing, row), next));
        }
        if let Some(left) = tree.left(id) {
            stack.push((left, Point::new(at.x - spacing, row), next));
        }
    }

    tracing::trace!(
        nodes = tree.len(),
        origin_x = params.origin.x,
        origin_y = params.origin.y,
        spacing = params.horizontal_spacing,
        "laid out tree"
    );
}

/// Derives [`LayoutParams`] from the size of the drawing surface.
///
/// The root is centered horizontally, `top_margin` pixels from the top. The
/// initial horizontal spacing is `spread` times the viewport width, so the
/// tree widens and narrows with the surface; rows stay `vertical_spacing`
/// apart regardless of size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportLayout {
    /// Distance from the top edge to the root's anchor.
    pub top_margin: f64,
    /// Vertical distance between rows.
    pub vertical_spacing: f64,
    /// Fraction of the viewport width used as the root's horizontal spacing.
    pub spread: f64,
}

impl Default for ViewportLayout {
    fn default() -> Self {
        Self {
            top_margin: 40.0,
            vertical_spacing: 80.0,
            spread: 0.25,
        }
    }
}

impl ViewportLayout {
    /// Layout parameters for a viewport of `size` holding circles of `node_radius`.
    ///
    /// The root anchor is offset by the radius so the root circle's center
    /// lies on the vertical center line of the viewport.
    pub fn params_for(&self, size: Size, node_radius: f64) -> LayoutParams {
        LayoutParams {
            origin: Point::new(size.width * 0.5 - node_radius, self.top_margin),
            horizontal_spacing: size.width * self.spread,
            vertical_spacing: self.vertical_spacing,
        }
    }
}
