// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a pointer position to a root→node path.
//!
//! Node circles of different depths can overlap when spacing gets tight, so
//! the winner is chosen by a fixed order rather than by distance: a node beats
//! its descendants, and a left subtree beats the right subtree. That is the
//! first hit in pre-order.

use alloc::vec::Vec;
use kurbo::{Circle, Point, Vec2};
use sapling_heap_tree::{HeapTree, NodeId};
use smallvec::{SmallVec, smallvec};

/// Parameters controlling hit tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitParams {
    /// Extra distance, in pixels, beyond the circle radius that still counts
    /// as a hit. Useful for touch input; `0.0` means exactly the drawn circle.
    ///
    /// A negative slop shrinks the hit area. Once it exceeds the radius no
    /// point hits.
    pub slop: f64,
}

/// The circle drawn for a node anchored at `anchor` (its top-left corner).
pub fn node_circle(anchor: Point, radius: f64) -> Circle {
    Circle::new(anchor + Vec2::new(radius, radius), radius)
}

/// Returns true if `point` lies within the circle of `id`, boundary included.
///
/// Nodes without an anchor are never hit.
pub fn hits_node(
    tree: &HeapTree,
    id: NodeId,
    point: Point,
    radius: f64,
    params: &HitParams,
) -> bool {
    let Some(anchor) = tree.anchor(id) else {
        return false;
    };
    let center = node_circle(anchor, radius).center;
    let reach = radius + params.slop;
    if reach < 0.0 {
        return false;
    }
    (point - center).hypot2() <= reach * reach
}

/// Find the node under `point` and return the path from the root to it.
///
/// The node itself is tested before its subtrees and the left subtree before
/// the right one; the first node hit in that order is the target. Returns an
/// empty path when nothing is hit.
///
/// A node without an anchor is skipped together with its subtree, matching
/// what [`render`](crate::render()) puts on screen.
pub fn find_path(tree: &HeapTree, point: Point, radius: f64, params: &HitParams) -> Vec<NodeId> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let mut stack: SmallVec<[NodeId; 32]> = smallvec![root];
    while let Some(id) = stack.pop() {
        if tree.anchor(id).is_none() {
            continue;
        }
        if hits_node(tree, id, point, radius, params) {
            return tree.path_to(id);
        }
        if let Some(right) = tree.right(id) {
            stack.push(right);
        }
        if let Some(left) = tree.left(id) {
            stack.push(left);
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapling_heap_tree::Value;
    use sapling_layout::{LayoutParams, layout};

    const R: f64 = 20.0;

    fn laid_out(raw: &[u32], params: &LayoutParams) -> HeapTree {
        let values: Vec<Value> = raw.iter().copied().filter_map(Value::new).collect();
        let mut tree = HeapTree::from_values(&values);
        layout(&mut tree, params);
        tree
    }

    fn wide() -> LayoutParams {
        LayoutParams {
            origin: Point::new(380.0, 40.0),
            horizontal_spacing: 200.0,
            vertical_spacing: 80.0,
        }
    }

    fn center(tree: &HeapTree, index: usize) -> Point {
        node_circle(tree.anchor(NodeId::from_index(index)).unwrap(), R).center
    }

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::from_index).collect()
    }

    #[test]
    fn circle_center_is_anchor_plus_radius() {
        let c = node_circle(Point::new(10.0, 30.0), 5.0);
        assert_eq!(c.center, Point::new(15.0, 35.0));
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn center_clicks_resolve_paths() {
        let tree = laid_out(&[1, 2, 3, 4, 5], &wide());
        let params = HitParams::default();
        assert_eq!(find_path(&tree, center(&tree, 0), R, &params), ids(&[0]));
        assert_eq!(find_path(&tree, center(&tree, 1), R, &params), ids(&[0, 1]));
        assert_eq!(find_path(&tree, center(&tree, 2), R, &params), ids(&[0, 2]));
        assert_eq!(
            find_path(&tree, center(&tree, 3), R, &params),
            ids(&[0, 1, 3])
        );
        assert_eq!(
            find_path(&tree, center(&tree, 4), R, &params),
            ids(&[0, 1, 4])
        );
    }

    #[test]
    fn boundary_is_inclusive() {
        let tree = laid_out(&[1], &wide());
        let c = center(&tree, 0);
        let params = HitParams::default();
        assert_eq!(find_path(&tree, c + Vec2::new(R, 0.0), R, &params), ids(&[0]));
        assert!(find_path(&tree, c + Vec2::new(R + 1e-6, 0.0), R, &params).is_empty());
        assert!(find_path(&tree, c + Vec2::new(0.0, -(R + 1e-6)), R, &params).is_empty());
    }

    #[test]
    fn slop_widens_the_hit_area() {
        let tree = laid_out(&[1], &wide());
        let near = center(&tree, 0) + Vec2::new(R + 3.0, 0.0);
        assert!(find_path(&tree, near, R, &HitParams::default()).is_empty());
        assert_eq!(
            find_path(&tree, near, R, &HitParams { slop: 4.0 }),
            ids(&[0])
        );
    }

    #[test]
    fn slop_beyond_the_radius_hits_nothing() {
        let tree = laid_out(&[1], &wide());
        let c = center(&tree, 0);
        let params = HitParams { slop: -50.0 };
        assert!(find_path(&tree, c + Vec2::new(R + 9.0, 0.0), R, &params).is_empty());
        assert!(find_path(&tree, c, R, &params).is_empty());
        assert!(!hits_node(&tree, NodeId::ROOT, c, R, &params));
    }

    #[test]
    fn negative_slop_shrinks_the_hit_area() {
        let tree = laid_out(&[1], &wide());
        let c = center(&tree, 0);
        let params = HitParams { slop: -5.0 };
        assert!(find_path(&tree, c + Vec2::new(R - 4.0, 0.0), R, &params).is_empty());
        assert_eq!(
            find_path(&tree, c + Vec2::new(R - 5.0, 0.0), R, &params),
            ids(&[0])
        );
    }

    #[test]
    fn clicks_between_nodes_miss() {
        let tree = laid_out(&[1, 2, 3], &wide());
        let params = HitParams::default();
        assert!(find_path(&tree, Point::new(400.0, 140.0), R, &params).is_empty());
        assert!(find_path(&tree, Point::ZERO, R, &params).is_empty());
    }

    #[test]
    fn overlapping_circles_prefer_ancestor_then_left() {
        // Tiny spacing stacks the circles on top of each other.
        let tight = LayoutParams {
            origin: Point::new(0.0, 0.0),
            horizontal_spacing: 4.0,
            vertical_spacing: 4.0,
        };
        let tree = laid_out(&[1, 2, 3, 4, 5, 6, 7], &tight);
        let params = HitParams::default();

        // Within reach of every node: the root wins.
        assert_eq!(find_path(&tree, center(&tree, 0), R, &params), ids(&[0]));

        // Out of the root's reach but within both children's: left wins.
        let below = Point::new(center(&tree, 0).x, center(&tree, 0).y + R + 2.0);
        assert!(!hits_node(&tree, NodeId::ROOT, below, R, &params));
        assert!(hits_node(&tree, NodeId::from_index(1), below, R, &params));
        assert!(hits_node(&tree, NodeId::from_index(2), below, R, &params));
        assert_eq!(find_path(&tree, below, R, &params), ids(&[0, 1]));
    }

    #[test]
    fn unplaced_tree_is_never_hit() {
        let values: Vec<Value> = [1, 2].into_iter().filter_map(Value::new).collect();
        let tree = HeapTree::from_values(&values);
        assert!(find_path(&tree, Point::new(20.0, 20.0), R, &HitParams::default()).is_empty());
    }

    #[test]
    fn placed_child_of_unplaced_parent_is_not_hit() {
        let values: Vec<Value> = [1, 2, 3].into_iter().filter_map(Value::new).collect();
        let mut tree = HeapTree::from_values(&values);
        let child = NodeId::from_index(1);
        tree.set_anchor(child, Point::new(100.0, 100.0));
        let c = node_circle(Point::new(100.0, 100.0), R).center;
        assert!(hits_node(&tree, child, c, R, &HitParams::default()));
        assert!(find_path(&tree, c, R, &HitParams::default()).is_empty());
    }

    #[test]
    fn empty_tree_is_never_hit() {
        let tree = HeapTree::default();
        assert!(find_path(&tree, Point::ZERO, R, &HitParams::default()).is_empty());
    }
}
