// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting a laid-out tree onto a [`Canvas`].

use alloc::string::ToString;
use kurbo::{Line, Point, Vec2};
use sapling_heap_tree::{HeapTree, NodeId};
use smallvec::{SmallVec, smallvec};

use crate::canvas::{Canvas, Rgba8};
use crate::hit::node_circle;

/// Colors used when painting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Fill of nodes off the highlighted path.
    pub node_fill: Rgba8,
    /// Fill of nodes on the highlighted path.
    pub highlight_fill: Rgba8,
    /// Circle outline.
    pub outline: Rgba8,
    /// Node value text.
    pub text: Rgba8,
    /// Edge into a node off the highlighted path.
    pub edge: Rgba8,
    /// Edge into a node on the highlighted path.
    pub highlight_edge: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node_fill: Rgba8::WHITE,
            highlight_fill: Rgba8::rgb(0xff, 0xd5, 0x4f),
            outline: Rgba8::BLACK,
            text: Rgba8::BLACK,
            edge: Rgba8::rgb(0x60, 0x60, 0x60),
            highlight_edge: Rgba8::rgb(0xe5, 0x39, 0x35),
        }
    }
}

/// Node geometry and colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Radius of every node circle. Also the hit radius.
    pub radius: f64,
    /// Colors.
    pub palette: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            radius: 20.0,
            palette: Palette::default(),
        }
    }
}

/// Summary of one [`render`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes painted.
    pub nodes: usize,
    /// Parent→child edges painted.
    pub edges: usize,
}

/// Repaint `tree` onto `canvas`.
///
/// The whole canvas is cleared first. Then, in pre-order, each node's circle is
/// filled (highlight color when the node is on the selected path), outlined,
/// and labeled with its value; before descending into a child, an edge is drawn
/// from the bottom of the parent circle to the top of the child circle, in the
/// highlight color when the child is on the selected path. Left subtrees are
/// painted before right subtrees.
///
/// Nodes that have not been laid out yet are skipped together with their
/// subtrees. An empty tree leaves a cleared canvas.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, tree: &HeapTree, style: &Style) -> RenderStats {
    let region = canvas.size().to_rect();
    canvas.clear(region);

    let mut stats = RenderStats::default();
    let Some(root) = tree.root() else {
        return stats;
    };

    let r = style.radius;
    let palette = &style.palette;
    // (node, anchor of the parent it hangs from)
    let mut stack: SmallVec<[(NodeId, Option<Point>); 32]> = smallvec![(root, None)];
    while let Some((id, parent_anchor)) = stack.pop() {
        let (Some(anchor), Some(value)) = (tree.anchor(id), tree.value(id)) else {
            continue;
        };
        let highlighted = tree.is_highlighted(id);

        if let Some(from) = parent_anchor {
            let edge = Line::new(from + Vec2::new(r, 2.0 * r), anchor + Vec2::new(r, 0.0));
            let color = if highlighted {
                palette.highlight_edge
            } else {
                palette.edge
            };
            canvas.draw_line(edge, color);
            stats.edges += 1;
        }

        let circle = node_circle(anchor, r);
        let fill = if highlighted {
            palette.highlight_fill
        } else {
            palette.node_fill
        };
        canvas.fill_circle(circle, fill);
        canvas.stroke_circle(circle, palette.outline);
        canvas.draw_text(&value.get().to_string(), circle.center, palette.text);
        stats.nodes += 1;

        if let Some(right) = tree.right(id) {
            stack.push((right, Some(anchor)));
        }
        if let Some(left) = tree.left(id) {
            stack.push((left, Some(anchor)));
        }
    }

    tracing::trace!(nodes = stats.nodes, edges = stats.edges, "rendered tree");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingCanvas};
    use alloc::vec::Vec;
    use kurbo::{Circle, Rect, Size};
    use sapling_heap_tree::Value;
    use sapling_layout::{LayoutParams, layout};

    fn laid_out(len: u32) -> HeapTree {
        let values: Vec<Value> = (1..=len).filter_map(Value::new).collect();
        let mut tree = HeapTree::from_values(&values);
        layout(
            &mut tree,
            &LayoutParams {
                origin: Point::new(100.0, 0.0),
                horizontal_spacing: 50.0,
                vertical_spacing: 60.0,
            },
        );
        tree
    }

    #[test]
    fn empty_tree_only_clears() {
        let mut canvas = RecordingCanvas::new(Size::new(320.0, 200.0));
        let stats = render(&mut canvas, &HeapTree::default(), &Style::default());
        assert_eq!(stats, RenderStats::default());
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::Clear(Rect::new(0.0, 0.0, 320.0, 200.0))]
        );
    }

    #[test]
    fn paints_in_preorder_with_edges_before_children() {
        let tree = laid_out(3);
        let mut canvas = RecordingCanvas::new(Size::new(300.0, 300.0));
        let style = Style {
            radius: 10.0,
            ..Style::default()
        };
        let p = style.palette;
        let stats = render(&mut canvas, &tree, &style);
        assert_eq!(stats, RenderStats { nodes: 3, edges: 2 });

        let root = Circle::new((110.0, 10.0), 10.0);
        let left = Circle::new((60.0, 70.0), 10.0);
        let right = Circle::new((160.0, 70.0), 10.0);
        let text = |s: &str, c: Circle| DrawCommand::Text {
            text: s.into(),
            center: c.center,
            color: p.text,
        };
        let expected = [
            DrawCommand::Clear(Rect::new(0.0, 0.0, 300.0, 300.0)),
            DrawCommand::FillCircle(root, p.node_fill),
            DrawCommand::StrokeCircle(root, p.outline),
            text("1", root),
            DrawCommand::Line(Line::new((110.0, 20.0), (60.0, 60.0)), p.edge),
            DrawCommand::FillCircle(left, p.node_fill),
            DrawCommand::StrokeCircle(left, p.outline),
            text("2", left),
            DrawCommand::Line(Line::new((110.0, 20.0), (160.0, 60.0)), p.edge),
            DrawCommand::FillCircle(right, p.node_fill),
            DrawCommand::StrokeCircle(right, p.outline),
            text("3", right),
        ];
        assert_eq!(canvas.commands(), &expected);
    }

    #[test]
    fn highlighted_nodes_and_edges_use_highlight_colors() {
        let mut tree = laid_out(3);
        tree.highlight_path(&[NodeId::ROOT, NodeId::from_index(2)]);
        let mut canvas = RecordingCanvas::new(Size::new(300.0, 300.0));
        let style = Style::default();
        let p = style.palette;
        render(&mut canvas, &tree, &style);

        let fills: Vec<Rgba8> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle(_, color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, [p.highlight_fill, p.node_fill, p.highlight_fill]);

        let edges: Vec<Rgba8> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line(_, color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(edges, [p.edge, p.highlight_edge]);
    }

    #[test]
    fn unplaced_nodes_are_skipped() {
        let values: Vec<Value> = (1..=3).filter_map(Value::new).collect();
        let tree = HeapTree::from_values(&values);
        let mut canvas = RecordingCanvas::new(Size::new(10.0, 10.0));
        let stats = render(&mut canvas, &tree, &Style::default());
        assert_eq!(stats.nodes, 0);
        assert_eq!(canvas.commands().len(), 1);
    }

    #[test]
    fn placed_child_of_unplaced_parent_is_not_drawn() {
        let values: Vec<Value> = (1..=3).filter_map(Value::new).collect();
        let mut tree = HeapTree::from_values(&values);
        tree.set_anchor(NodeId::from_index(1), Point::new(40.0, 40.0));
        let mut canvas = RecordingCanvas::new(Size::new(100.0, 100.0));
        let stats = render(&mut canvas, &tree, &Style::default());
        assert_eq!(stats, RenderStats::default());
        assert_eq!(canvas.commands().len(), 1);
    }
}
