// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing interaction surface.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Size};
use sapling_heap_tree::{HeapTree, InputError, NodeId, ParseOptions, Value, parse_values};
use sapling_layout::{ViewportLayout, layout};

use crate::canvas::Canvas;
use crate::highlight::HighlightState;
use crate::hit::{HitParams, find_path, node_circle};
use crate::render::{RenderStats, Style, render};

/// Configuration of an [`InteractionSurface`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceConfig {
    /// How layout parameters are derived from the canvas size.
    pub layout: ViewportLayout,
    /// Node radius and colors.
    pub style: Style,
    /// Hit test tolerance.
    pub hit: HitParams,
    /// Input validation options, including the maximum number of values.
    pub parse: ParseOptions,
}

/// Result of loading a new tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Number of nodes in the new tree.
    pub nodes: usize,
    /// Paint summary, or `None` when no canvas is attached.
    pub rendered: Option<RenderStats>,
}

/// Result of a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A node was hit; this root→node path is now highlighted.
    Hit(Vec<NodeId>),
    /// No node was hit; the highlighted path is unchanged.
    Miss,
    /// Nothing is on screen yet (no canvas, or not rendered since the last
    /// load), so the click was ignored.
    Inactive,
}

/// Host events understood by [`InteractionSurface::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// The user submitted a comma-separated value list.
    Submit(String),
    /// A pointer click at canvas-local coordinates.
    Click(Point),
    /// The drawable area changed size.
    Resize(Size),
}

/// Result of [`InteractionSurface::handle`], one variant per event kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Outcome of [`SurfaceEvent::Submit`].
    Submitted(Result<SubmitOutcome, InputError>),
    /// Outcome of [`SurfaceEvent::Click`].
    Clicked(ClickOutcome),
    /// Outcome of [`SurfaceEvent::Resize`].
    Resized(Option<RenderStats>),
}

/// Owns the current tree and its canvas, and turns host events into
/// rebuilds, repaints, and highlight changes.
///
/// Everything runs synchronously inside the call that triggered it. The tree
/// is replaced on every accepted submission and otherwise only has its anchors
/// (on every repaint) and highlight flags (on every hit) updated.
///
/// Without a canvas ([`InteractionSurface::detached`]), submissions still
/// build the tree but painting, clicking, and resizing do nothing until a
/// canvas is [attached](InteractionSurface::attach).
///
/// ## Example
///
/// ```rust
/// use kurbo::Size;
/// use sapling_surface::{ClickOutcome, InteractionSurface, RecordingCanvas, SurfaceConfig};
///
/// let canvas = RecordingCanvas::new(Size::new(800.0, 600.0));
/// let mut surface = InteractionSurface::new(canvas, SurfaceConfig::default());
/// surface.submit("1,2,3,4,5").unwrap();
///
/// let four = surface.tree().left(surface.tree().left(surface.tree().root().unwrap()).unwrap()).unwrap();
/// let center = surface.node_center(four).unwrap();
/// let ClickOutcome::Hit(path) = surface.click(center) else {
///     panic!("expected a hit");
/// };
/// let values: Vec<u32> = path.iter().map(|&id| surface.tree().value(id).unwrap().get()).collect();
/// assert_eq!(values, [1, 2, 4]);
/// ```
pub struct InteractionSurface<C> {
    canvas: Option<C>,
    tree: HeapTree,
    highlight: HighlightState,
    config: SurfaceConfig,
    /// Anchors match what is on the canvas.
    rendered: bool,
}

impl<C> core::fmt::Debug for InteractionSurface<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InteractionSurface")
            .field("attached", &self.canvas.is_some())
            .field("nodes", &self.tree.len())
            .field("highlight", &self.highlight)
            .field("rendered", &self.rendered)
            .finish_non_exhaustive()
    }
}

impl<C: Canvas> InteractionSurface<C> {
    /// Create a surface drawing onto `canvas`. No tree is loaded yet.
    pub fn new(canvas: C, config: SurfaceConfig) -> Self {
        Self {
            canvas: Some(canvas),
            ..Self::detached(config)
        }
    }

    /// Create a surface without a canvas.
    pub fn detached(config: SurfaceConfig) -> Self {
        Self {
            canvas: None,
            tree: HeapTree::default(),
            highlight: HighlightState::Idle,
            config,
            rendered: false,
        }
    }

    /// Attach `canvas` and paint the current tree onto it.
    ///
    /// Returns the previously attached canvas, if any.
    pub fn attach(&mut self, canvas: C) -> Option<C> {
        let previous = self.canvas.replace(canvas);
        self.render();
        previous
    }

    /// Detach and return the canvas. Clicks are ignored until a canvas is attached again.
    pub fn detach(&mut self) -> Option<C> {
        self.rendered = false;
        self.canvas.take()
    }

    /// The attached canvas.
    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    /// The current tree (empty before the first submission).
    pub fn tree(&self) -> &HeapTree {
        &self.tree
    }

    /// The current selection.
    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    /// The configuration in use.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Center of the circle drawn for `id` as of the last layout.
    pub fn node_center(&self, id: NodeId) -> Option<Point> {
        let anchor = self.tree.anchor(id)?;
        Some(node_circle(anchor, self.config.style.radius).center)
    }

    /// Parse `input`, replace the tree, and repaint.
    ///
    /// On a validation error nothing changes: the previous tree, its anchors,
    /// and its highlighted path are kept.
    pub fn submit(&mut self, input: &str) -> Result<SubmitOutcome, InputError> {
        let values = parse_values(input, &self.config.parse).inspect_err(|err| {
            tracing::warn!(%err, "rejected value list");
        })?;
        Ok(self.load(&values))
    }

    /// Replace the tree with one built from already validated `values`, and repaint.
    ///
    /// The new tree starts with nothing highlighted.
    pub fn load(&mut self, values: &[Value]) -> SubmitOutcome {
        self.tree = HeapTree::from_values(values);
        self.highlight.reset();
        self.rendered = false;
        let rendered = self.render();
        tracing::debug!(nodes = self.tree.len(), "loaded tree");
        SubmitOutcome {
            nodes: self.tree.len(),
            rendered,
        }
    }

    /// Lay the tree out for the current canvas size and repaint it.
    ///
    /// Returns `None` without a canvas.
    pub fn render(&mut self) -> Option<RenderStats> {
        let Some(canvas) = self.canvas.as_mut() else {
            tracing::trace!("render skipped: no canvas attached");
            return None;
        };
        let style = &self.config.style;
        let params = self.config.layout.params_for(canvas.size(), style.radius);
        layout(&mut self.tree, &params);
        let stats = render(canvas, &self.tree, style);
        self.rendered = true;
        Some(stats)
    }

    /// Select the node under `point` (canvas-local) and highlight its path from the root.
    ///
    /// On a hit, the previous path is replaced and the canvas repainted. A
    /// miss leaves the current highlight as it is.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        if self.canvas.is_none() || !self.rendered {
            return ClickOutcome::Inactive;
        }
        let path = find_path(
            &self.tree,
            point,
            self.config.style.radius,
            &self.config.hit,
        );
        if path.is_empty() {
            tracing::debug!(x = point.x, y = point.y, "click missed every node");
            return ClickOutcome::Miss;
        }
        tracing::debug!(
            x = point.x,
            y = point.y,
            depth = path.len() - 1,
            "click selected node"
        );
        self.highlight.select(&mut self.tree, path.clone());
        self.render();
        ClickOutcome::Hit(path)
    }

    /// Resize the canvas and repaint at the new size.
    ///
    /// The tree and its highlighted path are kept; only positions change.
    /// Returns `None` without a canvas.
    pub fn resize(&mut self, size: Size) -> Option<RenderStats> {
        let canvas = self.canvas.as_mut()?;
        canvas.resize(size);
        tracing::debug!(width = size.width, height = size.height, "resized surface");
        self.render()
    }

    /// Dispatch a host event to [`submit`](Self::submit),
    /// [`click`](Self::click), or [`resize`](Self::resize).
    pub fn handle(&mut self, event: SurfaceEvent) -> EventOutcome {
        match event {
            SurfaceEvent::Submit(input) => EventOutcome::Submitted(self.submit(&input)),
            SurfaceEvent::Click(point) => EventOutcome::Clicked(self.click(point)),
            SurfaceEvent::Resize(size) => EventOutcome::Resized(self.resize(size)),
        }
    }
}
