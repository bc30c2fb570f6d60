// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sapling Surface: draw a heap tree and select root→node paths by clicking.
//!
//! ## Overview
//!
//! This crate is the interactive end of the Sapling pipeline:
//!
//! 1) [`sapling_heap_tree`] parses `"1,2,3"` and builds the tree.
//! 2) [`sapling_layout`] assigns every node an anchor on the canvas.
//! 3) This crate paints the tree onto a [`Canvas`], resolves clicks to the
//!    path from the root to the clicked node, highlights that path, and
//!    repaints.
//!
//! The drawing backend is abstract: anything implementing [`Canvas`] (fill and
//! stroke circles, lines, text, clear, resize) can host a tree.
//! [`RecordingCanvas`] keeps the calls in memory.
//!
//! ## API overview
//!
//! - [`InteractionSurface`]: owns the tree and canvas; [`submit`], [`click`],
//!   [`resize`], or feed [`SurfaceEvent`]s to [`handle`].
//! - [`render`](render()): one full repaint of a laid-out tree.
//! - [`find_path`]: the hit test. A node is hit within its circle, boundary
//!   included; a node wins over its descendants and a left subtree over the
//!   right one.
//! - [`HighlightState`]: `Idle` or `PathHighlighted(path)`. A hit replaces the
//!   path; a miss keeps it.
//! - Configuration: [`SurfaceConfig`] groups [`Style`] (radius, [`Palette`]),
//!   [`HitParams`], [`ViewportLayout`](sapling_layout::ViewportLayout), and
//!   [`ParseOptions`](sapling_heap_tree::ParseOptions).
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use sapling_surface::{ClickOutcome, InteractionSurface, RecordingCanvas, SurfaceConfig};
//!
//! let mut surface = InteractionSurface::new(
//!     RecordingCanvas::new(Size::new(800.0, 600.0)),
//!     SurfaceConfig::default(),
//! );
//! assert!(surface.submit("1,-2").is_err());
//! surface.submit("1,2,3").unwrap();
//!
//! let root = surface.tree().root().unwrap();
//! let center = surface.node_center(root).unwrap();
//! assert_eq!(surface.click(center), ClickOutcome::Hit(vec![root]));
//! assert_eq!(surface.click(Point::new(0.0, 599.0)), ClickOutcome::Miss);
//! assert_eq!(surface.highlight().target(), Some(root));
//! ```
//!
//! [`submit`]: InteractionSurface::submit
//! [`click`]: InteractionSurface::click
//! [`resize`]: InteractionSurface::resize
//! [`handle`]: InteractionSurface::handle
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod highlight;
mod hit;
mod recording;
mod render;
mod surface;

pub use canvas::{Canvas, Rgba8};
pub use highlight::HighlightState;
pub use hit::{HitParams, find_path, hits_node, node_circle};
pub use recording::{DrawCommand, RecordingCanvas};
pub use render::{Palette, RenderStats, Style, render};
pub use surface::{
    ClickOutcome, EventOutcome, InteractionSurface, SubmitOutcome, SurfaceConfig, SurfaceEvent,
};
