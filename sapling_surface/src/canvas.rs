// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability consumed by the renderer.

use kurbo::{Circle, Line, Point, Rect, Size};

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// A 2D drawing surface.
///
/// Coordinates are canvas-local pixels with the origin at the top-left and `y`
/// growing downwards. Every call takes effect immediately; the renderer issues
/// calls in paint order and never reads pixels back.
///
/// Hosts wrap their real backend (an HTML canvas, a GPU scene, a terminal
/// grid) in this trait and hand it to
/// [`InteractionSurface`](crate::InteractionSurface).
/// [`RecordingCanvas`](crate::RecordingCanvas) is an in-memory implementation.
pub trait Canvas {
    /// Current drawable size.
    fn size(&self) -> Size;

    /// Change the drawable size.
    fn resize(&mut self, size: Size);

    /// Erase `region`.
    fn clear(&mut self, region: Rect);

    /// Fill the interior of `circle`.
    fn fill_circle(&mut self, circle: Circle, color: Rgba8);

    /// Stroke the outline of `circle`.
    fn stroke_circle(&mut self, circle: Circle, color: Rgba8);

    /// Draw `text` centered on `center`.
    fn draw_text(&mut self, text: &str, center: Point, color: Rgba8);

    /// Stroke a straight segment.
    fn draw_line(&mut self, line: Line, color: Rgba8);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size);
    }

    fn clear(&mut self, region: Rect) {
        (**self).clear(region);
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) {
        (**self).fill_circle(circle, color);
    }

    fn stroke_circle(&mut self, circle: Circle, color: Rgba8) {
        (**self).stroke_circle(circle, color);
    }

    fn draw_text(&mut self, text: &str, center: Point, color: Rgba8) {
        (**self).draw_text(text, center, color);
    }

    fn draw_line(&mut self, line: Line, color: Rgba8) {
        (**self).draw_line(line, color);
    }
}
