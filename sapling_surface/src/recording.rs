// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory canvas that records draw calls.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::{Circle, Line, Point, Rect, Size};

use crate::canvas::{Canvas, Rgba8};

/// One recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Canvas::clear`].
    Clear(Rect),
    /// [`Canvas::fill_circle`].
    FillCircle(Circle, Rgba8),
    /// [`Canvas::stroke_circle`].
    StrokeCircle(Circle, Rgba8),
    /// [`Canvas::draw_text`].
    Text {
        /// The drawn text.
        text: String,
        /// Center of the text.
        center: Point,
        /// Text color.
        color: Rgba8,
    },
    /// [`Canvas::draw_line`].
    Line(Line, Rgba8),
}

/// A [`Canvas`] that keeps every call in order.
///
/// Useful for tests, for headless hosts, and for replaying a frame onto a real
/// backend later.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty recording of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Every command recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent [`Canvas::clear`], including it.
    ///
    /// This is what is visible after a full repaint.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of clears recorded, i.e. how many frames were painted.
    pub fn frame_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count()
    }

    /// Take the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) {
        self.commands.push(DrawCommand::FillCircle(circle, color));
    }

    fn stroke_circle(&mut self, circle: Circle, color: Rgba8) {
        self.commands.push(DrawCommand::StrokeCircle(circle, color));
    }

    fn draw_text(&mut self, text: &str, center: Point, color: Rgba8) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            color,
        });
    }

    fn draw_line(&mut self, line: Line, color: Rgba8) {
        self.commands.push(DrawCommand::Line(line, color));
    }
}
