// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive an interaction surface with host events and paint it onto a text grid.
//!
//! This example shows how to:
//! - wrap a drawing backend (here a character grid) in the `Canvas` trait,
//! - feed submit / click / resize events to an `InteractionSurface`,
//! - observe the highlighted root→node path after each click.
//!
//! Set `RUST_LOG=info` to log each handled event, or `RUST_LOG=debug` to
//! also see the surface's own logs.
//!
//! Run:
//! - `cargo run -p sapling_demos --example surface_ascii`

use kurbo::{Circle, Line, ParamCurve, Point, Rect, Size, Vec2};
use sapling_heap_tree::NodeId;
use sapling_surface::{
    Canvas, EventOutcome, InteractionSurface, Palette, Rgba8, SurfaceConfig, SurfaceEvent,
};
use tracing_subscriber::EnvFilter;

/// Pixels per character cell.
const CELL: Size = Size::new(10.0, 20.0);

/// A canvas that rasterizes into characters, one cell per `CELL` pixels.
struct AsciiCanvas {
    size: Size,
    highlight: Rgba8,
    cells: Vec<Vec<char>>,
}

impl AsciiCanvas {
    fn new(size: Size) -> Self {
        let mut canvas = Self {
            size,
            highlight: Palette::default().highlight_fill,
            cells: Vec::new(),
        };
        canvas.resize(size);
        canvas
    }

    fn cell_of(&self, pt: Point) -> Option<(usize, usize)> {
        let col = (pt.x / CELL.width).floor();
        let row = (pt.y / CELL.height).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (row < self.cells.len() && col < self.cells[row].len()).then_some((row, col))
    }

    fn put(&mut self, pt: Point, ch: char) {
        if let Some((row, col)) = self.cell_of(pt) {
            self.cells[row][col] = ch;
        }
    }

    fn print(&self) {
        for row in &self.cells {
            let line: String = row.iter().collect();
            println!("{}", line.trim_end());
        }
    }
}

impl Canvas for AsciiCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let cols = (size.width / CELL.width).ceil() as usize;
        let rows = (size.height / CELL.height).ceil() as usize;
        self.cells = vec![vec![' '; cols]; rows];
    }

    fn clear(&mut self, region: Rect) {
        let mut y = region.y0;
        while y < region.y1 {
            let mut x = region.x0;
            while x < region.x1 {
                self.put(Point::new(x, y), ' ');
                x += CELL.width;
            }
            y += CELL.height;
        }
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) {
        let ch = if color == self.highlight { '#' } else { 'o' };
        self.put(circle.center, ch);
    }

    fn stroke_circle(&mut self, circle: Circle, _color: Rgba8) {
        self.put(circle.center - Vec2::new(circle.radius, 0.0), '(');
        self.put(circle.center + Vec2::new(circle.radius, 0.0), ')');
    }

    fn draw_text(&mut self, text: &str, center: Point, _color: Rgba8) {
        let start = center.x - CELL.width * (text.len() as f64 - 1.0) / 2.0;
        for (i, ch) in text.chars().enumerate() {
            self.put(Point::new(start + CELL.width * i as f64, center.y), ch);
        }
    }

    fn draw_line(&mut self, line: Line, color: Rgba8) {
        let ch = if color == Palette::default().highlight_edge {
            '*'
        } else {
            '.'
        };
        let steps = (line.length() / CELL.width.min(CELL.height)).ceil().max(1.0) as usize;
        // Skip the endpoints so the circles stay readable.
        for i in 1..steps {
            let t = i as f64 / steps as f64;
            self.put(line.eval(t), ch);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let canvas = AsciiCanvas::new(Size::new(800.0, 320.0));
    let mut surface = InteractionSurface::new(canvas, SurfaceConfig::default());

    let report = |surface: &InteractionSurface<AsciiCanvas>, outcome: &EventOutcome| {
        tracing::info!(?outcome, nodes = surface.tree().len(), "handled event");
        println!("\n== {outcome:?}");
        let path: Vec<u32> = surface
            .highlight()
            .path()
            .iter()
            .filter_map(|&id| surface.tree().value(id).map(|v| v.get()))
            .collect();
        println!("highlighted path: {path:?}");
        if let Some(canvas) = surface.canvas() {
            canvas.print();
        }
    };

    for input in ["1,2,3,x", "0,1", "1,2,3,4,5,6,7,8,9"] {
        let outcome = surface.handle(SurfaceEvent::Submit(input.to_string()));
        report(&surface, &outcome);
    }

    // Click the node holding 9 (index 8), then a spot with no node.
    let target = NodeId::from_index(8);
    if let Some(center) = surface.node_center(target) {
        let outcome = surface.handle(SurfaceEvent::Click(center));
        report(&surface, &outcome);
    }
    let outcome = surface.handle(SurfaceEvent::Click(Point::new(5.0, 5.0)));
    report(&surface, &outcome);

    // A narrower viewport re-projects the same tree and keeps the highlight.
    let outcome = surface.handle(SurfaceEvent::Resize(Size::new(500.0, 320.0)));
    report(&surface, &outcome);
}
