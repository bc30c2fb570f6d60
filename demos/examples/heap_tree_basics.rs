// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parse a value list, build the heap tree, and lay it out.
//!
//! Run:
//! - `cargo run -p sapling_demos --example heap_tree_basics -- "1,2,3,4,5"`

use kurbo::Size;
use sapling_heap_tree::{ParseOptions, build, parse_values};
use sapling_layout::{ViewportLayout, layout};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1,2,3,4,5,6,7,8".to_string());

    let values = match parse_values(&input, &ParseOptions::default()) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("Invalid input: {err}. Please enter positive integers, e.g. 1,2,3");
            std::process::exit(1);
        }
    };

    let Some(mut tree) = build(&values) else {
        println!("Empty input, nothing to draw.");
        return;
    };

    let params = ViewportLayout::default().params_for(Size::new(800.0, 600.0), 20.0);
    layout(&mut tree, &params);

    println!(
        "{} nodes over {} levels, root spacing {:.1}px",
        tree.len(),
        tree.height(),
        params.horizontal_spacing
    );
    for id in tree.preorder() {
        let depth = tree.depth_of(id).unwrap_or(0) as usize;
        let value = tree.value(id).map_or(0, |v| v.get());
        let anchor = tree.anchor(id).unwrap_or_default();
        println!(
            "{:indent$}#{:<3} value={:<6} anchor=({:.1}, {:.1})",
            "",
            id.index(),
            value,
            anchor.x,
            anchor.y,
            indent = depth * 2
        );
    }
}
