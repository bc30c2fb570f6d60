// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sapling Heap Tree: a binary tree built from a level-order value list.
//!
//! The value at position `i` of the input becomes a node whose children are
//! the values at `2i + 1` and `2i + 2` (the implicit indexing of a binary
//! heap). Every position in range produces a node, so the shape of the tree
//! is fully determined by the length of the list. This is a visualization
//! structure: values are not ordered, balanced, or deduplicated.
//!
//! ## API overview
//!
//! - [`parse_values`]: parse `"1, 2, 3"` into [`Value`]s, rejecting anything
//!   that is not a positive integer ([`InputError`]). [`ParseOptions`] can cap
//!   the number of values.
//! - [`build`] / [`HeapTree::from_values`]: construct the tree.
//! - [`HeapTree`]: structural queries ([`HeapTree::left`], [`HeapTree::right`],
//!   [`HeapTree::parent_of`], [`HeapTree::path_to`], [`HeapTree::preorder`])
//!   and per-node [`Presentation`] (anchor and highlight flag).
//!
//! Structure is immutable once built. Layout writes anchors with
//! [`HeapTree::set_anchor`]; selection replaces the highlighted path with
//! [`HeapTree::highlight_path`].
//!
//! ```rust
//! use sapling_heap_tree::{ParseOptions, build, parse_values};
//!
//! let values = parse_values("1,2,3", &ParseOptions::default()).unwrap();
//! let tree = build(&values).unwrap();
//! assert_eq!(tree.len(), 3);
//! assert!(build(&[]).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod input;
mod tree;
mod types;

pub use input::{InputError, ParseOptions, parse_values};
pub use tree::{HeapTree, Preorder, build};
pub use types::{NodeId, Presentation, Value};
