//! Layout engine - item arena and tree store.
//!
//! The engine owns the data the layout passes work on:
//! - Item: input state (flags, links, margins, requested size)
//! - Slot: one item plus its computed rectangle
//! - LayoutContext: the growable slot buffer and the tree-building API
//! - Reallocator: how the buffer grows and is released
//!
//! # Architecture
//!
//! Items are NOT objects owned by their parents. They are indices into one
//! contiguous buffer, linked into a tree through ids:
//!
//! ```text
//! Slot 0: root   (first_child=1, next_sibling=-)  rect=(0, 0, 80, 24)
//! Slot 1: header (first_child=-, next_sibling=2)  rect=(0, 0, 80, 1)
//! Slot 2: body   (first_child=3, next_sibling=-)  rect=(0, 1, 80, 23)
//! ```
//!
//! This keeps every pass a linear walk over one allocation and makes a
//! per-frame rebuild a matter of resetting a length.

mod allocator;
mod context;
mod item;

pub use allocator::{Reallocator, SystemAllocator};
pub use context::{Children, LayoutContext};
pub use item::{Item, Slot};
