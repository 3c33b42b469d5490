//! Layout passes.
//!
//! A run computes every rectangle below an item in four passes:
//!
//! ```text
//! size(horizontal) → arrange(horizontal) → size(vertical) → arrange(vertical)
//! ```
//!
//! The size pass is post-order (children before parents), the arrangement
//! pass pre-order. Running the horizontal axis first lets wrapping rows find
//! their lines before heights are summed per line.
//!
//! # Example
//!
//! ```
//! use spark_layout::{Behave, Contain, LayoutContext};
//!
//! let mut ctx = LayoutContext::new();
//! let root = ctx.item_new();
//! ctx.set_size_xy(root, 100.0, 40.0);
//! ctx.set_contain(root, Contain::ROW);
//!
//! let button = ctx.item_new();
//! ctx.set_size_xy(button, 20.0, 10.0);
//! ctx.set_behave(button, Behave::TOP);
//! ctx.insert(root, button);
//!
//! ctx.run_context();
//! assert_eq!(ctx.rect(button).x, 40.0);
//! assert_eq!(ctx.rect(button).y, 0.0);
//! ```

mod arrange;
mod lines;
mod size;

pub use lines::{Line, Lines};

use crate::engine::{LayoutContext, Reallocator};
use crate::types::{Axis, ItemId};

impl<A: Reallocator> LayoutContext<A> {
    /// Lay out the whole tree under the root. Does nothing on an empty
    /// context.
    pub fn run_context(&mut self) {
        if self.is_empty() {
            return;
        }
        self.run_item(ItemId::ROOT);
    }

    /// Lay out the subtree under `item`.
    ///
    /// The item keeps its own size from the size pass and its position from
    /// its margins; only its descendants are arranged relative to it. Running
    /// twice without mutations yields identical rectangles.
    ///
    /// # Panics
    ///
    /// If `item` does not name a live item.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn run_item(&mut self, item: ItemId) {
        for axis in Axis::BOTH {
            self.calc_size(item, axis);
            self.arrange(item, axis);
        }
    }
}
