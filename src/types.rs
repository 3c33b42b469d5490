//! Core types for spark-layout.
//!
//! Geometry and identity types shared by the arena and the layout passes.
//! Everything here is `Copy` so the passes can read an item, compute, and
//! write back without holding borrows into the arena.

use std::fmt;

/// Scalar used for sizes, margins and computed rectangles.
pub type Scalar = f32;

// =============================================================================
// ItemId
// =============================================================================

/// Handle to an item in a [`LayoutContext`](crate::LayoutContext).
///
/// Ids are dense, assigned sequentially and never reused until the context is
/// reset. They stay valid across arena growth; references into the arena do
/// not, so hold ids and look items up again after any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u32);

impl ItemId {
    /// The root item. Always the first item created in a context.
    pub const ROOT: Self = Self(0);

    /// Build an id from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of this item in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Axis
// =============================================================================

/// One of the two independent layout directions.
///
/// Each axis gets its own size pass and arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal = 0,
    Vertical = 1,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

// =============================================================================
// Size
// =============================================================================

/// Requested size of an item. Zero on an axis means "derive from children".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: Scalar,
    pub height: Scalar,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn get(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

// =============================================================================
// Margins
// =============================================================================

/// Outer spacing around an item, in (left, top, right, bottom) order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: Scalar,
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
}

impl Margins {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: Scalar, top: Scalar, right: Scalar, bottom: Scalar) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same margin on all four sides.
    pub const fn uniform(value: Scalar) -> Self {
        Self::new(value, value, value, value)
    }

    /// Leading margin on `axis` (left or top).
    #[inline]
    pub fn start(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing margin on `axis` (right or bottom).
    #[inline]
    pub fn end(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Both margins on `axis`.
    #[inline]
    pub fn total(&self, axis: Axis) -> Scalar {
        self.start(axis) + self.end(axis)
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Computed rectangle of an item: position and extent on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Offset on `axis`.
    #[inline]
    pub fn pos(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent on `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn set_pos(&mut self, axis: Axis, value: Scalar) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    #[inline]
    pub fn set_extent(&mut self, axis: Axis, value: Scalar) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }
}
