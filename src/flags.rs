//! Item flags.
//!
//! Every item carries one `u32` of flags split into disjoint sub-ranges:
//!
//! ```text
//! bit  0     direction      (0 = row, 1 = column)       ┐
//! bit  1     model          (0 = free-form, 1 = flex)   │ Contain, mask 0x1F
//! bit  2     wrap                                       │
//! bit  3-4   justify        (start / end / between)     ┘
//! bit  5-8   anchors        (left, top, right, bottom)  ┐ Behave, mask 0x3E0
//! bit  9     line break                                 ┘
//! bit  10    inserted into a parent
//! bit  11-12 explicit width / height
//! bit  16-30 application-owned
//! ```
//!
//! [`Contain`] and [`Behave`] are the caller-facing views; writes through the
//! context replace only their own sub-range. The typed decoders
//! ([`BoxModel`], [`Justify`], [`Anchor`]) are what the layout passes match on.

use bitflags::bitflags;

use crate::error::{LayoutError, LayoutResult};
use crate::types::Axis;

// =============================================================================
// Container flags
// =============================================================================

bitflags! {
    /// How an item lays out its children.
    ///
    /// Combine one value from each group: `Contain::ROW | Contain::WRAP | Contain::START`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Contain: u32 {
        // flex-direction
        /// Left to right.
        const ROW = 0x002;
        /// Top to bottom.
        const COLUMN = 0x003;

        // model
        /// Free layout: children are overlaid and anchored inside the parent.
        const LAYOUT = 0x000;
        /// Flex model.
        const FLEX = 0x002;

        // flex-wrap
        /// Single line.
        const NOWRAP = 0x000;
        /// Multi-line, lines are broken when the next child would overflow.
        const WRAP = 0x004;

        // justify-content
        /// At start of row/column.
        const START = 0x008;
        /// At center of row/column.
        const MIDDLE = 0x000;
        /// At end of row/column.
        const END = 0x010;
        /// Insert spacing to stretch across the whole row/column.
        const JUSTIFY = 0x018;
    }
}

/// Stacking direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    /// The axis children are stacked along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }
}

/// Container model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Free,
    Flex,
}

/// Decoded box model of a container, the dispatch key of both passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxModel {
    /// Children overlaid on both axes.
    Free,
    /// Children stacked along `direction`, optionally wrapped into lines.
    Flex { direction: Direction, wrap: bool },
}

/// Distribution of leftover space along the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    Start,
    #[default]
    Center,
    End,
    SpaceBetween,
}

impl Contain {
    const DIRECTION_BIT: u32 = 0x001;

    /// Check raw bits against the container mask.
    pub fn from_raw(bits: u32) -> LayoutResult<Self> {
        Self::from_bits(bits).ok_or(LayoutError::ContainFlags(bits))
    }

    /// Flex container flags from typed parts.
    pub fn flex(direction: Direction, wrap: bool, justify: Justify) -> Self {
        let mut flags = match direction {
            Direction::Row => Contain::ROW,
            Direction::Column => Contain::COLUMN,
        };
        if wrap {
            flags |= Contain::WRAP;
        }
        flags | Self::from_justify(justify)
    }

    fn from_justify(justify: Justify) -> Self {
        match justify {
            Justify::Start => Contain::START,
            Justify::Center => Contain::MIDDLE,
            Justify::End => Contain::END,
            Justify::SpaceBetween => Contain::JUSTIFY,
        }
    }

    pub fn model(self) -> Model {
        if self.bits() & Contain::FLEX.bits() != 0 {
            Model::Flex
        } else {
            Model::Free
        }
    }

    pub fn box_model(self) -> BoxModel {
        match self.model() {
            Model::Free => BoxModel::Free,
            Model::Flex => BoxModel::Flex {
                direction: if self.bits() & Self::DIRECTION_BIT != 0 {
                    Direction::Column
                } else {
                    Direction::Row
                },
                wrap: self.bits() & Contain::WRAP.bits() != 0,
            },
        }
    }

    pub fn justify(self) -> Justify {
        match self.bits() & Contain::JUSTIFY.bits() {
            bits if bits == Contain::JUSTIFY.bits() => Justify::SpaceBetween,
            bits if bits == Contain::START.bits() => Justify::Start,
            bits if bits == Contain::END.bits() => Justify::End,
            _ => Justify::Center,
        }
    }
}

// =============================================================================
// Child behavior flags
// =============================================================================

bitflags! {
    /// How an item behaves inside its parent.
    ///
    /// Anchors are fully honored by free-form parents and partially by flex
    /// parents (fill on the stacking axis means "grow").
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Behave: u32 {
        /// Anchor to left item or left side of parent.
        const LEFT = 0x020;
        /// Anchor to top item or top side of parent.
        const TOP = 0x040;
        /// Anchor to right item or right side of parent.
        const RIGHT = 0x080;
        /// Anchor to bottom item or bottom side of parent.
        const BOTTOM = 0x100;
        /// Anchor to both left and right.
        const HFILL = 0x0a0;
        /// Anchor to both top and bottom.
        const VFILL = 0x140;
        /// Center horizontally.
        const HCENTER = 0x000;
        /// Center vertically.
        const VCENTER = 0x000;
        /// Center in both directions.
        const CENTER = 0x000;
        /// Anchor to all four sides.
        const FILL = 0x1e0;
        /// Start a new line here when the parent wraps.
        ///
        /// Wrapping also sets this automatically on the first child of every
        /// line after the first.
        const BREAK = 0x200;
    }
}

/// Placement of a child on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// No anchor bits: centered in the available space.
    #[default]
    Center,
    Start,
    End,
    /// Anchored to both sides: stretched, or grown on a flex stacking axis.
    Fill,
}

impl Behave {
    /// Check raw bits against the behavior mask.
    pub fn from_raw(bits: u32) -> LayoutResult<Self> {
        Self::from_bits(bits).ok_or(LayoutError::BehaveFlags(bits))
    }

    /// Behavior flags from a per-axis anchor pair.
    pub fn anchored(horizontal: Anchor, vertical: Anchor) -> Self {
        Self::anchor_bits(Axis::Horizontal, horizontal) | Self::anchor_bits(Axis::Vertical, vertical)
    }

    fn anchor_bits(axis: Axis, anchor: Anchor) -> Self {
        let (start, end) = Self::axis_bits(axis);
        match anchor {
            Anchor::Center => Behave::empty(),
            Anchor::Start => start,
            Anchor::End => end,
            Anchor::Fill => start | end,
        }
    }

    #[inline]
    fn axis_bits(axis: Axis) -> (Behave, Behave) {
        match axis {
            Axis::Horizontal => (Behave::LEFT, Behave::RIGHT),
            Axis::Vertical => (Behave::TOP, Behave::BOTTOM),
        }
    }

    /// Decoded anchor on `axis`.
    pub fn anchor(self, axis: Axis) -> Anchor {
        let (start, end) = Self::axis_bits(axis);
        match (self.contains(start), self.contains(end)) {
            (true, true) => Anchor::Fill,
            (true, false) => Anchor::Start,
            (false, true) => Anchor::End,
            (false, false) => Anchor::Center,
        }
    }
}

// =============================================================================
// Stored item flags
// =============================================================================

bitflags! {
    /// Full flag word stored on every item.
    ///
    /// Contain and behave bits are read through [`ItemFlags::contain`] and
    /// [`ItemFlags::behave`]; the named bits here are internal state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u32 {
        /// Line break marker, shared with [`Behave::BREAK`].
        const BREAK = 0x200;
        /// Item has been inserted into a parent.
        const INSERTED = 0x400;
        /// Width has been set explicitly.
        const HFIXED = 0x800;
        /// Height has been set explicitly.
        const VFIXED = 0x1000;

        const _ = !0;
    }
}

/// Bits applications may use freely, e.g. for item types or drop targets.
pub const USER_MASK: u32 = 0x7fff_0000;

impl ItemFlags {
    const CONTAIN_MASK: u32 = 0x0000_001f;
    const BEHAVE_MASK: u32 = 0x0000_03e0;

    #[inline]
    pub fn contain(self) -> Contain {
        Contain::from_bits_truncate(self.bits() & Self::CONTAIN_MASK)
    }

    #[inline]
    pub fn behave(self) -> Behave {
        Behave::from_bits_truncate(self.bits() & Self::BEHAVE_MASK)
    }

    #[inline]
    pub fn user(self) -> u32 {
        self.bits() & USER_MASK
    }

    /// Replace the container sub-range.
    #[inline]
    pub(crate) fn with_contain(self, contain: Contain) -> Self {
        Self::from_bits_retain((self.bits() & !Self::CONTAIN_MASK) | contain.bits())
    }

    /// Replace the behavior sub-range, line break marker included.
    #[inline]
    pub(crate) fn with_behave(self, behave: Behave) -> Self {
        Self::from_bits_retain((self.bits() & !Self::BEHAVE_MASK) | behave.bits())
    }

    #[inline]
    pub(crate) fn with_user(self, user: u32) -> Self {
        Self::from_bits_retain((self.bits() & !USER_MASK) | user)
    }

    /// Explicit-size bit for `axis`.
    #[inline]
    pub const fn fixed(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => ItemFlags::HFIXED,
            Axis::Vertical => ItemFlags::VFIXED,
        }
    }

    #[inline]
    pub fn is_fixed(self, axis: Axis) -> bool {
        self.contains(Self::fixed(axis))
    }

    #[inline]
    pub fn is_break(self) -> bool {
        self.contains(ItemFlags::BREAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contain_box_model() {
        assert_eq!(Contain::LAYOUT.box_model(), BoxModel::Free);
        assert_eq!(Contain::WRAP.box_model(), BoxModel::Free);
        assert_eq!(
            Contain::ROW.box_model(),
            BoxModel::Flex {
                direction: Direction::Row,
                wrap: false
            }
        );
        assert_eq!(
            (Contain::COLUMN | Contain::WRAP).box_model(),
            BoxModel::Flex {
                direction: Direction::Column,
                wrap: true
            }
        );
    }

    #[test]
    fn test_contain_justify() {
        assert_eq!(Contain::ROW.justify(), Justify::Center);
        assert_eq!((Contain::ROW | Contain::START).justify(), Justify::Start);
        assert_eq!((Contain::ROW | Contain::END).justify(), Justify::End);
        assert_eq!((Contain::ROW | Contain::JUSTIFY).justify(), Justify::SpaceBetween);
    }

    #[test]
    fn test_contain_flex_builder() {
        let flags = Contain::flex(Direction::Column, true, Justify::End);
        assert_eq!(flags, Contain::COLUMN | Contain::WRAP | Contain::END);
        assert_eq!(flags.justify(), Justify::End);
        assert_eq!(Contain::flex(Direction::Row, false, Justify::Center), Contain::ROW);
    }

    #[test]
    fn test_behave_anchor() {
        assert_eq!(Behave::empty().anchor(Axis::Horizontal), Anchor::Center);
        assert_eq!(Behave::LEFT.anchor(Axis::Horizontal), Anchor::Start);
        assert_eq!(Behave::LEFT.anchor(Axis::Vertical), Anchor::Center);
        assert_eq!(Behave::BOTTOM.anchor(Axis::Vertical), Anchor::End);
        assert_eq!(Behave::HFILL.anchor(Axis::Horizontal), Anchor::Fill);
        assert_eq!(Behave::FILL.anchor(Axis::Vertical), Anchor::Fill);
    }

    #[test]
    fn test_behave_anchored_builder() {
        assert_eq!(Behave::anchored(Anchor::Fill, Anchor::Fill), Behave::FILL);
        assert_eq!(Behave::anchored(Anchor::Start, Anchor::End), Behave::LEFT | Behave::BOTTOM);
        assert_eq!(Behave::anchored(Anchor::Center, Anchor::Center), Behave::CENTER);
    }

    #[test]
    fn test_raw_masks() {
        assert!(Contain::from_raw(0x1f).is_ok());
        assert_eq!(Contain::from_raw(0x20), Err(LayoutError::ContainFlags(0x20)));
        assert!(Behave::from_raw(0x3e0).is_ok());
        assert_eq!(Behave::from_raw(0x400), Err(LayoutError::BehaveFlags(0x400)));
    }

    #[test]
    fn test_item_flags_sub_ranges() {
        let flags = ItemFlags::INSERTED | ItemFlags::HFIXED;
        let flags = flags.with_contain(Contain::COLUMN).with_behave(Behave::FILL | Behave::BREAK);
        assert_eq!(flags.contain(), Contain::COLUMN);
        assert_eq!(flags.behave(), Behave::FILL | Behave::BREAK);
        assert!(flags.is_break());
        assert!(flags.is_fixed(Axis::Horizontal));
        assert!(!flags.is_fixed(Axis::Vertical));

        // replacing one range leaves the others alone
        let flags = flags.with_contain(Contain::ROW | Contain::WRAP);
        assert_eq!(flags.behave(), Behave::FILL | Behave::BREAK);
        assert!(flags.contains(ItemFlags::INSERTED));

        let flags = flags.with_user(0x0001_0000);
        assert_eq!(flags.user(), 0x0001_0000);
        assert_eq!(flags.contain(), Contain::ROW | Contain::WRAP);
    }
}
