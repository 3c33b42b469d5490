//! Size pass (post-order, one axis at a time).
//!
//! Each item's extent is computed after all of its children: an explicit size
//! wins outright, otherwise the extent is derived from the children according
//! to the container's box model. The result is left in the item's rectangle
//! for the parent's size pass and the arrangement pass.

use crate::engine::{LayoutContext, Reallocator};
use crate::flags::{BoxModel, Direction};
use crate::types::{Axis, ItemId, Scalar};

impl<A: Reallocator> LayoutContext<A> {
    pub(crate) fn calc_size(&mut self, item: ItemId, axis: Axis) {
        let mut child = self.item(item).first_child;
        while let Some(id) = child {
            // NOTE: recursive, very deep trees can exhaust the stack
            self.calc_size(id, axis);
            child = self.item(id).next_sibling;
        }

        let state = *self.item(item);
        // the position holds the start margin until the parent arranges us
        self.rect_mut(item).set_pos(axis, state.margins.start(axis));

        let explicit = state.size.get(axis);
        if explicit != 0.0 {
            self.rect_mut(item).set_extent(axis, explicit);
            return;
        }

        let first = state.first_child;
        let extent = match state.contain().box_model() {
            BoxModel::Flex {
                direction: Direction::Column,
                wrap: true,
            } => match axis {
                Axis::Vertical => self.stacked_size(first, None, axis),
                Axis::Horizontal => self.overlayed_size(first, None, axis),
            },
            BoxModel::Flex {
                direction: Direction::Row,
                wrap: true,
            } => match axis {
                Axis::Horizontal => self.wrapped_stacked_size(item, axis),
                Axis::Vertical => self.wrapped_overlayed_size(item, axis),
            },
            BoxModel::Flex {
                direction,
                wrap: false,
            } => {
                if direction.axis() == axis {
                    self.stacked_size(first, None, axis)
                } else {
                    self.overlayed_size(first, None, axis)
                }
            }
            BoxModel::Free => self.overlayed_size(first, None, axis),
        };
        self.rect_mut(item).set_extent(axis, extent);
    }

    /// Space a child claims on `axis`: start margin, extent, end margin.
    #[inline]
    pub(crate) fn outer_extent(&self, id: ItemId, axis: Axis) -> Scalar {
        let rect = self.rect(id);
        rect.pos(axis) + rect.extent(axis) + self.item(id).margins.end(axis)
    }

    /// Largest child in the run `start..end`.
    pub(crate) fn overlayed_size(
        &self,
        start: Option<ItemId>,
        end: Option<ItemId>,
        axis: Axis,
    ) -> Scalar {
        self.run_of(start, end)
            .map(|id| self.outer_extent(id, axis))
            .fold(0.0, Scalar::max)
    }

    /// Sum of the children in the run `start..end`.
    pub(crate) fn stacked_size(
        &self,
        start: Option<ItemId>,
        end: Option<ItemId>,
        axis: Axis,
    ) -> Scalar {
        self.run_of(start, end)
            .map(|id| self.outer_extent(id, axis))
            .sum()
    }

    /// Longest line, each line stacked.
    fn wrapped_stacked_size(&self, item: ItemId, axis: Axis) -> Scalar {
        self.lines(item)
            .map(|line| self.stacked_size(Some(line.start), line.end, axis))
            .fold(0.0, Scalar::max)
    }

    /// Line bands stacked on top of each other, each band as tall as its
    /// tallest child.
    fn wrapped_overlayed_size(&self, item: ItemId, axis: Axis) -> Scalar {
        self.lines(item)
            .map(|line| self.overlayed_size(Some(line.start), line.end, axis))
            .sum()
    }
}
