//! Arrangement pass (pre-order, one axis at a time).
//!
//! Runs after the size pass for the same axis. Every container positions its
//! direct children inside its own settled rectangle, then recurses.
//!
//! # Stacking axis
//!
//! Children are walked line by line (the whole child list when not
//! wrapping). A measurement walk counts growable (fill) and squeezable
//! (neither fill nor fixed) children and the space they use; the leftover is
//! handed to growable children, or to justification when there are none. On
//! overflow without wrapping, squeezable children shrink evenly, never below
//! zero. A placement walk then writes final positions and extents.
//!
//! # Cross axis
//!
//! Children are anchored inside the container (or inside their line's band
//! for wrapping containers): centered, start, end, or stretched.

use crate::engine::{LayoutContext, Reallocator};
use crate::flags::{Anchor, BoxModel, Direction, ItemFlags, Justify};
use crate::types::{Axis, ItemId, Scalar};

/// How a child's extent reacts to spare or missing room on the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Fill anchor: takes a share of the leftover space.
    Grow,
    /// Explicit size: never resized.
    Fixed,
    /// Shrinks on overflow.
    Squeeze,
}

impl Flow {
    #[inline]
    fn of(flags: ItemFlags, axis: Axis) -> Self {
        if flags.behave().anchor(axis) == Anchor::Fill {
            Flow::Grow
        } else if flags.is_fixed(axis) {
            Flow::Fixed
        } else {
            Flow::Squeeze
        }
    }
}

/// Result of the measurement walk over one line.
#[derive(Debug, Clone, Copy, Default)]
struct LineMetrics {
    used: Scalar,
    growable: u32,
    squeezable: u32,
    total: u32,
    /// First child of the next line, if the line was broken.
    end: Option<ItemId>,
    /// The break was requested by a marker rather than by running out of room.
    hard_break: bool,
}

/// Leftover distribution for one line.
#[derive(Debug, Clone, Copy, Default)]
struct Distribution {
    filler: Scalar,
    spacer: Scalar,
    lead: Scalar,
    eater: Scalar,
}

impl<A: Reallocator> LayoutContext<A> {
    pub(crate) fn arrange(&mut self, item: ItemId, axis: Axis) {
        let state = *self.item(item);

        match state.contain().box_model() {
            BoxModel::Flex {
                direction: Direction::Column,
                wrap: true,
            } => {
                // lines are only known once the vertical stacking has run
                if axis == Axis::Vertical {
                    self.arrange_stacked(item, Axis::Vertical, true);
                    let end = self.arrange_wrapped_overlay_squeezed(item, Axis::Horizontal);
                    let rect = self.rect_mut(item);
                    rect.width = end - rect.x;
                }
            }
            BoxModel::Flex {
                direction: Direction::Row,
                wrap: true,
            } => match axis {
                Axis::Horizontal => self.arrange_stacked(item, axis, true),
                Axis::Vertical => {
                    self.arrange_wrapped_overlay_squeezed(item, axis);
                }
            },
            BoxModel::Flex {
                direction,
                wrap: false,
            } => {
                if direction.axis() == axis {
                    self.arrange_stacked(item, axis, false);
                } else {
                    let rect = self.rect(item);
                    self.arrange_overlay_squeezed_range(
                        axis,
                        state.first_child,
                        None,
                        rect.pos(axis),
                        rect.extent(axis),
                    );
                }
            }
            BoxModel::Free => self.arrange_overlay(item, axis),
        }

        let mut child = state.first_child;
        while let Some(id) = child {
            // NOTE: recursive, very deep trees can exhaust the stack
            self.arrange(id, axis);
            child = self.item(id).next_sibling;
        }
    }

    // =========================================================================
    // Stacking axis
    // =========================================================================

    fn arrange_stacked(&mut self, item: ItemId, axis: Axis, wrap: bool) {
        let state = *self.item(item);
        let justify = state.contain().justify();
        let rect = self.rect(item);
        let space = rect.extent(axis);
        let line_limit = rect.pos(axis) + space;

        let mut line_start = state.first_child;
        while let Some(start) = line_start {
            let metrics = self.measure_line(start, axis, space, wrap);
            let dist = distribute(&metrics, space, justify, wrap);

            let mut cursor = rect.pos(axis);
            let mut lead = dist.lead;
            let mut child = Some(start);
            while let Some(id) = child {
                if Some(id) == metrics.end {
                    break;
                }
                let child_state = *self.item(id);
                let end_margin = child_state.margins.end(axis);
                let child_rect = self.rect_mut(id);
                let extent = child_rect.extent(axis);

                // position still holds the start margin from the size pass
                cursor += child_rect.pos(axis) + lead;
                let far = match Flow::of(child_state.flags, axis) {
                    Flow::Grow => cursor + dist.filler,
                    Flow::Fixed => cursor + extent,
                    Flow::Squeeze => cursor + (extent + dist.eater).max(0.0),
                };
                let clipped = if wrap {
                    far.min(line_limit - end_margin)
                } else {
                    far
                };
                child_rect.set_pos(axis, cursor);
                child_rect.set_extent(axis, clipped - cursor);

                cursor = far + end_margin;
                lead = dist.spacer;
                child = child_state.next_sibling;
            }

            line_start = metrics.end;
        }
    }

    /// Measurement walk over one line starting at `start`.
    ///
    /// When wrapping, the child that ends the line gets a break marker so the
    /// cross-axis pass and later runs see the same partition.
    ///
    /// That child is not counted as growable or squeezable here; it counts on
    /// the line it starts. A fill child carrying a break therefore never takes
    /// a share of the previous line's leftover.
    fn measure_line(&mut self, start: ItemId, axis: Axis, space: Scalar, wrap: bool) -> LineMetrics {
        let mut metrics = LineMetrics::default();
        let mut child = Some(start);
        while let Some(id) = child {
            let child_state = *self.item(id);
            let rect = self.rect(id);
            let flow = Flow::of(child_state.flags, axis);
            let claimed = match flow {
                Flow::Grow => rect.pos(axis) + child_state.margins.end(axis),
                Flow::Fixed | Flow::Squeeze => self.outer_extent(id, axis),
            };
            let extended = metrics.used + claimed;

            let is_break = child_state.flags.is_break();
            if wrap && metrics.total > 0 && (extended > space || is_break) {
                metrics.end = Some(id);
                metrics.hard_break = is_break;
                self.mark_break(id);
                break;
            }

            match flow {
                Flow::Grow => metrics.growable += 1,
                Flow::Squeeze => metrics.squeezable += 1,
                Flow::Fixed => {}
            }
            metrics.used = extended;
            metrics.total += 1;
            child = child_state.next_sibling;
        }
        metrics
    }

    // =========================================================================
    // Cross axis
    // =========================================================================

    /// Free-form containers: anchor every child inside the full extent.
    fn arrange_overlay(&mut self, item: ItemId, axis: Axis) {
        let state = *self.item(item);
        let rect = self.rect(item);
        let offset = rect.pos(axis);
        let space = rect.extent(axis);

        let mut child = state.first_child;
        while let Some(id) = child {
            let child_state = *self.item(id);
            let margins = child_state.margins;
            let child_rect = self.rect_mut(id);
            let pos = child_rect.pos(axis);
            let extent = child_rect.extent(axis);

            match child_state.behave().anchor(axis) {
                Anchor::Center => {
                    child_rect.set_pos(axis, pos + (space - extent) / 2.0 - margins.end(axis));
                }
                Anchor::End => {
                    child_rect.set_pos(axis, pos + space - extent - margins.total(axis));
                }
                Anchor::Fill => {
                    child_rect.set_extent(axis, (space - pos - margins.end(axis)).max(0.0));
                }
                Anchor::Start => {}
            }
            child_rect.set_pos(axis, child_rect.pos(axis) + offset);

            child = child_state.next_sibling;
        }
    }

    /// Flex cross axis: like the overlay, but a child never extends past
    /// the band it is placed in.
    fn arrange_overlay_squeezed_range(
        &mut self,
        axis: Axis,
        start: Option<ItemId>,
        end: Option<ItemId>,
        offset: Scalar,
        space: Scalar,
    ) {
        let mut child = start;
        while let Some(id) = child {
            if Some(id) == end {
                break;
            }
            let child_state = *self.item(id);
            let end_margin = child_state.margins.end(axis);
            let child_rect = self.rect_mut(id);
            let pos = child_rect.pos(axis);
            let room = (space - pos - end_margin).max(0.0);

            match child_state.behave().anchor(axis) {
                Anchor::Center => {
                    let extent = child_rect.extent(axis).min(room);
                    child_rect.set_extent(axis, extent);
                    child_rect.set_pos(axis, pos + (space - extent) / 2.0 - end_margin);
                }
                Anchor::End => {
                    let extent = child_rect.extent(axis).min(room);
                    child_rect.set_extent(axis, extent);
                    child_rect.set_pos(axis, space - extent - end_margin);
                }
                Anchor::Fill => child_rect.set_extent(axis, room),
                Anchor::Start => {
                    let extent = child_rect.extent(axis).min(room);
                    child_rect.set_extent(axis, extent);
                }
            }
            child_rect.set_pos(axis, child_rect.pos(axis) + offset);

            child = child_state.next_sibling;
        }
    }

    /// Wrapping cross axis: each line gets a band as large as its largest
    /// child, bands are laid one after the other.
    ///
    /// Returns the far edge of the last band.
    fn arrange_wrapped_overlay_squeezed(&mut self, item: ItemId, axis: Axis) -> Scalar {
        let mut offset = self.rect(item).pos(axis);
        let mut line_start = self.item(item).first_child;
        while let Some(start) = line_start {
            let line = self.line_from(start);
            let band = self.overlayed_size(Some(line.start), line.end, axis);
            self.arrange_overlay_squeezed_range(axis, Some(line.start), line.end, offset, band);
            offset += band;
            line_start = line.end;
        }
        offset
    }
}

/// Hand the leftover space of a line to fillers, justification or eaters.
fn distribute(metrics: &LineMetrics, space: Scalar, justify: Justify, wrap: bool) -> Distribution {
    let mut dist = Distribution::default();
    let extra = space - metrics.used;

    if extra > 0.0 {
        if metrics.growable > 0 {
            dist.filler = extra / metrics.growable as Scalar;
        } else if metrics.total > 0 {
            match justify {
                Justify::SpaceBetween => {
                    // not on the last line of a wrap, nor after a manual break
                    let spread = !wrap || (metrics.end.is_some() && !metrics.hard_break);
                    if spread && metrics.total > 1 {
                        dist.spacer = extra / (metrics.total - 1) as Scalar;
                    }
                }
                Justify::Start => {}
                Justify::End => dist.lead = extra,
                Justify::Center => dist.lead = extra / 2.0,
            }
        }
    } else if !wrap && metrics.squeezable > 0 {
        dist.eater = extra / metrics.squeezable as Scalar;
    }
    dist
}
