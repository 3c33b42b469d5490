//! Line partition of wrapping containers.
//!
//! A wrapping container remembers its lines through `BREAK` markers on its
//! children: every line after the first starts at a marked child. The stacked
//! arrangement sets markers when a child no longer fits; callers may set them
//! by hand through [`Behave::BREAK`](crate::Behave::BREAK).
//!
//! Markers are sticky. A later run reuses the same partition, so when a
//! wrapping container changes extent call [`LayoutContext::clear_breaks`]
//! before running again. All reads and writes of the markers go through this
//! module.

use crate::engine::{LayoutContext, Reallocator};
use crate::flags::ItemFlags;
use crate::types::ItemId;

/// A run of siblings laid out on the same line, from `start` up to but not
/// including `end` (`None` = through the last sibling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: ItemId,
    pub end: Option<ItemId>,
}

impl Line {
    /// Members of this line, in order.
    pub fn items<A: Reallocator>(
        self,
        ctx: &LayoutContext<A>,
    ) -> impl Iterator<Item = ItemId> + '_ {
        ctx.run_of(Some(self.start), self.end)
    }
}

/// Iterator over the lines of a container, produced by [`LayoutContext::lines`].
pub struct Lines<'a, A: Reallocator> {
    ctx: &'a LayoutContext<A>,
    next: Option<ItemId>,
}

impl<A: Reallocator> Iterator for Lines<'_, A> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let start = self.next?;
        let line = self.ctx.line_from(start);
        self.next = line.end;
        Some(line)
    }
}

impl<A: Reallocator> LayoutContext<A> {
    /// Lines of `parent` according to the current markers.
    ///
    /// Only meaningful for wrapping containers after a layout run (or with
    /// manual markers); any other container yields a single line.
    #[track_caller]
    pub fn lines(&self, parent: ItemId) -> Lines<'_, A> {
        Lines {
            ctx: self,
            next: self.first_child(parent),
        }
    }

    /// The line starting at `start`: runs until the next marked sibling.
    pub(crate) fn line_from(&self, start: ItemId) -> Line {
        let end = self
            .chain_from(self.next_sibling(start))
            .find(|&id| self.item(id).flags.is_break());
        Line { start, end }
    }

    /// Record that a line starts at `id`.
    #[inline]
    pub(crate) fn mark_break(&mut self, id: ItemId) {
        self.item_mut(id).flags |= ItemFlags::BREAK;
    }

    /// Clear the line break markers of all direct children of `parent`,
    /// automatic and manual alike.
    ///
    /// Needed before re-running layout on a wrapping container whose extent
    /// may have changed; otherwise the previous line partition is reused.
    #[track_caller]
    pub fn clear_breaks(&mut self, parent: ItemId) {
        let mut child = self.first_child(parent);
        while let Some(id) = child {
            let item = self.item_mut(id);
            item.flags.remove(ItemFlags::BREAK);
            child = item.next_sibling;
        }
        tracing::debug!(%parent, "cleared line breaks");
    }
}

impl<A: Reallocator> LayoutContext<A> {
    /// Siblings from `start` (inclusive) up to `end` (exclusive).
    #[inline]
    pub(crate) fn run_of(
        &self,
        start: Option<ItemId>,
        end: Option<ItemId>,
    ) -> impl Iterator<Item = ItemId> + '_ {
        self.chain_from(start).take_while(move |&id| Some(id) != end)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Behave, LayoutContext};

    #[test]
    fn test_lines_follow_markers() {
        let mut ctx = LayoutContext::new();
        let root = ctx.item_new();
        let items: Vec<_> = (0..5).map(|_| ctx.item_new()).collect();
        for &id in &items {
            ctx.insert(root, id);
        }
        ctx.set_behave(items[2], Behave::BREAK);
        ctx.set_behave(items[4], Behave::BREAK);

        let lines: Vec<_> = ctx.lines(root).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].start, items[0]);
        assert_eq!(lines[0].end, Some(items[2]));
        assert_eq!(lines[2].end, None);

        let first: Vec<_> = lines[0].items(&ctx).collect();
        assert_eq!(first, vec![items[0], items[1]]);
        let last: Vec<_> = lines[2].items(&ctx).collect();
        assert_eq!(last, vec![items[4]]);
    }

    #[test]
    fn test_marker_on_first_child_does_not_split() {
        let mut ctx = LayoutContext::new();
        let root = ctx.item_new();
        let a = ctx.item_new();
        let b = ctx.item_new();
        ctx.insert(root, a);
        ctx.insert(root, b);
        ctx.set_behave(a, Behave::BREAK);

        assert_eq!(ctx.lines(root).count(), 1);
    }

    #[test]
    fn test_clear_breaks_only_touches_children() {
        let mut ctx = LayoutContext::new();
        let root = ctx.item_new();
        let a = ctx.item_new();
        let b = ctx.item_new();
        let grandchild = ctx.item_new();
        ctx.insert(root, a);
        ctx.insert(root, b);
        ctx.insert(b, grandchild);
        ctx.set_behave(a, Behave::BREAK | Behave::HFILL);
        ctx.set_behave(b, Behave::BREAK);
        ctx.set_behave(grandchild, Behave::BREAK);

        ctx.clear_breaks(root);

        assert_eq!(ctx.behave(a), Behave::HFILL);
        assert_eq!(ctx.behave(b), Behave::empty());
        assert_eq!(ctx.behave(grandchild), Behave::BREAK);
    }
}
