//! Layout context - the item arena and tree store.
//!
//! Owns every item and its computed rectangle in one growable slot buffer:
//! - Sequential id allocation, ids never reused until `reset`
//! - Geometric growth through the injected [`Reallocator`], never past what
//!   it grants
//! - Intrusive child lists (`insert`, `append`, `push`)
//! - Masked flag writes and size/margin accessors
//!
//! Only [`ItemId`]s survive a mutation. Anything borrowed from the context is
//! tied to `&self`, so the compiler rejects holding it across growth.

use crate::config::ArenaConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::flags::{Behave, Contain, ItemFlags, USER_MASK};
use crate::types::{Axis, ItemId, Margins, Rect, Scalar, Size};

use super::allocator::{Reallocator, SystemAllocator};
use super::item::{Item, Slot};

/// Abort on a broken precondition.
#[cold]
#[track_caller]
fn violation(err: LayoutError) -> ! {
    panic!("layout contract violation: {err}")
}

// =============================================================================
// LayoutContext
// =============================================================================

/// Arena of layout items plus their computed rectangles.
///
/// Build a tree under [`ItemId::ROOT`], call
/// [`run_context`](LayoutContext::run_context), then read rectangles with
/// [`rect`](LayoutContext::rect). For per-frame rebuilds, call
/// [`reset`](LayoutContext::reset) and declare the tree again; storage is kept.
#[derive(Debug)]
pub struct LayoutContext<A: Reallocator = SystemAllocator> {
    slots: Vec<Slot>,
    capacity: usize,
    config: ArenaConfig,
    allocator: A,
}

impl LayoutContext {
    /// Empty context backed by the global allocator. Allocates nothing yet.
    pub fn new() -> Self {
        Self::with_allocator(SystemAllocator)
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Reallocator> LayoutContext<A> {
    /// Empty context using a custom storage strategy.
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
            config: ArenaConfig::default(),
            allocator,
        }
    }

    /// Empty context with custom growth parameters.
    pub fn with_config(config: ArenaConfig, allocator: A) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self {
            slots: Vec::new(),
            capacity: 0,
            config,
            allocator,
        })
    }

    pub fn config(&self) -> ArenaConfig {
        self.config
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    // =========================================================================
    // Capacity & lifecycle
    // =========================================================================

    /// Number of items created since the last reset.
    #[inline]
    pub fn items_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of items the arena holds before it has to grow.
    #[inline]
    pub fn items_capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Grow so that `count` items fit without any further reallocation.
    ///
    /// # Panics
    ///
    /// If the allocator grants less than `count` slots.
    #[track_caller]
    pub fn reserve(&mut self, count: usize) {
        if let Err(err) = self.try_reserve(count) {
            violation(err);
        }
    }

    pub fn try_reserve(&mut self, count: usize) -> LayoutResult<()> {
        if count > self.capacity {
            self.grow_to(count);
        }
        if self.capacity < count {
            return Err(LayoutError::Exhausted {
                requested: count,
                granted: self.capacity,
            });
        }
        Ok(())
    }

    /// Ask the allocator for `requested` slots and record what it granted.
    fn grow_to(&mut self, requested: usize) {
        self.allocator.reallocate(&mut self.slots, requested);
        self.capacity = self.slots.capacity();
        tracing::debug!(
            requested,
            granted = self.capacity,
            count = self.slots.len(),
            "layout arena grown"
        );
    }

    /// Forget every item. Storage is kept for the next declaration pass.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Forget every item and hand the storage back to the allocator.
    ///
    /// The context stays usable; the next item starts a fresh allocation.
    pub fn destroy(&mut self) {
        self.slots.clear();
        self.allocator.release(&mut self.slots);
        self.capacity = self.slots.capacity();
        tracing::debug!("layout arena released");
    }

    // =========================================================================
    // Item creation & lookup
    // =========================================================================

    /// Create a new item. The first item created is the root.
    ///
    /// The item starts with no flags, zero size and margins, and no links.
    ///
    /// # Panics
    ///
    /// If the allocator refuses to grow the arena, or the id space (`u32`)
    /// is exhausted.
    #[track_caller]
    pub fn item_new(&mut self) -> ItemId {
        match self.try_item_new() {
            Ok(id) => id,
            Err(err) => violation(err),
        }
    }

    pub fn try_item_new(&mut self) -> LayoutResult<ItemId> {
        let index = self.slots.len();
        if index >= self.capacity {
            let next = self.config.next_capacity(self.capacity).max(index + 1);
            self.grow_to(next);
        }
        // never let the buffer grow behind the allocator's back
        if index >= self.capacity {
            return Err(LayoutError::Exhausted {
                requested: index + 1,
                granted: self.capacity,
            });
        }
        let Ok(raw) = u32::try_from(index) else {
            return Err(LayoutError::Exhausted {
                requested: index + 1,
                granted: u32::MAX as usize,
            });
        };
        self.slots.push(Slot::default());
        Ok(ItemId::new(raw))
    }

    #[inline]
    #[track_caller]
    fn slot(&self, id: ItemId) -> &Slot {
        match self.slots.get(id.index()) {
            Some(slot) => slot,
            None => violation(LayoutError::InvalidId {
                id,
                count: self.slots.len(),
            }),
        }
    }

    #[inline]
    #[track_caller]
    fn slot_mut(&mut self, id: ItemId) -> &mut Slot {
        let count = self.slots.len();
        match self.slots.get_mut(id.index()) {
            Some(slot) => slot,
            None => violation(LayoutError::InvalidId { id, count }),
        }
    }

    /// Checked lookup.
    pub fn try_item(&self, id: ItemId) -> LayoutResult<&Item> {
        self.slots
            .get(id.index())
            .map(|slot| &slot.item)
            .ok_or(LayoutError::InvalidId {
                id,
                count: self.slots.len(),
            })
    }

    /// Item state by id.
    ///
    /// # Panics
    ///
    /// If `id` does not name a live item.
    #[inline]
    #[track_caller]
    pub fn item(&self, id: ItemId) -> &Item {
        &self.slot(id).item
    }

    #[inline]
    #[track_caller]
    pub(crate) fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.slot_mut(id).item
    }

    /// Computed rectangle of an item.
    ///
    /// Meaningful only after a layout run and before the next tree mutation.
    #[inline]
    #[track_caller]
    pub fn rect(&self, id: ItemId) -> Rect {
        self.slot(id).rect
    }

    #[inline]
    #[track_caller]
    pub(crate) fn rect_mut(&mut self, id: ItemId) -> &mut Rect {
        &mut self.slot_mut(id).rect
    }

    /// All slots in id order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    // =========================================================================
    // Tree navigation
    // =========================================================================

    #[inline]
    #[track_caller]
    pub fn first_child(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).first_child
    }

    #[inline]
    #[track_caller]
    pub fn next_sibling(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).next_sibling
    }

    /// Last child of `parent`. Walks the whole sibling chain.
    #[track_caller]
    pub fn last_child(&self, parent: ItemId) -> Option<ItemId> {
        self.children(parent).last()
    }

    /// Direct children of `parent`, in sibling order.
    #[track_caller]
    pub fn children(&self, parent: ItemId) -> Children<'_> {
        self.chain_from(self.item(parent).first_child)
    }

    /// Sibling chain starting at `start`.
    #[inline]
    pub(crate) fn chain_from(&self, start: Option<ItemId>) -> Children<'_> {
        Children {
            slots: &self.slots,
            next: start,
        }
    }

    // =========================================================================
    // Tree building
    // =========================================================================

    /// Common checks for linking `child` under or after `anchor`.
    fn check_link(&self, anchor: ItemId, child: ItemId) -> LayoutResult<()> {
        self.try_item(anchor)?;
        let item = self.try_item(child)?;
        if child.is_root() {
            return Err(LayoutError::RootAsChild);
        }
        if anchor == child {
            return Err(LayoutError::SelfReference(child));
        }
        if item.is_inserted() {
            return Err(LayoutError::AlreadyInserted(child));
        }
        Ok(())
    }

    /// Link `later` directly after `earlier`; caller has run `check_link`.
    fn link_after(&mut self, earlier: ItemId, later: ItemId) {
        let next = self.item(earlier).next_sibling;
        let item = self.item_mut(later);
        item.next_sibling = next;
        item.flags |= ItemFlags::INSERTED;
        self.item_mut(earlier).next_sibling = Some(later);
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Walks the existing children to find the tail; when building long
    /// lists prefer [`append`](Self::append) after the first insert.
    ///
    /// # Panics
    ///
    /// If `child` is the root, equals `parent`, or is already inserted.
    #[track_caller]
    pub fn insert(&mut self, parent: ItemId, child: ItemId) {
        if let Err(err) = self.try_insert(parent, child) {
            violation(err);
        }
    }

    pub fn try_insert(&mut self, parent: ItemId, child: ItemId) -> LayoutResult<()> {
        self.check_link(parent, child)?;
        match self.last_child(parent) {
            Some(last) => self.link_after(last, child),
            None => {
                self.item_mut(parent).first_child = Some(child);
                self.item_mut(child).flags |= ItemFlags::INSERTED;
            }
        }
        Ok(())
    }

    /// Insert `later` as the sibling right after `earlier`, in O(1).
    ///
    /// # Panics
    ///
    /// If `later` is the root, equals `earlier`, or is already inserted.
    #[track_caller]
    pub fn append(&mut self, earlier: ItemId, later: ItemId) {
        if let Err(err) = self.try_append(earlier, later) {
            violation(err);
        }
    }

    pub fn try_append(&mut self, earlier: ItemId, later: ItemId) -> LayoutResult<()> {
        self.check_link(earlier, later)?;
        self.link_after(earlier, later);
        Ok(())
    }

    /// Insert `child` as the first child of `parent`, in O(1).
    ///
    /// # Panics
    ///
    /// If `child` is the root, equals `parent`, or is already inserted.
    #[track_caller]
    pub fn push(&mut self, parent: ItemId, child: ItemId) {
        if let Err(err) = self.try_push(parent, child) {
            violation(err);
        }
    }

    pub fn try_push(&mut self, parent: ItemId, child: ItemId) -> LayoutResult<()> {
        self.check_link(parent, child)?;
        let old_first = self.item(parent).first_child;
        self.item_mut(parent).first_child = Some(child);
        let item = self.item_mut(child);
        item.flags |= ItemFlags::INSERTED;
        item.next_sibling = old_first;
        Ok(())
    }

    // =========================================================================
    // Size & margins
    // =========================================================================

    #[inline]
    #[track_caller]
    pub fn size(&self, id: ItemId) -> Size {
        self.item(id).size
    }

    /// Set the requested size. A nonzero component fixes that axis; zero
    /// lets the size pass derive it from the children.
    #[track_caller]
    pub fn set_size(&mut self, id: ItemId, size: Size) {
        let item = self.item_mut(id);
        item.size = size;
        for axis in Axis::BOTH {
            item.flags.set(ItemFlags::fixed(axis), size.get(axis) != 0.0);
        }
    }

    #[track_caller]
    pub fn set_size_xy(&mut self, id: ItemId, width: Scalar, height: Scalar) {
        self.set_size(id, Size::new(width, height));
    }

    #[inline]
    #[track_caller]
    pub fn margins(&self, id: ItemId) -> Margins {
        self.item(id).margins
    }

    #[track_caller]
    pub fn set_margins(&mut self, id: ItemId, margins: Margins) {
        self.item_mut(id).margins = margins;
    }

    #[track_caller]
    pub fn set_margins_ltrb(
        &mut self,
        id: ItemId,
        left: Scalar,
        top: Scalar,
        right: Scalar,
        bottom: Scalar,
    ) {
        self.set_margins(id, Margins::new(left, top, right, bottom));
    }

    // =========================================================================
    // Flags
    // =========================================================================

    /// Set how `id` lays out its children. Replaces all container bits.
    ///
    /// # Panics
    ///
    /// If `flags` carries bits outside the container mask.
    #[track_caller]
    pub fn set_contain(&mut self, id: ItemId, flags: Contain) {
        if let Err(err) = self.try_set_contain_bits(id, flags.bits()) {
            violation(err);
        }
    }

    pub fn try_set_contain_bits(&mut self, id: ItemId, bits: u32) -> LayoutResult<()> {
        let contain = Contain::from_raw(bits)?;
        self.try_item(id)?;
        let item = self.item_mut(id);
        item.flags = item.flags.with_contain(contain);
        Ok(())
    }

    /// Set how `id` behaves inside its parent. Replaces all behavior bits,
    /// including any line break marker.
    ///
    /// # Panics
    ///
    /// If `flags` carries bits outside the behavior mask.
    #[track_caller]
    pub fn set_behave(&mut self, id: ItemId, flags: Behave) {
        if let Err(err) = self.try_set_behave_bits(id, flags.bits()) {
            violation(err);
        }
    }

    pub fn try_set_behave_bits(&mut self, id: ItemId, bits: u32) -> LayoutResult<()> {
        let behave = Behave::from_raw(bits)?;
        self.try_item(id)?;
        let item = self.item_mut(id);
        item.flags = item.flags.with_behave(behave);
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn contain(&self, id: ItemId) -> Contain {
        self.item(id).contain()
    }

    #[inline]
    #[track_caller]
    pub fn behave(&self, id: ItemId) -> Behave {
        self.item(id).behave()
    }

    /// Application-owned bits (within [`USER_MASK`]).
    #[inline]
    #[track_caller]
    pub fn user_flags(&self, id: ItemId) -> u32 {
        self.item(id).flags.user()
    }

    /// # Panics
    ///
    /// If `bits` reaches outside [`USER_MASK`].
    #[track_caller]
    pub fn set_user_flags(&mut self, id: ItemId, bits: u32) {
        if let Err(err) = self.try_set_user_flags(id, bits) {
            violation(err);
        }
    }

    pub fn try_set_user_flags(&mut self, id: ItemId, bits: u32) -> LayoutResult<()> {
        if bits & !USER_MASK != 0 {
            return Err(LayoutError::UserFlags(bits));
        }
        self.try_item(id)?;
        let item = self.item_mut(id);
        item.flags = item.flags.with_user(bits);
        Ok(())
    }
}

impl<A: Reallocator> Drop for LayoutContext<A> {
    fn drop(&mut self) {
        self.allocator.release(&mut self.slots);
    }
}

// =============================================================================
// Children iterator
// =============================================================================

/// Iterator over a sibling chain, produced by [`LayoutContext::children`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    slots: &'a [Slot],
    next: Option<ItemId>,
}

impl Iterator for Children<'_> {
    type Item = ItemId;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self
            .slots
            .get(current.index())
            .and_then(|slot| slot.item.next_sibling);
        Some(current)
    }
}
