//! Item records and arena slots.

use crate::flags::{Behave, Contain, ItemFlags};
use crate::types::{ItemId, Margins, Rect, Size};

/// Input state of one layout item.
///
/// Children form an intrusive singly linked list: `first_child` on the parent,
/// then `next_sibling` on each child. There is no parent link; every pass walks
/// top-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Item {
    pub(crate) flags: ItemFlags,
    pub(crate) first_child: Option<ItemId>,
    pub(crate) next_sibling: Option<ItemId>,
    pub(crate) margins: Margins,
    pub(crate) size: Size,
}

impl Item {
    #[inline]
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    #[inline]
    pub fn contain(&self) -> Contain {
        self.flags.contain()
    }

    #[inline]
    pub fn behave(&self) -> Behave {
        self.flags.behave()
    }

    #[inline]
    pub fn first_child(&self) -> Option<ItemId> {
        self.first_child
    }

    #[inline]
    pub fn next_sibling(&self) -> Option<ItemId> {
        self.next_sibling
    }

    #[inline]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn is_inserted(&self) -> bool {
        self.flags.contains(ItemFlags::INSERTED)
    }
}

/// One arena cell: an item and its computed rectangle side by side.
///
/// Items and rectangles live in a single contiguous buffer of slots, so one
/// reallocation moves both.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slot {
    pub(crate) item: Item,
    pub(crate) rect: Rect,
}

impl Slot {
    #[inline]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}
