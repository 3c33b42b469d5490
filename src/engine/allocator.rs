//! Pluggable growth strategy for the item arena.
//!
//! The context never grows or frees its slot buffer on its own. Growth and
//! release go through a [`Reallocator`], so embedders can count them or cap
//! the arena: the context trusts only the capacity the buffer actually has
//! afterwards, and a short grant fails item creation with
//! [`LayoutError::Exhausted`](crate::LayoutError::Exhausted).

use super::item::Slot;

/// Resize/release pair consumed by [`LayoutContext`](crate::LayoutContext).
pub trait Reallocator {
    /// Make `slots` able to hold `capacity` slots without further
    /// reallocation. Existing slots must be preserved.
    ///
    /// Granting less is allowed; the context reads `slots.capacity()` back
    /// and refuses to store past it.
    fn reallocate(&mut self, slots: &mut Vec<Slot>, capacity: usize);

    /// Give back all memory held by `slots`. The buffer may be reused after.
    fn release(&mut self, slots: &mut Vec<Slot>);
}

/// Default strategy backed by the global allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl Reallocator for SystemAllocator {
    fn reallocate(&mut self, slots: &mut Vec<Slot>, capacity: usize) {
        if capacity > slots.capacity() {
            slots.reserve_exact(capacity - slots.len());
        }
    }

    fn release(&mut self, slots: &mut Vec<Slot>) {
        *slots = Vec::new();
    }
}

impl<R: Reallocator + ?Sized> Reallocator for &mut R {
    fn reallocate(&mut self, slots: &mut Vec<Slot>, capacity: usize) {
        (**self).reallocate(slots, capacity);
    }

    fn release(&mut self, slots: &mut Vec<Slot>) {
        (**self).release(slots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_allocator_reserves_exactly() {
        let mut slots = Vec::new();
        let mut alloc = SystemAllocator;

        alloc.reallocate(&mut slots, 32);
        assert!(slots.capacity() >= 32);

        slots.push(Slot::default());
        alloc.reallocate(&mut slots, 128);
        assert!(slots.capacity() >= 128);
        assert_eq!(slots.len(), 1);

        alloc.release(&mut slots);
        assert_eq!(slots.capacity(), 0);
    }
}
