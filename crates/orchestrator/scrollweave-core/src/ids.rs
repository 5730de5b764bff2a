//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DirectiveId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WatchId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TickId(pub u32);

/// Monotonic allocator for DirectiveId, WatchId, RegionId, and TickId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_directive: u32,
    next_watch: u32,
    next_region: u32,
    next_tick: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_directive(&mut self) -> DirectiveId {
        let id = DirectiveId(self.next_directive);
        self.next_directive = self.next_directive.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_watch(&mut self) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch = self.next_watch.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_region(&mut self) -> RegionId {
        let id = RegionId(self.next_region);
        self.next_region = self.next_region.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_tick(&mut self) -> TickId {
        let id = TickId(self.next_tick);
        self.next_tick = self.next_tick.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_directive(), DirectiveId(0));
        assert_eq!(alloc.alloc_directive(), DirectiveId(1));
        assert_eq!(alloc.alloc_watch(), WatchId(0));
        assert_eq!(alloc.alloc_watch(), WatchId(1));
        assert_eq!(alloc.alloc_region(), RegionId(0));
        assert_eq!(alloc.alloc_tick(), TickId(0));
        alloc.reset();
        assert_eq!(alloc.alloc_watch(), WatchId(0));
    }
}
