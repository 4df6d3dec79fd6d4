use crate::error::QueueError;

/// Index of the sentinel slot
pub const SENTINEL: usize = 0;

/// Terminates an open chain and the free list
pub const NIL: usize = usize::MAX;

/// The two links of a slot
/// Links are indices into the ring and never own the slot they name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub prev: usize,
    pub next: usize,
}

impl Link {
    fn to_self(index: usize) -> Self {
        Link {
            prev: index,
            next: index,
        }
    }
}

/// A slot in the ring
/// The sentinel and vacant slots carry no value
struct Slot {
    link: Link,
    value: Option<String>,
}

/// A circular doubly linked list stored in an arena of slots
///
/// Slot 0 is the sentinel. Its `next` is the first element and its `prev`
/// the last one, or itself when the ring is empty. Vacant slots are chained
/// through their `next` field into a free list and get recycled before the
/// arena grows.
pub struct Ring {
    slots: Vec<Slot>,
    free: usize,
}

impl Ring {
    /// Creates an empty ring holding only the sentinel
    pub fn new() -> Self {
        Ring {
            slots: vec![Slot {
                link: Link::to_self(SENTINEL),
                value: None,
            }],
            free: NIL,
        }
    }

    /// Creates an empty ring with room for `capacity` elements
    /// Fails instead of aborting when the reservation cannot be satisfied
    pub fn try_with_capacity(capacity: usize) -> Result<Self, QueueError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity.saturating_add(1))?;
        slots.push(Slot {
            link: Link::to_self(SENTINEL),
            value: None,
        });
        Ok(Ring { slots, free: NIL })
    }

    /// Returns true if only the sentinel is linked
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots[SENTINEL].link.next == SENTINEL
    }

    #[inline]
    pub fn link(&self, index: usize) -> Link {
        self.slots[index].link
    }

    #[inline]
    pub fn next(&self, index: usize) -> usize {
        self.slots[index].link.next
    }

    #[inline]
    pub fn prev(&self, index: usize) -> usize {
        self.slots[index].link.prev
    }

    #[inline]
    pub(crate) fn set_next(&mut self, index: usize, next: usize) {
        self.slots[index].link.next = next;
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, index: usize, prev: usize) {
        self.slots[index].link.prev = prev;
    }

    /// Index of the first element, if any
    #[inline]
    pub fn first(&self) -> Option<usize> {
        let first = self.next(SENTINEL);
        (first != SENTINEL).then_some(first)
    }

    /// Index of the last element, if any
    #[inline]
    pub fn last(&self) -> Option<usize> {
        let last = self.prev(SENTINEL);
        (last != SENTINEL).then_some(last)
    }

    /// Returns the value stored at an element slot
    /// The sentinel and vacant slots read as the empty string
    #[inline]
    pub fn value(&self, index: usize) -> &str {
        self.slots[index].value.as_deref().unwrap_or_default()
    }

    /// Takes a detached slot, recycling a vacant one when possible
    /// The slot links to itself and holds no value until `fill` is called
    pub(crate) fn alloc(&mut self) -> Result<usize, QueueError> {
        if self.free != NIL {
            let index = self.free;
            self.free = self.slots[index].link.next;
            self.slots[index].link = Link::to_self(index);
            return Ok(index);
        }

        self.slots.try_reserve(1)?;
        let index = self.slots.len();
        self.slots.push(Slot {
            link: Link::to_self(index),
            value: None,
        });
        Ok(index)
    }

    /// Stores a value in a detached slot
    #[inline]
    pub(crate) fn fill(&mut self, index: usize, value: String) {
        debug_assert_ne!(index, SENTINEL);
        self.slots[index].value = Some(value);
    }

    /// Returns a detached slot to the free list and hands back its value
    /// The slot must already be unlinked, its index becomes stale
    pub(crate) fn release(&mut self, index: usize) -> Option<String> {
        debug_assert_ne!(index, SENTINEL);
        let slot = &mut self.slots[index];
        let value = slot.value.take();
        slot.link = Link {
            prev: NIL,
            next: self.free,
        };
        self.free = index;
        value
    }

    /// Links a detached slot right after `at`
    pub(crate) fn link_after(&mut self, at: usize, index: usize) {
        let next = self.next(at);
        self.slots[index].link = Link { prev: at, next };
        self.set_prev(next, index);
        self.set_next(at, index);
    }

    /// Links a detached slot right before `at`
    #[inline]
    pub(crate) fn link_before(&mut self, at: usize, index: usize) {
        self.link_after(self.prev(at), index);
    }

    /// Unlinks an element, bridging its neighbors
    /// The slot is left detached, linking to itself
    pub(crate) fn unlink(&mut self, index: usize) {
        debug_assert_ne!(index, SENTINEL);
        let Link { prev, next } = self.link(index);
        self.set_next(prev, next);
        self.set_prev(next, prev);
        self.slots[index].link = Link::to_self(index);
    }

    /// Unlinks an element and relinks it right after `at`
    #[inline]
    pub(crate) fn move_after(&mut self, index: usize, at: usize) {
        self.unlink(index);
        self.link_after(at, index);
    }

    /// Exchanges the `prev` and `next` links of a slot
    #[inline]
    pub(crate) fn flip(&mut self, index: usize) {
        let link = &mut self.slots[index].link;
        std::mem::swap(&mut link.prev, &mut link.next);
    }

    /// Unlinks and releases an element, returning its value
    pub(crate) fn remove(&mut self, index: usize) -> Option<String> {
        self.unlink(index);
        self.release(index)
    }

    /// Releases every element, returning how many were linked
    pub(crate) fn clear(&mut self) -> usize {
        let mut count = 0;
        while let Some(first) = self.first() {
            self.remove(first);
            count += 1;
        }
        count
    }

    /// Number of slots in the arena, counting the sentinel and vacant slots
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Counts the linked elements by walking the ring
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.next(SENTINEL);
        while cursor != SENTINEL {
            count += 1;
            cursor = self.next(cursor);
        }
        count
    }

    /// Checks that every linked slot agrees with its neighbors and that
    /// walking forward returns to the sentinel without revisiting a slot
    pub fn is_well_formed(&self) -> bool {
        if self.slots[SENTINEL].value.is_some() {
            return false;
        }

        let mut cursor = SENTINEL;
        // One step per slot at most, otherwise the walk is stuck in a cycle
        for _ in 0..self.slots.len() {
            let Link { prev, next } = self.link(cursor);
            if next >= self.slots.len() || prev >= self.slots.len() {
                return false;
            }
            if self.prev(next) != cursor || self.next(prev) != cursor {
                return false;
            }
            if next == SENTINEL {
                return true;
            }
            if self.slots[next].value.is_none() {
                return false;
            }
            cursor = next;
        }

        false
    }

    /// Returns an iterator over the element values in ring order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: self,
            front: self.next(SENTINEL),
            back: self.prev(SENTINEL),
            finished: self.is_empty(),
        }
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}

/// A double ended iterator over the values of a ring that borrows the ring
pub struct Iter<'a> {
    ring: &'a Ring,
    front: usize,
    back: usize,
    finished: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let index = self.front;
        if index == self.back {
            self.finished = true;
        } else {
            self.front = self.ring.next(index);
        }
        Some(self.ring.value(index))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let index = self.back;
        if index == self.front {
            self.finished = true;
        } else {
            self.back = self.ring.prev(index);
        }
        Some(self.ring.value(index))
    }
}
