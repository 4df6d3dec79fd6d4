use crate::config::QueueConfig;
use crate::element::Element;
use crate::error::QueueError;
use crate::list::{Iter, Ring, SENTINEL};
use crate::sort;
use std::fmt;

/// A double ended queue of strings
///
/// Backed by a circular doubly linked list anchored on a sentinel. Every
/// operation rewires links in place. Removing an element hands its string
/// to the caller, deleting an element releases it.
pub struct Queue {
    ring: Ring,
    config: QueueConfig,
}

impl Queue {
    /// Creates an empty queue
    pub fn new() -> Result<Self, QueueError> {
        Self::with_config(QueueConfig::default())
    }

    /// Creates an empty queue with the given settings
    pub fn with_config(config: QueueConfig) -> Result<Self, QueueError> {
        let ring = Ring::try_with_capacity(config.capacity)?;
        Ok(Queue { ring, config })
    }

    #[inline]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Releases every element and then the queue itself
    pub fn free(mut self) {
        let released = self.ring.clear();
        tracing::trace!(released, "queue freed");
    }

    /// Inserts a copy of `value` at the head
    /// On failure the queue is left unchanged
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let index = self.alloc_element(value)?;
        self.ring.link_after(SENTINEL, index);
        Ok(())
    }

    /// Inserts a copy of `value` at the tail
    /// On failure the queue is left unchanged
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let index = self.alloc_element(value)?;
        self.ring.link_before(SENTINEL, index);
        Ok(())
    }

    /// Takes a slot and copies `value` into newly owned storage
    fn alloc_element(&mut self, value: &str) -> Result<usize, QueueError> {
        let index = self.ring.alloc().inspect_err(|_| {
            tracing::debug!(len = value.len(), "failed to allocate queue slot");
        })?;

        let mut owned = String::new();
        if let Err(err) = owned.try_reserve_exact(value.len()) {
            // Hand the slot back so nothing leaks
            self.ring.release(index);
            tracing::debug!(len = value.len(), "failed to allocate element string");
            return Err(err.into());
        }
        owned.push_str(value);

        self.ring.fill(index, owned);
        Ok(index)
    }

    /// Removes the head element and transfers it to the caller
    ///
    /// When `buf` is given the value is also copied into it, truncated to
    /// `buf.len() - 1` bytes and NUL terminated.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let first = self.ring.first()?;
        self.take(first, buf)
    }

    /// Removes the tail element and transfers it to the caller
    /// The buffer is handled as in `remove_head`
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let last = self.ring.last()?;
        self.take(last, buf)
    }

    fn take(&mut self, index: usize, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = Element::new(self.ring.remove(index)?);
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Returns the number of elements
    /// Walks the whole ring, no length is cached
    pub fn size(&self) -> usize {
        self.ring.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Number of slots held by the backing arena, vacant ones included
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.ring.slot_count()
    }

    /// Returns the head value without removing it
    pub fn head(&self) -> Option<&str> {
        self.ring.first().map(|index| self.ring.value(index))
    }

    /// Returns the tail value without removing it
    pub fn tail(&self) -> Option<&str> {
        self.ring.last().map(|index| self.ring.value(index))
    }

    /// Deletes the middle element, the one at index `size / 2` from the head
    ///
    /// A slow cursor advances one link for every two taken by a fast cursor,
    /// so the middle is found in a single pass.
    pub fn delete_mid(&mut self) -> Result<(), QueueError> {
        let first = self.ring.first().ok_or(QueueError::Empty)?;

        let mut slow = first;
        let mut fast = first;
        while fast != SENTINEL && self.ring.next(fast) != SENTINEL {
            slow = self.ring.next(slow);
            fast = self.ring.next(self.ring.next(fast));
        }

        self.ring.remove(slow);
        Ok(())
    }

    /// Deletes every element whose value appears more than once, leaving
    /// only the values that were unique
    ///
    /// The queue must already be sorted in ascending order, duplicates are
    /// only detected between neighbors. On unsorted input the result is
    /// unspecified. An empty queue is left as is.
    pub fn delete_dup(&mut self) {
        if self.config.verify_sorted && !self.is_sorted() {
            tracing::warn!(size = self.size(), "delete_dup called on an unsorted queue");
        }

        let mut in_run = false;
        let mut cursor = self.ring.next(SENTINEL);
        while cursor != SENTINEL {
            // Read ahead, the current slot may be released below
            let next = self.ring.next(cursor);
            if next != SENTINEL && self.ring.value(next) == self.ring.value(cursor) {
                self.ring.remove(cursor);
                in_run = true;
            } else if in_run {
                self.ring.remove(cursor);
                in_run = false;
            }
            cursor = next;
        }
    }

    /// Returns true if the values are in ascending order
    pub fn is_sorted(&self) -> bool {
        let mut iter = self.ring.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for value in iter {
            if value < prev {
                return false;
            }
            prev = value;
        }
        true
    }

    /// Swaps every two adjacent elements
    /// With an odd count the last element stays where it is
    pub fn swap(&mut self) {
        let mut cursor = self.ring.next(SENTINEL);
        while cursor != SENTINEL && self.ring.next(cursor) != SENTINEL {
            let partner = self.ring.next(cursor);
            self.ring.move_after(cursor, partner);
            cursor = self.ring.next(cursor);
        }
    }

    /// Reverses the order of the elements by flipping every link
    pub fn reverse(&mut self) {
        if self.ring.is_empty() {
            return;
        }

        let mut cursor = self.ring.next(SENTINEL);
        while cursor != SENTINEL {
            let next = self.ring.next(cursor);
            self.ring.flip(cursor);
            cursor = next;
        }
        self.ring.flip(SENTINEL);
    }

    /// Sorts the elements in ascending byte order with a merge sort
    /// Equal values keep their relative order
    pub fn sort(&mut self) {
        tracing::trace!(size = self.size(), "sorting queue");
        sort::sort(&mut self.ring);
    }

    /// Returns an iterator over the values from head to tail
    pub fn iter(&self) -> Iter<'_> {
        self.ring.iter()
    }

    /// Checks the ring invariant: every link agrees with its neighbor and
    /// walking forward from the sentinel returns to it
    pub fn is_well_formed(&self) -> bool {
        self.ring.is_well_formed()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Queue {
            ring: Ring::new(),
            config: QueueConfig::default(),
        }
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
