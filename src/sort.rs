//! Merge sort over the forward links of a ring
//!
//! The ring is opened into a chain terminated by `NIL`, sorted through `next`
//! links only, then closed again with every `prev` link rebuilt. Elements are
//! never moved between slots and nothing is allocated.

use crate::list::{NIL, Ring, SENTINEL};

/// Sorts the elements of the ring in ascending byte order
/// Equal values keep their relative order
pub fn sort(ring: &mut Ring) {
    let (Some(first), Some(last)) = (ring.first(), ring.last()) else {
        return;
    };
    if first == last {
        return;
    }

    ring.set_next(last, NIL);
    let head = merge_sort(ring, first);
    close(ring, head);
}

/// Sorts an open chain and returns its new head
fn merge_sort(ring: &mut Ring, head: usize) -> usize {
    if head == NIL || ring.next(head) == NIL {
        return head;
    }

    let mut slow = head;
    let mut fast = ring.next(head);
    while fast != NIL && ring.next(fast) != NIL {
        slow = ring.next(slow);
        fast = ring.next(ring.next(fast));
    }

    let right = ring.next(slow);
    ring.set_next(slow, NIL);

    let left = merge_sort(ring, head);
    let right = merge_sort(ring, right);
    merge(ring, left, right)
}

/// Merges two ascending open chains and returns the head of the result
/// On ties the left chain goes first
fn merge(ring: &mut Ring, mut left: usize, mut right: usize) -> usize {
    let mut head = NIL;
    let mut tail = NIL;

    while left != NIL && right != NIL {
        let picked = if ring.value(left) <= ring.value(right) {
            let picked = left;
            left = ring.next(left);
            picked
        } else {
            let picked = right;
            right = ring.next(right);
            picked
        };

        if tail == NIL {
            head = picked;
        } else {
            ring.set_next(tail, picked);
        }
        tail = picked;
    }

    // Splice whatever is left, it is already sorted
    let rest = if left != NIL { left } else { right };
    if tail == NIL {
        rest
    } else {
        ring.set_next(tail, rest);
        head
    }
}

/// Closes an open chain back into the ring, rebuilding `prev` links
fn close(ring: &mut Ring, head: usize) {
    let mut prev = SENTINEL;
    let mut cursor = head;
    ring.set_next(SENTINEL, head);

    while cursor != NIL {
        ring.set_prev(cursor, prev);
        prev = cursor;
        cursor = ring.next(cursor);
    }

    ring.set_next(prev, SENTINEL);
    ring.set_prev(SENTINEL, prev);
}
