//! Queue operations over a possibly absent handle
//!
//! Every function accepts `None` in place of a queue and answers with the
//! safe result (`false`, `None` or `0`) instead of failing. Errors from the
//! queue are folded into the same results.

use crate::element::Element;
use crate::error::QueueError;
use crate::queue::Queue;

fn absent(op: &'static str) {
    tracing::debug!(op, error = %QueueError::InvalidHandle, "queue operation skipped");
}

fn report(op: &'static str, result: Result<(), QueueError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(op, error = %err, "queue operation failed");
            false
        }
    }
}

/// Creates an empty queue, or `None` if it could not be allocated
pub fn new() -> Option<Queue> {
    Queue::new().ok()
}

/// Releases every element and the queue
pub fn free(queue: Option<Queue>) {
    match queue {
        Some(queue) => queue.free(),
        None => absent("free"),
    }
}

pub fn insert_head(queue: Option<&mut Queue>, value: &str) -> bool {
    match queue {
        Some(queue) => report("insert_head", queue.insert_head(value)),
        None => {
            absent("insert_head");
            false
        }
    }
}

pub fn insert_tail(queue: Option<&mut Queue>, value: &str) -> bool {
    match queue {
        Some(queue) => report("insert_tail", queue.insert_tail(value)),
        None => {
            absent("insert_tail");
            false
        }
    }
}

/// Removes the head element, copying its value into `buf` when given
pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    let Some(queue) = queue else {
        absent("remove_head");
        return None;
    };
    queue.remove_head(buf)
}

/// Removes the tail element, copying its value into `buf` when given
pub fn remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    let Some(queue) = queue else {
        absent("remove_tail");
        return None;
    };
    queue.remove_tail(buf)
}

/// Releases an element obtained by removal
pub fn release_element(element: Element) {
    element.release();
}

pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

pub fn delete_mid(queue: Option<&mut Queue>) -> bool {
    match queue {
        Some(queue) => report("delete_mid", queue.delete_mid()),
        None => {
            absent("delete_mid");
            false
        }
    }
}

/// Only fails when the queue is absent
pub fn delete_dup(queue: Option<&mut Queue>) -> bool {
    match queue {
        Some(queue) => {
            queue.delete_dup();
            true
        }
        None => {
            absent("delete_dup");
            false
        }
    }
}

pub fn swap(queue: Option<&mut Queue>) {
    match queue {
        Some(queue) => queue.swap(),
        None => absent("swap"),
    }
}

pub fn reverse(queue: Option<&mut Queue>) {
    match queue {
        Some(queue) => queue.reverse(),
        None => absent("reverse"),
    }
}

pub fn sort(queue: Option<&mut Queue>) {
    match queue {
        Some(queue) => queue.sort(),
        None => absent("sort"),
    }
}
