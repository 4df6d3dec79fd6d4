#![allow(dead_code)]

use strq::Queue;

/// Builds a queue by inserting every value at the tail
pub fn queue_of(values: &[&str]) -> Queue {
    let mut queue = Queue::new().unwrap();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

/// Collects the values of a queue from head to tail
pub fn values(queue: &Queue) -> Vec<String> {
    queue.iter().map(str::to_string).collect()
}
