/// Settings applied when a queue is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Number of element slots reserved up front
    /// Not a bound, the queue grows past it
    pub capacity: usize,

    /// Scan the queue for ascending order before `delete_dup`
    /// An unsorted queue is reported, never re-sorted
    pub verify_sorted: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            capacity: 0,
            verify_sorted: cfg!(debug_assertions),
        }
    }
}

impl QueueConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_verify_sorted(mut self, verify_sorted: bool) -> Self {
        self.verify_sorted = verify_sorted;
        self
    }
}
