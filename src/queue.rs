// Work queues of the cascade
//
// Each queue owns its fragments outright; moving a fragment in or out of a
// queue is the only way ownership changes hands between cascade stages.

use crate::fragment::Fragment;
use std::collections::VecDeque;

/// FIFO queue of fragments waiting for a cascade stage.
#[derive(Debug, Default)]
pub struct FragmentQueue {
    queue: VecDeque<Fragment>,
}

impl FragmentQueue {
    pub fn new() -> Self {
        FragmentQueue {
            queue: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FragmentQueue {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.queue.push_back(fragment);
    }

    /// Take the oldest fragment, or `None` when the stage is drained.
    pub fn pop(&mut self) -> Option<Fragment> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Drop every queued fragment, returning how many were released.
    pub fn release(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        count
    }
}

impl Extend<Fragment> for FragmentQueue {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
