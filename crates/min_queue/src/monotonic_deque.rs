use std::collections::VecDeque;

use crate::MinQueue;
use crate::MinQueueError;

/// FIFO queue with a side deque of candidate minima, kept non-decreasing
/// from front to back so its front is always the queue minimum.
///
/// `add` evicts strictly greater values from the deque's back before
/// appending; duplicates of the same value all stay. `pop` removes the
/// deque front only when it is equal to the departing FIFO front, so a
/// value that occurs several times survives in the deque until its last
/// live occurrence leaves the queue.
#[derive(Clone, Debug)]
pub struct MonotonicDequeMinQueue<T> {
    fifo: VecDeque<T>,
    minima: VecDeque<T>,
}

impl<T: Ord + Clone> MinQueue for MonotonicDequeMinQueue<T> {
    type Item = T;

    fn new() -> Self {
        Self {
            fifo: VecDeque::new(),
            minima: VecDeque::new(),
        }
    }

    fn len(&self) -> usize {
        self.fifo.len()
    }

    fn add(&mut self, value: T) {
        while self.minima.back().is_some_and(|back| *back > value) {
            self.minima.pop_back();
        }
        self.minima.push_back(value.clone());
        self.fifo.push_back(value);
    }

    fn pop(&mut self) -> Result<T, MinQueueError> {
        let value = self
            .fifo
            .pop_front()
            .ok_or(MinQueueError::EmptyContainer)?;
        if self.minima.front() == Some(&value) {
            self.minima.pop_front();
        }
        Ok(value)
    }

    fn head(&mut self) -> Result<&T, MinQueueError> {
        self.fifo.front().ok_or(MinQueueError::EmptyContainer)
    }

    fn min(&mut self) -> Result<&T, MinQueueError> {
        self.minima.front().ok_or(MinQueueError::EmptyContainer)
    }
}
