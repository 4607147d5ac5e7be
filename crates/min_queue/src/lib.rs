mod min_stack;
mod monotonic_deque;
mod two_stack;

use thiserror::Error;

pub use min_stack::MinStack;
pub use monotonic_deque::MonotonicDequeMinQueue;
pub use two_stack::TwoStackMinQueue;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MinQueueError {
    #[error("operation on an empty container")]
    EmptyContainer,
}

/// FIFO queue with an O(1) amortized running-minimum query.
///
/// - `add` always succeeds; `pop`/`head`/`min` fail with `EmptyContainer`
///   when no elements are present.
/// - `head` and `min` take `&mut self`: implementations may reorganize
///   internal state on read, as the two-stack variant does.
/// - A failed call leaves the queue unchanged.
pub trait MinQueue: Sized {
    type Item: Ord;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add(&mut self, value: Self::Item);

    fn pop(&mut self) -> Result<Self::Item, MinQueueError>;

    fn head(&mut self) -> Result<&Self::Item, MinQueueError>;

    fn min(&mut self) -> Result<&Self::Item, MinQueueError>;
}
