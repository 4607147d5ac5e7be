use crate::MinQueue;
use crate::MinQueueError;
use crate::MinStack;

/// FIFO queue simulated by two min-stacks.
///
/// `add` pushes onto `inbox`; pops and reads are served from `outbox`,
/// which is refilled by draining `inbox` whenever it runs dry. Draining
/// reverses the stack order, which is exactly FIFO order for `outbox`.
/// Each element crosses over at most once, so every operation is
/// amortized O(1). The queue minimum is the smaller of the two stack
/// minima.
#[derive(Clone, Debug)]
pub struct TwoStackMinQueue<T> {
    inbox: MinStack<T>,
    outbox: MinStack<T>,
}

impl<T: Ord + Clone> TwoStackMinQueue<T> {
    fn rotate(&mut self) {
        if !self.outbox.is_empty() {
            return;
        }
        while let Ok(value) = self.inbox.pop() {
            self.outbox.push(value);
        }
    }
}

impl<T: Ord + Clone> MinQueue for TwoStackMinQueue<T> {
    type Item = T;

    fn new() -> Self {
        Self {
            inbox: MinStack::new(),
            outbox: MinStack::new(),
        }
    }

    fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    fn add(&mut self, value: T) {
        self.inbox.push(value);
    }

    fn pop(&mut self) -> Result<T, MinQueueError> {
        self.rotate();
        self.outbox.pop()
    }

    fn head(&mut self) -> Result<&T, MinQueueError> {
        self.rotate();
        self.outbox.top()
    }

    fn min(&mut self) -> Result<&T, MinQueueError> {
        self.rotate();
        let out_min = self.outbox.min()?;
        match self.inbox.min() {
            Ok(in_min) if in_min < out_min => Ok(in_min),
            _ => Ok(out_min),
        }
    }
}
