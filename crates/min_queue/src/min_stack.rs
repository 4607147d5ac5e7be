use crate::MinQueueError;

/// Stack where every entry carries the minimum of itself and everything
/// below it, so `min` reads the top entry in O(1).
#[derive(Clone, Debug)]
pub struct MinStack<T> {
    entries: Vec<(T, T)>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, value: T) {
        let min = match self.entries.last() {
            Some((_, below)) if *below < value => below.clone(),
            _ => value.clone(),
        };
        self.entries.push((value, min));
    }

    pub fn pop(&mut self) -> Result<T, MinQueueError> {
        match self.entries.pop() {
            Some((value, _)) => Ok(value),
            None => Err(MinQueueError::EmptyContainer),
        }
    }

    /// Most recently pushed value.
    pub fn top(&self) -> Result<&T, MinQueueError> {
        match self.entries.last() {
            Some((value, _)) => Ok(value),
            None => Err(MinQueueError::EmptyContainer),
        }
    }

    /// Minimum of all currently held values.
    pub fn min(&self) -> Result<&T, MinQueueError> {
        match self.entries.last() {
            Some((_, min)) => Ok(min),
            None => Err(MinQueueError::EmptyContainer),
        }
    }
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
