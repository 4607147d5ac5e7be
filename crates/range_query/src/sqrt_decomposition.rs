use std::ops::{Add, Sub};

use crate::RangeQueryError;

/// Block decomposition of a sequence into roughly sqrt(n) summed chunks.
///
/// `raw` holds the live values; `blocks[b]` always equals the sum of the
/// block's slice of `raw`. Point operations touch one value and one block
/// aggregate (O(1)); range queries scan the two partial boundary blocks
/// element by element and take whole interior blocks from their
/// aggregates (O(sqrt n)).
#[derive(Clone, Debug)]
pub struct SqrtDecomposition<T> {
    raw: Vec<T>,
    blocks: Vec<T>,
    block_size: usize,
}

impl<T: Copy + Default + Add<Output = T> + Sub<Output = T>> SqrtDecomposition<T> {
    /// All-identity sequence of length `n`.
    pub fn new(n: usize) -> Self {
        let block_size = n.isqrt().max(1);
        Self {
            raw: vec![T::default(); n],
            blocks: vec![T::default(); n.div_ceil(block_size)],
            block_size,
        }
    }

    pub fn from_values(values: &[T]) -> Self {
        let mut this = Self::new(values.len());
        this.raw.copy_from_slice(values);
        for (i, &value) in values.iter().enumerate() {
            let b = i / this.block_size;
            this.blocks[b] = this.blocks[b] + value;
        }
        this
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Add `delta` to the value at 0-indexed `index`, O(1).
    pub fn add(&mut self, index: usize, delta: T) -> Result<(), RangeQueryError> {
        if index >= self.raw.len() {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        self.raw[index] = self.raw[index] + delta;
        let b = index / self.block_size;
        self.blocks[b] = self.blocks[b] + delta;
        Ok(())
    }

    /// Overwrite the value at `index`, applying the difference like `add`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), RangeQueryError> {
        if index >= self.raw.len() {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        let delta = value - self.raw[index];
        self.add(index, delta)
    }

    /// Inclusive range sum over `[l, r]`, 0-indexed.
    ///
    /// Unlike `SegmentTree::query`, an inverted or out-of-bounds range is
    /// rejected rather than clamped.
    pub fn query(&self, l: usize, r: usize) -> Result<T, RangeQueryError> {
        if l > r || r >= self.raw.len() {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        let lb = l / self.block_size;
        let rb = r / self.block_size;
        let mut acc = T::default();
        if lb == rb {
            for &value in &self.raw[l..=r] {
                acc = acc + value;
            }
            return Ok(acc);
        }
        for &value in &self.raw[l..(lb + 1) * self.block_size] {
            acc = acc + value;
        }
        for &block in &self.blocks[lb + 1..rb] {
            acc = acc + block;
        }
        for &value in &self.raw[rb * self.block_size..=r] {
            acc = acc + value;
        }
        Ok(acc)
    }
}
