use std::ops::{Add, Sub};

use crate::RangeQueryError;

#[inline(always)]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// 1-indexed binary indexed tree over an additive group.
///
/// `tree[i]` holds the sum of the `lowbit(i)`-long run of values ending at
/// `i`. Prefix sums walk the `i -= lowbit(i)` chain, point updates the
/// `i += lowbit(i)` chain, both O(log n). `T::default()` is the additive
/// identity.
#[derive(Clone, Debug)]
pub struct FenwickTree<T> {
    // tree[0] is unused padding so indices match the 1-based convention.
    tree: Vec<T>,
}

impl<T: Copy + Default + Add<Output = T> + Sub<Output = T>> FenwickTree<T> {
    /// All-identity tree of logical length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            tree: vec![T::default(); n + 1],
        }
    }

    /// O(n) build: each node pushes its partial sum to its lowbit parent
    /// exactly once, instead of n separate O(log n) `add` calls.
    pub fn from_values(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = vec![T::default(); n + 1];
        tree[1..].copy_from_slice(values);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] = tree[parent] + tree[i];
            }
        }
        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `delta` to the value at 1-indexed `index`.
    pub fn add(&mut self, index: usize, delta: T) -> Result<(), RangeQueryError> {
        let n = self.len();
        if index == 0 || index > n {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        let mut i = index;
        while i <= n {
            self.tree[i] = self.tree[i] + delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// Prefix sum over `[1, index]`; `index == 0` is the empty prefix and
    /// yields the identity.
    pub fn query(&self, index: usize) -> Result<T, RangeQueryError> {
        if index > self.len() {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        let mut acc = T::default();
        let mut i = index;
        while i > 0 {
            acc = acc + self.tree[i];
            i -= lowbit(i);
        }
        Ok(acc)
    }

    /// Inclusive range sum over `[l, r]`, both 1-indexed.
    pub fn query_range(&self, l: usize, r: usize) -> Result<T, RangeQueryError> {
        if l == 0 || l > r || r > self.len() {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        Ok(self.query(r)? - self.query(l - 1)?)
    }

    /// Live value at `index`, recovered as the difference of two prefix
    /// sums.
    pub fn get(&self, index: usize) -> Result<T, RangeQueryError> {
        if index == 0 || index > self.len() {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        Ok(self.query(index)? - self.query(index - 1)?)
    }
}
