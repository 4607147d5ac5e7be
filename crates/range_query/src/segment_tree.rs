use std::ops::Add;

use crate::RangeQueryError;

/// Point-update range-query tree over a caller-supplied associative merge.
///
/// Stored as a flat array of size `2 * base`, `base` being the smallest
/// power of two >= n: leaves occupy `[base, base + n)` with identity
/// padding after them, and node `i` equals `merge(node[2i], node[2i+1])`
/// at all times between calls.
///
/// `merge` must be associative and `identity` must be neutral on both
/// sides; neither is checked. Commutativity is not required: queries fold
/// boundary nodes into separate left and right accumulators, so the result
/// respects left-to-right sequence order.
#[derive(Clone)]
pub struct SegmentTree<T, F> {
    tree: Vec<T>,
    base: usize,
    len: usize,
    merge: F,
    identity: T,
}

/// Sum-merge tree; the merge slot is a plain function pointer.
pub type SumSegmentTree<T> = SegmentTree<T, fn(&T, &T) -> T>;

impl<T: Clone, F: Fn(&T, &T) -> T> SegmentTree<T, F> {
    pub fn new(values: &[T], merge: F, identity: T) -> Self {
        let len = values.len();
        let base = len.next_power_of_two();
        let mut tree = vec![identity.clone(); 2 * base];
        tree[base..base + len].clone_from_slice(values);
        for i in (1..base).rev() {
            tree[i] = merge(&tree[2 * i], &tree[2 * i + 1]);
        }
        Self {
            tree,
            base,
            len,
            merge,
            identity,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Overwrite the leaf at 0-indexed `index` and recompute its ancestor
    /// chain, O(log n).
    pub fn set(&mut self, index: usize, value: T) -> Result<(), RangeQueryError> {
        self.update(index, |_| value)
    }

    /// Apply `f` to the live leaf value and recompute its ancestor chain.
    pub fn update(
        &mut self,
        index: usize,
        f: impl FnOnce(&T) -> T,
    ) -> Result<(), RangeQueryError> {
        if index >= self.len {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        let mut i = self.base + index;
        self.tree[i] = f(&self.tree[i]);
        while i > 1 {
            i >>= 1;
            self.tree[i] = (self.merge)(&self.tree[2 * i], &self.tree[2 * i + 1]);
        }
        Ok(())
    }

    /// Merge over the inclusive 0-indexed range `[l, r]`.
    ///
    /// An inverted range (`l > r`) is empty and yields the identity; bounds
    /// past the end are clamped to the live leaves. Iterative bottom-up
    /// walk from both boundary leaves, O(log n).
    pub fn query(&self, l: usize, r: usize) -> T {
        if l > r || l >= self.len {
            return self.identity.clone();
        }
        let r = r.min(self.len - 1);
        let mut il = self.base + l;
        let mut ir = self.base + r + 1;
        let mut res_left = self.identity.clone();
        let mut res_right = self.identity.clone();
        while il < ir {
            if il & 1 == 1 {
                res_left = (self.merge)(&res_left, &self.tree[il]);
                il += 1;
            }
            if ir & 1 == 1 {
                ir -= 1;
                res_right = (self.merge)(&self.tree[ir], &res_right);
            }
            il >>= 1;
            ir >>= 1;
        }
        (self.merge)(&res_left, &res_right)
    }

    /// Live leaf value at `index`.
    pub fn get(&self, index: usize) -> Result<&T, RangeQueryError> {
        if index >= self.len {
            return Err(RangeQueryError::IndexOutOfRange);
        }
        Ok(&self.tree[self.base + index])
    }
}

impl<T: Copy + Add<Output = T>, F: Fn(&T, &T) -> T> SegmentTree<T, F> {
    /// `update` specialized to `old + delta`.
    pub fn add(&mut self, index: usize, delta: T) -> Result<(), RangeQueryError> {
        self.update(index, |old| *old + delta)
    }
}

impl<T: Copy + Default + Add<Output = T>> SumSegmentTree<T> {
    /// Numeric-sum tree: merge is `+`, identity is `T::default()`.
    pub fn sum(values: &[T]) -> Self {
        let merge: fn(&T, &T) -> T = |a, b| *a + *b;
        SegmentTree::new(values, merge, T::default())
    }
}
