mod fenwick;
mod segment_tree;
mod sqrt_decomposition;

use thiserror::Error;

pub use fenwick::FenwickTree;
pub use segment_tree::{SegmentTree, SumSegmentTree};
pub use sqrt_decomposition::SqrtDecomposition;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RangeQueryError {
    #[error("index out of range")]
    IndexOutOfRange,
}
