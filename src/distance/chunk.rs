use super::pair::Pair;
use crate::Energy;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Range;

/// Half-open range `[k1, k2)` of linear pair indices.
///
/// The unit of work handed to an executor. Chunks from one
/// [`Partition`](super::Partition) never overlap, so results can be
/// placed independently of completion order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chunk {
    k1: usize,
    k2: usize,
}

impl Chunk {
    pub fn new(k1: usize, k2: usize) -> Self {
        debug_assert!(k1 <= k2, "inverted chunk [{}, {})", k1, k2);
        Self { k1, k2 }
    }
    pub fn k1(&self) -> usize {
        self.k1
    }
    pub fn k2(&self) -> usize {
        self.k2
    }
    pub fn len(&self) -> usize {
        self.k2 - self.k1
    }
    pub fn is_empty(&self) -> bool {
        self.k1 == self.k2
    }
    pub fn range(&self) -> Range<usize> {
        self.k1..self.k2
    }
    /// pairs covered by this chunk in an `n x n` grid, in linear order
    pub fn pairs(self, n: usize) -> impl Iterator<Item = Pair> {
        let first = (!self.is_empty()).then(|| Pair::from_linear(self.k1, n));
        std::iter::successors(first, move |pair| Some(pair.next(n))).take(self.len())
    }
}

impl Display for Chunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.k1, self.k2)
    }
}

/// Distances computed for one [`Chunk`], aligned with `k1..k2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    chunk: Chunk,
    values: Vec<Energy>,
}

impl Block {
    pub fn chunk(&self) -> Chunk {
        self.chunk
    }
    pub fn values(&self) -> &[Energy] {
        &self.values
    }
}

impl From<(Chunk, Vec<Energy>)> for Block {
    fn from((chunk, values): (Chunk, Vec<Energy>)) -> Self {
        Self { chunk, values }
    }
}
