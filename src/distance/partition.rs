use super::chunk::Chunk;
use super::pair::Pair;
use crate::CHUNK_COUNT;
use serde::Deserialize;
use serde::Serialize;

/// How finely the upper triangle is cut into chunks.
///
/// Granularity only changes scheduling; every policy covers the same
/// linear indices and therefore produces the same matrix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// `max(1, n² / CHUNK_COUNT)` pairs per chunk, ≈ CHUNK_COUNT chunks for any n
    #[default]
    Default,
    /// roughly this many chunks of equal size
    Chunks(usize),
    /// exactly this many pairs per chunk (the last one may be shorter)
    Size(usize),
}

impl Granularity {
    /// pairs per chunk for an `n x n` matrix, never zero
    pub fn size(&self, n: usize) -> usize {
        match *self {
            Self::Default => (n * n / CHUNK_COUNT).max(1),
            Self::Chunks(count) => Pair::count(n).div_ceil(count.max(1)).max(1),
            Self::Size(size) => size.max(1),
        }
    }
}

/// Lazy sequence of chunk boundaries covering `[0, n(n+1)/2)`.
///
/// Chunks are strictly increasing, contiguous, and non-overlapping; the
/// final chunk is truncated to the end of the triangle. Cloning a
/// partition restarts it from wherever the clone was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    next: usize,
    size: usize,
    kmax: usize,
}

impl Partition {
    pub fn new(n: usize, granularity: Granularity) -> Self {
        Self {
            next: 0,
            size: granularity.size(n),
            kmax: Pair::count(n),
        }
    }
    /// pairs per chunk
    pub fn size(&self) -> usize {
        self.size
    }
    /// total number of linear pair indices covered
    pub fn kmax(&self) -> usize {
        self.kmax
    }
}

impl Iterator for Partition {
    type Item = Chunk;
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.kmax {
            None
        } else {
            let k1 = self.next;
            let k2 = usize::min(k1 + self.size, self.kmax);
            self.next = k2;
            Some(Chunk::new(k1, k2))
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.kmax - self.next.min(self.kmax)).div_ceil(self.size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Partition {}

impl std::iter::FusedIterator for Partition {}
