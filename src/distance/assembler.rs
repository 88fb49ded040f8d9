use super::chunk::Block;
use super::chunk::Chunk;
use super::pair::Pair;
use crate::Energy;
use crate::Error;
use crate::Result;
use ndarray::Array2;

/// Collects chunk results into a flat upper-triangle buffer and, once
/// every index has reported, expands it into a dense symmetric matrix.
///
/// Blocks may arrive in any order. Each linear index must be written by
/// exactly one block; a second write, a block reaching past the triangle,
/// or a block whose length disagrees with its chunk is a worker failure.
pub struct Assembler {
    n: usize,
    values: Vec<Energy>,
    written: Vec<bool>,
    filled: usize,
}

impl Assembler {
    pub fn new(n: usize) -> Self {
        let kmax = Pair::count(n);
        Self {
            n,
            values: vec![0.; kmax],
            written: vec![false; kmax],
            filled: 0,
        }
    }
    pub fn kmax(&self) -> usize {
        self.values.len()
    }
    pub fn is_complete(&self) -> bool {
        self.filled == self.kmax()
    }

    /// scatter one block into the flat buffer
    pub fn absorb(&mut self, block: Block) -> Result<()> {
        let chunk = block.chunk();
        let failure = |cause: String| Error::WorkerFailure { chunk, cause };
        if chunk.k2() > self.kmax() {
            return Err(failure(format!("chunk exceeds triangle of {} pairs", self.kmax())));
        }
        if block.values().len() != chunk.len() {
            return Err(failure(format!(
                "returned {} values for {} pairs",
                block.values().len(),
                chunk.len()
            )));
        }
        if let Some(k) = chunk.range().find(|&k| self.written[k]) {
            return Err(failure(format!("pair index {} written twice", k)));
        }
        self.values[chunk.range()].copy_from_slice(block.values());
        self.written[chunk.range()].fill(true);
        self.filled += chunk.len();
        Ok(())
    }

    /// the first run of indices nobody has reported yet
    fn gap(&self) -> Option<Chunk> {
        let k1 = self.written.iter().position(|&w| !w)?;
        let k2 = self.written[k1..]
            .iter()
            .position(|&w| w)
            .map_or(self.kmax(), |len| k1 + len);
        Some(Chunk::new(k1, k2))
    }

    /// Scatter into the upper triangle, then mirror into the strict lower triangle.
    /// Refuses to build anything while indices are still missing.
    pub fn finish(self) -> Result<Array2<Energy>> {
        if let Some(chunk) = self.gap() {
            return Err(Error::WorkerFailure {
                chunk,
                cause: "chunk never reported".to_string(),
            });
        }
        let n = self.n;
        let mut matrix = Array2::<Energy>::zeros((n, n));
        let mut pair = Pair::new(0, 0);
        for &value in self.values.iter() {
            matrix[[pair.i(), pair.j()]] = value;
            pair = pair.next(n);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                matrix[[j, i]] = matrix[[i, j]];
            }
        }
        log::debug!("{:<32}{:<32}", "assembled distance matrix", format!("{}x{}", n, n));
        Ok(matrix)
    }
}
