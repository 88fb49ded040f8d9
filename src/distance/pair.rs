/// Coordinates `(i, j)` with `i <= j` of one cell in the upper triangle
/// of an `n x n` matrix, diagonal included.
///
/// Cells are enumerated row-major: `(0,0), (0,1), .., (0,n-1), (1,1), ..`.
/// [`Pair::linear`] and [`Pair::from_linear`] are mutually inverse over
/// `0 <= k < Pair::count(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    i: usize,
    j: usize,
}

impl Pair {
    /// unordered pair, normalized so that `i <= j`
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            i: a.min(b),
            j: a.max(b),
        }
    }
    pub fn i(&self) -> usize {
        self.i
    }
    pub fn j(&self) -> usize {
        self.j
    }
    pub fn is_diagonal(&self) -> bool {
        self.i == self.j
    }
    /// number of cells in the upper triangle of an `n x n` grid
    pub const fn count(n: usize) -> usize {
        n * (n + 1) / 2
    }
    /// linear index of the first cell in row `i`
    const fn offset(i: usize, n: usize) -> usize {
        i * n - i * i.saturating_sub(1) / 2
    }
    /// linear index of this cell
    pub fn linear(&self, n: usize) -> usize {
        debug_assert!(self.j < n, "pair {:?} outside {}x{}", self, n, n);
        Self::offset(self.i, n) + (self.j - self.i)
    }
    /// cell at linear index `k`.
    /// float root of the row quadratic gives a first guess,
    /// integer stepping makes it exact.
    pub fn from_linear(k: usize, n: usize) -> Self {
        debug_assert!(k < Self::count(n), "index {} outside triangle of {}", k, n);
        let b = (2 * n + 1) as f64;
        let guess = (b - (b * b - 8. * k as f64).max(0.).sqrt()) / 2.;
        let mut i = (guess.max(0.) as usize).min(n.saturating_sub(1));
        while i > 0 && Self::offset(i, n) > k {
            i -= 1;
        }
        while i + 1 < n && Self::offset(i + 1, n) <= k {
            i += 1;
        }
        Self {
            i,
            j: i + (k - Self::offset(i, n)),
        }
    }
    /// next cell in row-major order.
    /// past the final cell this yields `(n, n)`, which is outside the grid.
    pub fn next(&self, n: usize) -> Self {
        if self.j + 1 < n {
            Self {
                i: self.i,
                j: self.j + 1,
            }
        } else {
            Self {
                i: self.i + 1,
                j: self.i + 1,
            }
        }
    }
}

impl From<(usize, usize)> for Pair {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        (pair.i, pair.j)
    }
}
