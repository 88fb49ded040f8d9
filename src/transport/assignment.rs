use super::coupling::Coupling;
use super::measure::Measure;
use crate::Energy;
use crate::Error;
use crate::Result;
use ndarray::Array2;
use ndarray::ArrayView2;

/// Exact optimal transport between two equally-sized uniform point clouds.
///
/// With unit mass on every row, an optimal coupling is a permutation
/// (Birkhoff–von Neumann), so the transport problem reduces to the
/// linear assignment problem over the ground-distance matrix.
///
/// # Algorithm
///
/// Kuhn–Munkres with row and column potentials: each source row is
/// inserted by a Dijkstra-like search for the cheapest augmenting path
/// in the reduced costs, after which potentials are shifted to keep all
/// reduced costs nonnegative.
///
/// # Determinism
///
/// Ties in the path search resolve to the lowest column index,
/// so a fixed ground matrix always yields the same permutation.
///
/// # Complexity
///
/// O(r³) in the number of rows.
#[derive(Debug, Clone)]
pub struct Assignment {
    ground: Array2<Energy>,
    matched: Vec<usize>,
}

impl Assignment {
    /// number of rows on either side
    pub fn size(&self) -> usize {
        self.ground.nrows()
    }
    /// target row matched to each source row, in source order
    pub fn permutation(&self) -> &[usize] {
        &self.matched
    }

    fn solve(&self) -> Vec<usize> {
        let n = self.size();
        let inf = Energy::INFINITY;
        // 1-indexed; column 0 is the virtual root of each augmenting search
        let mut u = vec![0.; n + 1];
        let mut v = vec![0.; n + 1];
        let mut p = vec![0usize; n + 1];
        let mut way = vec![0usize; n + 1];
        for i in 1..=n {
            p[0] = i;
            let mut j0 = 0;
            let mut slack = vec![inf; n + 1];
            let mut used = vec![false; n + 1];
            loop {
                used[j0] = true;
                let i0 = p[j0];
                let mut delta = inf;
                let mut j1 = 0;
                for j in 1..=n {
                    if !used[j] {
                        let reduced = self.ground[[i0 - 1, j - 1]] - u[i0] - v[j];
                        if reduced < slack[j] {
                            slack[j] = reduced;
                            way[j] = j0;
                        }
                        if slack[j] < delta {
                            delta = slack[j];
                            j1 = j;
                        }
                    }
                }
                for j in 0..=n {
                    if used[j] {
                        u[p[j]] += delta;
                        v[j] -= delta;
                    } else {
                        slack[j] -= delta;
                    }
                }
                j0 = j1;
                if p[j0] == 0 {
                    break;
                }
            }
            loop {
                let j1 = way[j0];
                p[j0] = p[j1];
                j0 = j1;
                if j0 == 0 {
                    break;
                }
            }
        }
        let mut matched = vec![0; n];
        for j in 1..=n {
            matched[p[j] - 1] = j - 1;
        }
        matched
    }
}

impl Coupling for Assignment {
    fn minimize(mut self) -> Self {
        self.matched = self.solve();
        self
    }
    fn flow(&self, x: usize, y: usize) -> Energy {
        match self.matched.get(x) {
            Some(&matched) if matched == y => 1.,
            _ => 0.,
        }
    }
    /// summed over the original ground distances rather than the dual
    /// potentials, so identical samples cost exactly zero.
    fn cost(&self) -> Energy {
        self.matched
            .iter()
            .enumerate()
            .map(|(x, &y)| self.ground[[x, y]])
            .sum::<Energy>()
    }
}

impl TryFrom<Array2<Energy>> for Assignment {
    type Error = Error;
    fn try_from(ground: Array2<Energy>) -> Result<Self> {
        if ground.nrows() != ground.ncols() {
            return Err(Error::InvalidInputShape(format!(
                "assignment requires a square ground matrix, got {}x{}",
                ground.nrows(),
                ground.ncols()
            )));
        }
        if ground.iter().any(|d| !d.is_finite()) {
            return Err(Error::InvalidInputShape(
                "ground distances must be finite".to_string(),
            ));
        }
        let matched = (0..ground.nrows()).collect();
        Ok(Self { ground, matched })
    }
}

impl<'a, 'b, 'm, M: Measure> TryFrom<(ArrayView2<'a, Energy>, ArrayView2<'b, Energy>, &'m M)>
    for Assignment
{
    type Error = Error;
    fn try_from(
        (a, b, measure): (ArrayView2<'a, Energy>, ArrayView2<'b, Energy>, &'m M),
    ) -> Result<Self> {
        let ground = Array2::from_shape_fn((a.nrows(), b.nrows()), |(x, y)| {
            measure.distance(a.row(x), b.row(y))
        });
        Self::try_from(ground)
    }
}
