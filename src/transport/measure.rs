use crate::Energy;
use ndarray::ArrayView1;
use serde::Deserialize;
use serde::Serialize;

/// generalization of *element-wise* distance between
/// two mass points living in the same feature space.
///
/// the transport cost between two samples is built from this
/// measure evaluated over every (row, row) combination.
pub trait Measure {
    fn distance(&self, x: ArrayView1<Energy>, y: ArrayView1<Energy>) -> Energy;
}

/// Ground distances available to the transport solver.
///
/// Every variant is nonnegative and vanishes on identical rows,
/// so the resulting transport cost is too.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ground {
    #[default]
    Euclidean,
    SqEuclidean,
    Cityblock,
}

impl Measure for Ground {
    fn distance(&self, x: ArrayView1<Energy>, y: ArrayView1<Energy>) -> Energy {
        let deltas = x.iter().zip(y.iter()).map(|(a, b)| a - b);
        match self {
            Self::Euclidean => deltas.map(|d| d * d).sum::<Energy>().sqrt(),
            Self::SqEuclidean => deltas.map(|d| d * d).sum::<Energy>(),
            Self::Cityblock => deltas.map(|d| d.abs()).sum::<Energy>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn euclidean_is_pythagorean() {
        let x = array![0., 0.];
        let y = array![3., 4.];
        assert_eq!(Ground::Euclidean.distance(x.view(), y.view()), 5.);
        assert_eq!(Ground::SqEuclidean.distance(x.view(), y.view()), 25.);
        assert_eq!(Ground::Cityblock.distance(x.view(), y.view()), 7.);
    }
    #[test]
    fn ground_is_self_annihilating() {
        let x = array![0.25, -1.5, 7.];
        for ground in [Ground::Euclidean, Ground::SqEuclidean, Ground::Cityblock] {
            assert_eq!(ground.distance(x.view(), x.view()), 0.);
        }
    }
    #[test]
    fn ground_is_symmetric() {
        let x = array![0.1, 0.2, 0.3];
        let y = array![-0.4, 0.9, 0.0];
        for ground in [Ground::Euclidean, Ground::SqEuclidean, Ground::Cityblock] {
            assert_eq!(
                ground.distance(x.view(), y.view()),
                ground.distance(y.view(), x.view())
            );
        }
    }
}
