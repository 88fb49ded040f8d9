use crate::Energy;
use crate::Error;
use crate::Result;
use ndarray::ArrayD;
use ndarray::ArrayView2;
use ndarray::ArrayView3;
use ndarray::ArrayViewD;
use ndarray::Axis;
use ndarray::Ix3;

/// Read-only view of `n` samples, each a `(rows, features)` array.
///
/// Only two tensor ranks are accepted:
/// - `(n, features)`: every sample is a single row (1-D sample)
/// - `(n, rows, features)`: every sample is a 2-D array
///
/// Anything else is rejected before any distance is computed.
/// The view borrows the caller's tensor and is freely shared across workers.
#[derive(Debug, Clone, Copy)]
pub struct Samples<'a> {
    data: ArrayView3<'a, Energy>,
}

impl<'a> Samples<'a> {
    /// number of samples
    pub fn n(&self) -> usize {
        self.data.len_of(Axis(0))
    }
    /// rows (mass points) per sample
    pub fn rows(&self) -> usize {
        self.data.len_of(Axis(1))
    }
    /// feature dimension of every row
    pub fn features(&self) -> usize {
        self.data.len_of(Axis(2))
    }
    pub fn sample(&self, i: usize) -> ArrayView2<'a, Energy> {
        self.data.index_axis_move(Axis(0), i)
    }
}

impl<'a> From<ArrayView3<'a, Energy>> for Samples<'a> {
    fn from(data: ArrayView3<'a, Energy>) -> Self {
        Self { data }
    }
}

impl<'a> From<ArrayView2<'a, Energy>> for Samples<'a> {
    fn from(data: ArrayView2<'a, Energy>) -> Self {
        Self {
            data: data.insert_axis(Axis(1)),
        }
    }
}

impl<'a> TryFrom<ArrayViewD<'a, Energy>> for Samples<'a> {
    type Error = Error;
    fn try_from(data: ArrayViewD<'a, Energy>) -> Result<Self> {
        let shape = data.shape().to_vec();
        let data = match data.ndim() {
            2 => data.insert_axis(Axis(1)).into_dimensionality::<Ix3>(),
            3 => data.into_dimensionality::<Ix3>(),
            _ => {
                return Err(Error::InvalidInputShape(format!(
                    "distance matrix accepts 1-D or 2-D samples only, got tensor of shape {:?}",
                    shape
                )));
            }
        };
        data.map(Self::from)
            .map_err(|e| Error::InvalidInputShape(format!("{} for shape {:?}", e, shape)))
    }
}

impl<'a> TryFrom<&'a ArrayD<Energy>> for Samples<'a> {
    type Error = Error;
    fn try_from(data: &'a ArrayD<Energy>) -> Result<Self> {
        Self::try_from(data.view())
    }
}
