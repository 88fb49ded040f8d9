use super::assignment::Assignment;
use super::coupling::Coupling;
use super::measure::Measure;
use crate::Energy;
use crate::Error;
use crate::Result;
use ndarray::ArrayView2;

/// Earth Mover's Distance between two samples of unit-mass rows.
///
/// Shapes are checked before any ground distance is evaluated:
/// both samples must share the feature dimension, and the one-to-one
/// matching requires equal row counts.
pub fn emd<M: Measure>(a: ArrayView2<Energy>, b: ArrayView2<Energy>, measure: &M) -> Result<Energy> {
    if a.ncols() != b.ncols() {
        return Err(Error::InvalidInputShape(format!(
            "feature dimensions differ: {} vs {}",
            a.ncols(),
            b.ncols()
        )));
    }
    if a.nrows() != b.nrows() {
        return Err(Error::InvalidInputShape(format!(
            "row counts differ: {} vs {}",
            a.nrows(),
            b.nrows()
        )));
    }
    Ok(Assignment::try_from((a, b, measure))?.minimize().cost())
}
