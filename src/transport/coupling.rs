use crate::Energy;

/// A transport plan between the rows of two samples.
///
/// `flow(x, y)` is the mass moved from source row `x` to target row `y`,
/// `cost()` integrates ground distance against that flow.
/// implementors are expected to be built in an unsolved state and
/// only report meaningful flows after `minimize()`.
pub trait Coupling {
    fn minimize(self) -> Self;
    fn flow(&self, x: usize, y: usize) -> Energy;
    fn cost(&self) -> Energy;
}
