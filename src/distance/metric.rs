use crate::Energy;
use crate::Error;
use crate::Result;
use crate::transport::Ground;
use crate::transport::emd;
use ndarray::ArrayView2;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// Sample-to-sample cost evaluated for every pair in a chunk.
///
/// Implementors must be stateless with respect to the pairs they are
/// asked about: the same inputs give the same bits on any thread.
pub trait Pairwise: Sync {
    fn cost(&self, x: ArrayView2<Energy>, y: ArrayView2<Energy>) -> Result<Energy>;
}

/// Built-in distance metrics, selected by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    /// exact Earth Mover's Distance over unit-mass rows
    #[default]
    Emd,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emd => "emd",
        }
    }
}

impl FromStr for Metric {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "emd" => Ok(Self::Emd),
            _ => Err(Error::UnsupportedMetric(s.to_string())),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.name().to_string()
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A metric bound to the ground measure it integrates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    metric: Metric,
    ground: Ground,
}

impl Kernel {
    pub fn metric(&self) -> Metric {
        self.metric
    }
    pub fn ground(&self) -> Ground {
        self.ground
    }
}

impl From<(Metric, Ground)> for Kernel {
    fn from((metric, ground): (Metric, Ground)) -> Self {
        Self { metric, ground }
    }
}

impl Pairwise for Kernel {
    fn cost(&self, x: ArrayView2<Energy>, y: ArrayView2<Energy>) -> Result<Energy> {
        match self.metric {
            Metric::Emd => emd(x, y, &self.ground),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn parses_emd_loosely() {
        assert_eq!("emd".parse::<Metric>(), Ok(Metric::Emd));
        assert_eq!(" EMD ".parse::<Metric>(), Ok(Metric::Emd));
    }
    #[test]
    fn rejects_unknown_metrics() {
        assert_eq!(
            "cosine".parse::<Metric>(),
            Err(Error::UnsupportedMetric("cosine".to_string()))
        );
    }
    #[test]
    fn metric_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Metric::Emd).unwrap(), "\"emd\"");
        assert_eq!(serde_json::from_str::<Metric>("\"emd\"").unwrap(), Metric::Emd);
        assert!(serde_json::from_str::<Metric>("\"wasserstein\"").is_err());
    }
    #[test]
    fn kernel_dispatches_to_emd() {
        let kernel = Kernel::from((Metric::Emd, Ground::Cityblock));
        let x = array![[0., 0.], [1., 1.]];
        let y = array![[1., 1.], [0., 2.]];
        assert_eq!(kernel.cost(x.view(), y.view()).unwrap(), 2.);
    }
}
