use super::metric::Kernel;
use super::metric::Metric;
use super::partition::Granularity;
use crate::Result;
use crate::transport::Ground;
use serde::Deserialize;
use serde::Serialize;

/// Parameters of one distance-matrix computation.
///
/// Defaults: EMD over Euclidean ground distance, parallel execution on a
/// pool sized to the host, default chunking. The worker count is resolved
/// when a computation starts, never cached globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    metric: Metric,
    ground: Ground,
    parallel: bool,
    workers: Option<usize>,
    granularity: Granularity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            ground: Ground::default(),
            parallel: true,
            workers: None,
            granularity: Granularity::default(),
        }
    }
}

impl Config {
    /// parse from JSON; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    /// select the metric by name, failing fast on unknown names
    pub fn with_metric(mut self, name: &str) -> Result<Self> {
        self.metric = name.parse()?;
        Ok(self)
    }
    pub fn with_ground(mut self, ground: Ground) -> Self {
        self.ground = ground;
        self
    }
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
    pub fn ground(&self) -> Ground {
        self.ground
    }
    pub fn parallel(&self) -> bool {
        self.parallel
    }
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
    /// explicit worker count, else the host's available parallelism
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
    pub fn kernel(&self) -> Kernel {
        Kernel::from((self.metric, self.ground))
    }
}
