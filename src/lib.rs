//! Earth Mover's Distance matrices over collections of sample tensors.
//!
//! Each sample is a 2-D array whose rows are treated as unit point masses.
//! The distance between two samples is the optimal-transport cost of
//! matching their rows one-to-one. The pairwise matrix over `n` samples is
//! partitioned into upper-triangle chunks, computed serially or across a
//! fixed worker pool, and reassembled into a dense symmetric matrix that
//! downstream affinity and spectral clustering stages consume.
//!
//! ## Modules
//!
//! - [`transport`] — ground measures and the exact assignment coupling
//! - [`distance`] — pair indexing, partitioning, executors, assembly
//! - [`workers`] — fixed-size worker pool for chunk dispatch
//! - [`pipeline`] — seams for the affinity / clustering collaborators
pub mod distance;
pub mod error;
pub mod pipeline;
pub mod transport;
pub mod workers;

pub use distance::*;
pub use error::*;
pub use pipeline::*;
pub use transport::*;
pub use workers::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coordinates, ground distances, and transport costs.
pub type Energy = f64;

// ============================================================================
// PARTITIONING PARAMETERS
// ============================================================================
/// Target number of chunks under the default granularity, independent of `n`.
/// Balances per-chunk dispatch overhead against load-balancing resolution.
pub const CHUNK_COUNT: usize = 500;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
/// The library never calls this itself; binaries and notebooks opt in.
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}

/// Styled progress bar over `n` completed chunks.
pub fn progress(n: usize) -> indicatif::ProgressBar {
    let tick = std::time::Duration::from_secs(1);
    let style = "{spinner:.cyan} {elapsed} ~ {percent:>3}% {wide_bar:.cyan}";
    let style = indicatif::ProgressStyle::with_template(style)
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar());
    let progress = indicatif::ProgressBar::new(n as u64);
    progress.set_style(style);
    progress.enable_steady_tick(tick);
    progress
}
