use super::*;
use crate::Energy;
use crate::Error;
use crate::transport::Ground;
use ndarray::Array2;
use ndarray::ArrayD;
use ndarray::IxDyn;
use ndarray::array;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Seeded random tensor of the given shape.
fn tensor(shape: &[usize], seed: u64) -> ArrayD<Energy> {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    ArrayD::from_shape_fn(IxDyn(shape), |_| rng.random::<Energy>())
}

fn serial() -> Config {
    Config::default().with_parallel(false)
}

fn parallel() -> Config {
    Config::default().with_parallel(true).with_workers(4)
}

/// distance matrix should be
/// 1. symmetric
/// 2. zero on the diagonal
/// 3. nonnegative

#[test]
fn is_matrix_symmetric() {
    let ref x = tensor(&[24, 6, 3], 0);
    let m = compute_distance_matrix(x, &parallel()).unwrap();
    assert_eq!(m, m.t());
}
#[test]
fn is_matrix_diagonal_zero() {
    let ref x = tensor(&[24, 6, 3], 1);
    let m = compute_distance_matrix(x, &parallel()).unwrap();
    assert!(m.diag().iter().all(|&d| d == 0.));
}
#[test]
fn is_matrix_nonnegative() {
    let ref x = tensor(&[24, 6, 3], 2);
    let m = compute_distance_matrix(x, &parallel()).unwrap();
    assert!(m.iter().all(|&d| d >= 0.));
    assert!(m.iter().filter(|&&d| d > 0.).count() == 24 * 23);
}

#[test]
fn serial_equals_parallel() {
    let ref x = tensor(&[40, 10, 5], 3);
    let s = compute_distance_matrix(x, &serial()).unwrap();
    let p = compute_distance_matrix(x, &parallel()).unwrap();
    assert_eq!(s, p);
}
#[test]
fn serial_equals_parallel_across_pool_sizes() {
    let ref x = tensor(&[30, 4, 2], 4);
    let s = compute_distance_matrix(x, &serial()).unwrap();
    for workers in [1, 2, 3, 8] {
        let p = compute_distance_matrix(x, &Config::default().with_workers(workers)).unwrap();
        assert_eq!(s, p, "{} workers", workers);
    }
}
#[test]
fn chunking_never_changes_result() {
    let ref x = tensor(&[100, 10, 5], 5);
    let reference = compute_distance_matrix(x, &Config::default()).unwrap();
    for granularity in [
        Granularity::Default,
        Granularity::Chunks(1),
        Granularity::Chunks(3),
        Granularity::Chunks(500),
        Granularity::Size(1),
        Granularity::Size(97),
        Granularity::Size(1 << 20),
    ] {
        let chunked = compute_distance_matrix_chunked(x, granularity, &Config::default()).unwrap();
        assert_eq!(reference, chunked, "{:?}", granularity);
    }
}
#[test]
fn chunked_serial_equals_default_parallel() {
    let ref x = tensor(&[33, 3, 3], 6);
    let reference = compute_distance_matrix(x, &parallel()).unwrap();
    let chunked = compute_distance_matrix_chunked(x, Granularity::Chunks(7), &serial()).unwrap();
    assert_eq!(reference, chunked);
}

#[test]
fn identical_pairs_are_zero_distinct_pairs_agree() {
    let a = array![[0., 0.], [1., 0.], [0., 1.]];
    let b = array![[4., 4.], [5., 3.], [3., 6.]];
    let x = ndarray::stack(ndarray::Axis(0), &[a.view(), a.view(), b.view(), b.view()])
        .unwrap()
        .into_dyn();
    for config in [serial(), parallel()] {
        let m = compute_distance_matrix(&x, &config).unwrap();
        assert_eq!(m.shape(), &[4, 4]);
        assert_eq!(m[[0, 1]], 0.);
        assert_eq!(m[[2, 3]], 0.);
        assert!(m[[0, 2]] > 0.);
        assert_eq!(m[[0, 2]], m[[0, 3]]);
        assert_eq!(m[[0, 2]], m[[1, 2]]);
        assert_eq!(m[[0, 2]], m[[1, 3]]);
    }
}
#[test]
fn one_dimensional_samples_use_ground_distance() {
    let x = array![[0., 0.], [3., 4.], [6., 8.]].into_dyn();
    let m = compute_distance_matrix(&x, &serial()).unwrap();
    let expected: Array2<Energy> = array![[0., 5., 10.], [5., 0., 5.], [10., 5., 0.]];
    assert_eq!(m, expected);
}
#[test]
fn ground_measure_is_configurable() {
    let x = array![[0., 0.], [3., 4.]].into_dyn();
    let config = serial().with_ground(Ground::Cityblock);
    let m = compute_distance_matrix(&x, &config).unwrap();
    assert_eq!(m[[0, 1]], 7.);
}

#[test]
fn rejects_four_dimensional_tensor() {
    let ref x = tensor(&[3, 2, 2, 2], 7);
    for config in [serial(), parallel()] {
        assert!(matches!(
            compute_distance_matrix(x, &config),
            Err(Error::InvalidInputShape(_))
        ));
        assert!(matches!(
            compute_distance_matrix_chunked(x, Granularity::Chunks(2), &config),
            Err(Error::InvalidInputShape(_))
        ));
    }
}
#[test]
fn rejects_unknown_metric_before_dispatch() {
    assert!(matches!(
        Config::default().with_metric("chebyshev"),
        Err(Error::UnsupportedMetric(_))
    ));
}
#[test]
fn corrupt_sample_fails_identically() {
    let mut x = tensor(&[12, 4, 2], 8);
    x[&[5, 2, 1][..]] = Energy::NAN;
    let s = compute_distance_matrix(&x, &serial());
    let p = compute_distance_matrix(&x, &parallel());
    assert!(matches!(s, Err(Error::InvalidInputShape(_))));
    assert_eq!(s, p);
}

#[test]
fn degenerate_collections() {
    let empty = ArrayD::<Energy>::zeros(IxDyn(&[0, 3, 2]));
    assert_eq!(compute_distance_matrix(&empty, &parallel()).unwrap().shape(), &[0, 0]);
    let single = tensor(&[1, 3, 2], 9);
    let m = compute_distance_matrix(&single, &parallel()).unwrap();
    assert_eq!(m, Array2::<Energy>::zeros((1, 1)));
}
#[test]
fn progress_reports_every_chunk() {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    let ref x = tensor(&[50, 2, 2], 10);
    let ticks = AtomicUsize::new(0);
    let progress = Callback(|_: &Chunk| {
        ticks.fetch_add(1, Ordering::Relaxed);
    });
    let config = parallel().with_granularity(Granularity::Chunks(13));
    let with = DistanceMatrix::try_from(x).unwrap().compute_with(&config, &progress).unwrap();
    let without = DistanceMatrix::try_from(x).unwrap().compute(&config).unwrap();
    assert_eq!(ticks.load(Ordering::Relaxed), Partition::new(50, Granularity::Chunks(13)).len());
    assert_eq!(with, without);
}
#[test]
fn progress_bar_observes_without_side_effects() {
    let ref x = tensor(&[20, 3, 2], 11);
    let config = parallel();
    let bar = indicatif::ProgressBar::hidden();
    let m = DistanceMatrix::try_from(x).unwrap().compute_with(&config, &bar).unwrap();
    assert_eq!(bar.position() as usize, Partition::new(20, config.granularity()).len());
    assert!(bar.is_finished());
    assert_eq!(m, compute_distance_matrix(x, &serial()).unwrap());
}
#[test]
fn styled_progress_bar_counts_chunks() {
    let ref x = tensor(&[16, 2, 2], 12);
    let config = serial().with_granularity(Granularity::Chunks(5));
    let chunks = Partition::new(16, config.granularity()).len();
    let bar = crate::progress(chunks);
    DistanceMatrix::try_from(x).unwrap().compute_with(&config, &bar).unwrap();
    assert_eq!(bar.position() as usize, chunks);
    assert_eq!(bar.length(), Some(chunks as u64));
}
