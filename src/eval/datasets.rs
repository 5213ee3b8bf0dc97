//! Synthetic raster datasets for evaluation.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A dataset split into an indexed subset and held-out queries.
#[derive(Debug, Clone)]
pub struct RasterDataset {
    /// Vectors to index.
    pub train: Vec<Vec<u16>>,
    /// Held-out query vectors.
    pub test: Vec<Vec<u16>>,
    /// Vector dimensionality.
    pub dimension: usize,
    /// Upper bound on feature values.
    pub max_value: u16,
}

impl RasterDataset {
    /// Number of indexed vectors.
    pub fn n_train(&self) -> usize {
        self.train.len()
    }

    /// Number of query vectors.
    pub fn n_test(&self) -> usize {
        self.test.len()
    }
}

/// Uniform random rasters: every feature drawn independently from
/// `0..=max_value`. A worst case for any locality-based method, useful
/// as a baseline.
pub fn uniform_rasters(
    n_train: usize,
    n_test: usize,
    dimension: usize,
    max_value: u16,
    seed: u64,
) -> RasterDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut draw = |n: usize| -> Vec<Vec<u16>> {
        (0..n)
            .map(|_| {
                (0..dimension)
                    .map(|_| rng.random_range(0..=max_value))
                    .collect()
            })
            .collect()
    };
    let train = draw(n_train);
    let test = draw(n_test);
    RasterDataset {
        train,
        test,
        dimension,
        max_value,
    }
}

/// Clustered rasters, closer to real image data: `n_clusters` random
/// prototypes, with each sample a prototype plus Gaussian pixel noise,
/// rounded and clamped to `0..=max_value`.
pub fn clustered_rasters(
    n_train: usize,
    n_test: usize,
    dimension: usize,
    n_clusters: usize,
    noise_std: f32,
    max_value: u16,
    seed: u64,
) -> RasterDataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let centers: Vec<Vec<f32>> = (0..n_clusters)
        .map(|_| {
            (0..dimension)
                .map(|_| rng.random::<f32>() * f32::from(max_value))
                .collect()
        })
        .collect();

    let sample_near = |rng: &mut StdRng, center: &[f32]| -> Vec<u16> {
        center
            .iter()
            .map(|&c| {
                // Box-Muller for Gaussian noise
                let u1: f32 = rng.random();
                let u2: f32 = rng.random();
                let z = (-2.0 * u1.max(f32::MIN_POSITIVE).ln()).sqrt()
                    * (2.0 * std::f32::consts::PI * u2).cos();
                (c + z * noise_std).round().clamp(0.0, f32::from(max_value)) as u16
            })
            .collect()
    };

    let train: Vec<Vec<u16>> = (0..n_train)
        .map(|_| {
            let idx = rng.random_range(0..n_clusters);
            sample_near(&mut rng, &centers[idx])
        })
        .collect();

    let test: Vec<Vec<u16>> = (0..n_test)
        .map(|_| {
            let idx = rng.random_range(0..n_clusters);
            sample_near(&mut rng, &centers[idx])
        })
        .collect();

    RasterDataset {
        train,
        test,
        dimension,
        max_value,
    }
}
