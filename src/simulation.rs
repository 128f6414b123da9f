//! Monte Carlo threshold estimation.
//!
//! One trial starts from a fully blocked N×N grid and opens uniformly random
//! blocked sites until the grid percolates. The fraction of sites open at that
//! moment is one sample of the percolation threshold. An experiment repeats
//! this T times and reports the sample mean, standard deviation and a 95%
//! confidence interval.
//!
//! Sites are drawn from a shrinking list of blocked candidates rather than by
//! rejection sampling, so a trial performs at most N² opens.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::PercolationError;
use crate::grid::Percolation;
use crate::stats;

/// Best known value of the site percolation threshold on the square lattice.
pub const SQUARE_LATTICE_THRESHOLD: f64 = 0.592_746;

/// Configuration for a Monte Carlo threshold experiment.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Grid size N (N×N sites).
    pub n: usize,
    /// Number of independent trials T.
    pub trials: usize,
    /// Master seed. Trial `i` is seeded with `seed + i`; `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n: 20,
            trials: 100,
            seed: None,
        }
    }
}

/// Result of a Monte Carlo threshold experiment.
#[derive(Debug, Clone)]
pub struct SimResult {
    /// Grid size.
    pub n: usize,
    /// Number of trials.
    pub trials: usize,
    /// Per-trial open fraction at the moment of percolation.
    pub thresholds: Vec<f64>,
    /// Sample mean of `thresholds`.
    pub mean: f64,
    /// Sample standard deviation of `thresholds` (`NaN` when T = 1).
    pub stddev: f64,
    /// Lower bound of the 95% confidence interval.
    pub confidence_lo: f64,
    /// Upper bound of the 95% confidence interval.
    pub confidence_hi: f64,
    /// Wall-clock time spent running the trials.
    pub elapsed: Duration,
}

impl SimResult {
    fn from_samples(n: usize, thresholds: Vec<f64>, elapsed: Duration) -> Self {
        let (confidence_lo, confidence_hi) = stats::confidence_interval(&thresholds);
        Self {
            n,
            trials: thresholds.len(),
            mean: stats::mean(&thresholds),
            stddev: stats::stddev(&thresholds),
            confidence_lo,
            confidence_hi,
            thresholds,
            elapsed,
        }
    }
}

/// Open random blocked sites of a fresh N×N grid until it percolates.
///
/// Returns the fraction of sites that were open at that point.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64, PercolationError> {
    let mut grid = Percolation::new(n)?;
    let total = n * n;
    let mut blocked: Vec<usize> = (0..total).collect();

    while !grid.percolates() && !blocked.is_empty() {
        let pick = rng.gen_range(0..blocked.len());
        let site = blocked.swap_remove(pick);
        grid.open(site / n + 1, site % n + 1)?;
    }

    let fraction = grid.open_sites() as f64 / total as f64;
    debug!("trial n={} opened {}/{} ({:.4})", n, grid.open_sites(), total, fraction);
    Ok(fraction)
}

fn trial_seed(base: u64, trial: usize) -> u64 {
    base.wrapping_add(trial as u64)
}

#[cfg(feature = "parallel")]
fn run_trials(n: usize, trials: usize, base: u64) -> Result<Vec<f64>, PercolationError> {
    (0..trials)
        .into_par_iter()
        .map(|i| run_trial(n, &mut StdRng::seed_from_u64(trial_seed(base, i))))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_trials(n: usize, trials: usize, base: u64) -> Result<Vec<f64>, PercolationError> {
    (0..trials)
        .map(|i| run_trial(n, &mut StdRng::seed_from_u64(trial_seed(base, i))))
        .collect()
}

/// Run a full threshold experiment.
pub fn run_experiment(config: &SimConfig) -> Result<SimResult, PercolationError> {
    if config.n == 0 {
        return Err(PercolationError::InvalidArgument(
            "grid size must be positive, got 0".into(),
        ));
    }
    if config.trials == 0 {
        return Err(PercolationError::InvalidArgument(
            "trial count must be positive, got 0".into(),
        ));
    }

    let base = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let start = Instant::now();
    let thresholds = run_trials(config.n, config.trials, base)?;
    let result = SimResult::from_samples(config.n, thresholds, start.elapsed());

    info!(
        "n={} trials={} mean={:.6} stddev={:.6} elapsed={:?}",
        result.n, result.trials, result.mean, result.stddev, result.elapsed
    );
    Ok(result)
}

/// Run one experiment per grid size, all with the same trial count.
pub fn threshold_sweep(
    sizes: &[usize],
    trials: usize,
    seed: Option<u64>,
) -> Result<Vec<SimResult>, PercolationError> {
    sizes
        .iter()
        .map(|&n| run_experiment(&SimConfig { n, trials, seed }))
        .collect()
}
