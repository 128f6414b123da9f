//! End-to-end properties of the public grid and experiment API.

use percolation_sim::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn all_sites(n: usize) -> Vec<(usize, usize)> {
    (1..=n).flat_map(|r| (1..=n).map(move |c| (r, c))).collect()
}

#[test]
fn random_open_orders_respect_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in 1..=10 {
        let mut sites = all_sites(n);
        sites.shuffle(&mut rng);

        let mut grid = Percolation::new(n).unwrap();
        let mut percolated = false;
        for &(r, c) in &sites {
            grid.open(r, c).unwrap();
            let now = grid.percolates();
            assert!(!percolated || now, "percolation must never be revoked (n={})", n);
            percolated = now;

            for &(qr, qc) in &sites {
                if grid.is_full(qr, qc).unwrap() {
                    let open = grid.is_open(qr, qc).unwrap();
                    assert!(open, "full site ({},{}) must be open", qr, qc);
                }
            }
        }
        assert!(grid.percolates(), "fully open {}x{} grid must percolate", n, n);
    }
}

#[test]
fn backwash_free_on_every_bottom_site() {
    let n = 6;
    let mut grid = Percolation::new(n).unwrap();
    for c in 1..=n {
        grid.open(n, c).unwrap();
    }
    assert!(!grid.percolates());

    // A single column now joins top to the open bottom row.
    for r in 1..n {
        grid.open(r, 1).unwrap();
    }
    assert!(grid.percolates());
    // The bottom row is genuinely connected to the column, so it is full.
    for c in 1..=n {
        assert!(grid.is_full(n, c).unwrap());
    }

    // A pocket touching only the bottom row through blocked sites stays empty.
    let mut grid = Percolation::new(n).unwrap();
    for r in 1..=n {
        grid.open(r, 1).unwrap();
    }
    grid.open(n, 4).unwrap();
    grid.open(n - 1, 4).unwrap();
    assert!(grid.percolates());
    assert!(!grid.is_full(n, 4).unwrap());
    assert!(!grid.is_full(n - 1, 4).unwrap());
}

#[test]
fn experiment_statistics_are_consistent() {
    let result = run_experiment(&SimConfig { n: 30, trials: 200, seed: Some(11) }).unwrap();
    assert_eq!(result.thresholds.len(), 200);
    assert!(result.thresholds.iter().all(|&t| t > 0.0 && t <= 1.0));
    assert!((result.mean - mean(&result.thresholds)).abs() < 1e-12);
    assert!((result.stddev - stddev(&result.thresholds)).abs() < 1e-12);
    assert!(result.confidence_lo <= result.mean && result.mean <= result.confidence_hi);
    assert!((result.mean - SQUARE_LATTICE_THRESHOLD).abs() < 0.03);
}

#[test]
fn errors_display_and_propagate() {
    let mut grid = Percolation::new(3).unwrap();
    let err = grid.open(4, 1).unwrap_err();
    assert_eq!(err.to_string(), "row index 4 out of bounds (expected 1..=3)");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("out of bounds"));
}
