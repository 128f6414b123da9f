//! # percolation-sim
//!
//! Monte Carlo estimation of the site percolation threshold on an N×N grid.
//!
//! Sites open one at a time; connectivity to the top and bottom boundaries is
//! maintained incrementally with a weighted union-find using path compression.
//! A second union-find that never touches the bottom boundary answers
//! "is this site full?" without backwash.
//!
//! ## Usage
//!
//! ```
//! use percolation_sim::prelude::*;
//!
//! let mut grid = Percolation::new(3).unwrap();
//! grid.open(1, 2).unwrap();
//! grid.open(2, 2).unwrap();
//! grid.open(3, 2).unwrap();
//! assert!(grid.percolates());
//!
//! let result = run_experiment(&SimConfig { n: 20, trials: 50, seed: Some(1) }).unwrap();
//! assert!(result.confidence_lo <= result.mean && result.mean <= result.confidence_hi);
//! ```
//!
//! ## Threshold
//!
//! For the square lattice p* ≈ 0.5927.

pub mod error;
pub mod union_find;
pub mod grid;
pub mod stats;
pub mod simulation;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::union_find::*;
    pub use crate::grid::*;
    pub use crate::stats::*;
    pub use crate::simulation::*;
}
