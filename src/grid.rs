//! N×N site percolation grid.
//!
//! Sites are addressed by 1-based `(row, col)` and stored at linear index
//! `(row - 1) * n + col`. Two extra slots close the address space:
//! - index `0` is the virtual top, joined to every open site in row 1
//! - index `n² + 1` is the sink, joined to every open site in row n
//!
//! Connectivity is tracked by two union-find structures over the same
//! `n² + 2` slots. Both see every union except site-to-sink, which only the
//! primary structure receives. `percolates()` asks the primary structure;
//! `is_full()` asks the auxiliary one, so a bottom-row site is never reported
//! full just because the sink is already reachable from the top (backwash).

use crate::error::PercolationError;
use crate::union_find::UnionFind;

/// Slot of the virtual top site.
pub const VIRTUAL_TOP: usize = 0;

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    sink: usize,
    open: Vec<bool>,
    open_count: usize,
    /// Top and sink; answers `percolates()`.
    primary: UnionFind,
    /// Top only; answers `is_full()`.
    auxiliary: UnionFind,
}

impl Percolation {
    /// Create an N×N grid with every site blocked.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be positive, got {}",
                n
            )));
        }
        let slots = n
            .checked_mul(n)
            .and_then(|nn| nn.checked_add(2))
            .ok_or_else(|| {
                PercolationError::InvalidArgument(format!("grid size {} is too large", n))
            })?;
        Ok(Self {
            n,
            sink: slots - 1,
            open: vec![false; slots],
            open_count: 0,
            primary: UnionFind::new(slots)?,
            auxiliary: UnionFind::new(slots)?,
        })
    }

    /// Grid dimension N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Slot of the sink (virtual bottom).
    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Number of sites opened so far.
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), PercolationError> {
        if row == 0 || row > self.n {
            return Err(PercolationError::out_of_bounds("row", row, 1, self.n));
        }
        if col == 0 || col > self.n {
            return Err(PercolationError::out_of_bounds("column", col, 1, self.n));
        }
        Ok(())
    }

    /// Linear slot of an in-bounds site.
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    /// In-bounds orthogonal neighbours of `(row, col)`.
    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        [
            (row > 1).then(|| (row - 1, col)),
            (row < n).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < n).then(|| (row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Union applied to both partitions.
    fn connect(&mut self, a: usize, b: usize) -> Result<(), PercolationError> {
        self.primary.union(a, b)?;
        self.auxiliary.union(a, b)?;
        Ok(())
    }

    /// Open site `(row, col)` if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        self.validate(row, col)?;
        let site = self.index(row, col);
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_count += 1;

        if row == 1 {
            self.connect(VIRTUAL_TOP, site)?;
        }
        if row == self.n {
            // Primary only: the auxiliary partition must never reach the sink.
            self.primary.union(self.sink, site)?;
        }
        let mut open_neighbours = [None; 4];
        for (slot, (r, c)) in open_neighbours.iter_mut().zip(self.neighbours(row, col)) {
            let idx = self.index(r, c);
            if self.open[idx] {
                *slot = Some(idx);
            }
        }
        for idx in open_neighbours.into_iter().flatten() {
            self.connect(site, idx)?;
        }
        Ok(())
    }

    /// Is site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.validate(row, col)?;
        Ok(self.open[self.index(row, col)])
    }

    /// Is site `(row, col)` connected to the top through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.validate(row, col)?;
        let site = self.index(row, col);
        self.auxiliary.connected(VIRTUAL_TOP, site)
    }

    /// Does an open path join the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        let sink = self.sink;
        // Both slots exist for every valid grid.
        self.primary.connected(VIRTUAL_TOP, sink).unwrap_or(false)
    }
}
