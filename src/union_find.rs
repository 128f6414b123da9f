//! Disjoint-set (union-find) with path compression and union by size.
//!
//! Elements are plain indices in `0..len`. Sets only ever merge. Root lookup
//! is iterative so stack usage stays constant regardless of tree depth.

use crate::error::PercolationError;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `n` singleton sets, each of size 1.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "union-find needs at least one element".into(),
            ));
        }
        Ok(Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        })
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: construction rejects an empty universe.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, p: usize) -> Result<(), PercolationError> {
        if p >= self.parent.len() {
            return Err(PercolationError::out_of_bounds(
                "element",
                p,
                0,
                self.parent.len() - 1,
            ));
        }
        Ok(())
    }

    /// Root of `p`'s set. Every node on the path is re-pointed at the root.
    pub fn find(&mut self, p: usize) -> Result<usize, PercolationError> {
        self.validate(p)?;
        Ok(self.root(p))
    }

    fn root(&mut self, mut p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[p] != root {
            let next = self.parent[p];
            self.parent[p] = root;
            p = next;
        }
        root
    }

    /// True if `p` and `q` are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, PercolationError> {
        self.validate(p)?;
        self.validate(q)?;
        Ok(self.root(p) == self.root(q))
    }

    /// Merge the sets containing `p` and `q`.
    ///
    /// The smaller tree goes under the larger one; on a tie `q`'s root goes
    /// under `p`'s. Returns `true` if two distinct sets were merged.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, PercolationError> {
        self.validate(p)?;
        self.validate(q)?;
        let rp = self.root(p);
        let rq = self.root(q);
        if rp == rq {
            return Ok(false);
        }
        let (big, small) = if self.size[rp] >= self.size[rq] {
            (rp, rq)
        } else {
            (rq, rp)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.count -= 1;
        Ok(true)
    }

    /// Size of the set containing `p`.
    pub fn set_size(&mut self, p: usize) -> Result<usize, PercolationError> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }
}
