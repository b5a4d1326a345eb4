//! Top-N largest leaves with their paths from the root.

use super::{walk_children, Visitor};
use crate::model::{Composite, Leaf};
use serde::Serialize;

/// Default `N` for [`LargestLeaves`].
pub const DEFAULT_TOP_N: usize = 10;

/// One entry in the largest-leaves result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargestLeaf {
    /// Slash-joined names from the root down to the leaf, inclusive.
    pub path: String,
    pub size: u64,
}

/// Collects every leaf with its path, then keeps the `n` largest.
#[derive(Debug)]
pub struct LargestLeaves {
    n: usize,
    ancestors: Vec<String>,
    found: Vec<LargestLeaf>,
}

impl LargestLeaves {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ancestors: Vec::new(),
            found: Vec::new(),
        }
    }

    fn path_to(&self, name: &str) -> String {
        let mut path = self.ancestors.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(name);
        path
    }
}

impl Default for LargestLeaves {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl Visitor for LargestLeaves {
    type Output = Vec<LargestLeaf>;

    fn visit_leaf(&mut self, leaf: &Leaf) {
        if self.n == 0 {
            return;
        }
        self.found.push(LargestLeaf {
            path: self.path_to(leaf.name()),
            size: leaf.value(),
        });
    }

    fn visit_composite(&mut self, composite: &Composite) {
        self.ancestors.push(composite.name().to_string());
        walk_children(self, composite);
        self.ancestors.pop();
    }

    /// Descending by size. Equal sizes keep traversal order.
    ///
    /// `select_nth_unstable_by` moves the top `n` to the front in O(len)
    /// average, so only those `n` are sorted.
    fn finish(self) -> Vec<LargestLeaf> {
        let Self { n, mut found, .. } = self;
        if found.len() > n {
            // Index tiebreak keeps the selection deterministic.
            let mut indexed: Vec<(usize, LargestLeaf)> = found.into_iter().enumerate().collect();
            indexed.select_nth_unstable_by(n - 1, |(ia, a), (ib, b)| {
                b.size.cmp(&a.size).then(ia.cmp(ib))
            });
            indexed.truncate(n);
            indexed.sort_unstable_by(|(ia, a), (ib, b)| b.size.cmp(&a.size).then(ia.cmp(ib)));
            return indexed.into_iter().map(|(_, leaf)| leaf).collect();
        }
        found.sort_by(|a, b| b.size.cmp(&a.size));
        found
    }
}
