//! Node counts and depth.

use super::{walk_children, Visitor};
use crate::model::{Composite, Leaf};
use serde::Serialize;

/// Totals produced by [`NodeCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeCounts {
    pub leaves: u64,
    pub composites: u64,
    /// Deepest nesting level reached; the root sits at depth 0.
    pub max_depth: usize,
}

impl NodeCounts {
    pub fn total(&self) -> u64 {
        self.leaves + self.composites
    }
}

/// Counts leaf and composite visits and tracks the deepest level.
#[derive(Debug, Default)]
pub struct NodeCounter {
    counts: NodeCounts,
    depth: usize,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for NodeCounter {
    type Output = NodeCounts;

    fn visit_leaf(&mut self, _leaf: &Leaf) {
        self.counts.leaves += 1;
        self.counts.max_depth = self.counts.max_depth.max(self.depth);
    }

    fn visit_composite(&mut self, composite: &Composite) {
        self.counts.composites += 1;
        self.counts.max_depth = self.counts.max_depth.max(self.depth);
        self.depth += 1;
        walk_children(self, composite);
        self.depth -= 1;
    }

    fn finish(self) -> NodeCounts {
        self.counts
    }
}
