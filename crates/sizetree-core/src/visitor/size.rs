//! Total-size aggregation.

use super::{walk_children, Visitor};
use crate::model::{Composite, Leaf};

/// Sums every leaf value reachable from the root.
///
/// A composite's total is the sum of its subtree, so an empty composite
/// yields 0 and a lone leaf yields its own value.
#[derive(Debug, Default)]
pub struct SizeCalculator {
    total: u64,
}

impl SizeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Running total so far.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Visitor for SizeCalculator {
    type Output = u64;

    fn visit_leaf(&mut self, leaf: &Leaf) {
        self.total = self.total.saturating_add(leaf.value());
    }

    fn visit_composite(&mut self, composite: &Composite) {
        walk_children(self, composite);
    }

    fn finish(self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompositeBuilder, Node};
    use crate::visitor::fixtures::{chain, sample_tree, RandomTree};
    use crate::visitor::run_visitor;
    use quickcheck::QuickCheck;

    #[test]
    fn test_sum_of_all_leaves() {
        assert_eq!(run_visitor(&sample_tree(), SizeCalculator::new()), 2225);
    }

    #[test]
    fn test_empty_composite_is_zero() {
        let empty = Node::from(CompositeBuilder::new("empty").build());
        assert_eq!(run_visitor(&empty, SizeCalculator::new()), 0);
    }

    #[test]
    fn test_single_leaf_root() {
        assert_eq!(run_visitor(&Node::leaf("only", 42), SizeCalculator::new()), 42);
    }

    #[test]
    fn test_nested_chain_root_and_mid() {
        let root = chain();
        let mid = root.child(0).cloned().expect("mid");
        assert_eq!(run_visitor(&Node::from(root), SizeCalculator::new()), 99);
        assert_eq!(run_visitor(&mid, SizeCalculator::new()), 99);
    }

    #[test]
    fn test_shape_does_not_change_total() {
        let flat = CompositeBuilder::new("flat")
            .with(Node::leaf("a", 1))
            .with(Node::leaf("b", 2))
            .with(Node::leaf("c", 3))
            .build();
        let deep = CompositeBuilder::new("deep")
            .with(
                CompositeBuilder::new("x")
                    .with(CompositeBuilder::new("y").with(Node::leaf("c", 3)).build())
                    .with(Node::leaf("a", 1))
                    .build(),
            )
            .with(Node::leaf("b", 2))
            .build();
        assert_eq!(
            run_visitor(&Node::from(flat), SizeCalculator::new()),
            run_visitor(&Node::from(deep), SizeCalculator::new())
        );
    }

    #[test]
    fn test_random_trees_sum_their_leaves() {
        fn prop(tree: RandomTree) -> bool {
            run_visitor(&tree.root, SizeCalculator::new()) == tree.leaf_sum
        }

        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(RandomTree) -> bool);
    }

    #[test]
    fn test_total_runs_across_manual_accepts() {
        let mut calc = SizeCalculator::new();
        sample_tree().accept(&mut calc);
        assert_eq!(calc.total(), 2225);
        Node::leaf("extra", 5).accept(&mut calc);
        assert_eq!(calc.total(), 2230);
        assert_eq!(calc.finish(), 2230);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let big = CompositeBuilder::new("big")
            .with(Node::leaf("a", u64::MAX))
            .with(Node::leaf("b", 1))
            .build();
        assert_eq!(run_visitor(&Node::from(big), SizeCalculator::new()), u64::MAX);
    }
}
