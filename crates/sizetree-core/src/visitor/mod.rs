//! Visitors — operations over a [`Node`] tree that live outside the node types.
//!
//! Dispatch is a `match` in [`Node::accept`]; recursion is handler-driven:
//! a visitor's [`Visitor::visit_composite`] decides when (and whether) to
//! descend, normally by calling [`walk_children`]. Sibling order is always
//! the composite's insertion order.
//!
//! Visitor state belongs to one traversal. [`run_visitor`] consumes the
//! visitor through [`Visitor::finish`]; calling [`Node::accept`] by hand on
//! several roots with the same instance accumulates across all of them.

pub mod categories;
pub mod counter;
pub mod csv_export;
pub mod largest;
pub mod printer;
pub mod size;

pub use categories::{categorise_extension, CategoryStats, CategoryTally, FileCategory};
pub use counter::{NodeCounter, NodeCounts};
pub use csv_export::{CsvExporter, ExportError};
pub use largest::{LargestLeaf, LargestLeaves, DEFAULT_TOP_N};
pub use printer::{PrintStyle, Printer, INDENT_WIDTH};
pub use size::SizeCalculator;

use crate::model::{Composite, Leaf, Node};
use tracing::trace;

/// One traversal-wide operation over a tree.
pub trait Visitor {
    /// What the traversal yields once finished.
    type Output;

    /// Per-leaf logic.
    fn visit_leaf(&mut self, leaf: &Leaf);

    /// Per-composite logic. Responsible for recursing into children; the
    /// default just walks them in order.
    fn visit_composite(&mut self, composite: &Composite) {
        walk_children(self, composite);
    }

    /// Consume the visitor and hand back the accumulated result.
    fn finish(self) -> Self::Output;
}

/// Call `child.accept(visitor)` for each child of `composite`, in order.
pub fn walk_children<V: Visitor + ?Sized>(visitor: &mut V, composite: &Composite) {
    for child in composite.children() {
        child.accept(visitor);
    }
}

/// Traverse `root` with `visitor` and return what it accumulated.
pub fn run_visitor<V: Visitor>(root: &Node, mut visitor: V) -> V::Output {
    trace!(root = root.name(), "running visitor");
    root.accept(&mut visitor);
    visitor.finish()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Composite, CompositeBuilder, Leaf, Node};
    use quickcheck::{Arbitrary, Gen};

    const MAX_DEPTH: usize = 5;
    const MAX_CHILDREN: usize = 4;

    /// root{a.txt 120, b.txt 2048, sub{c.txt 45, d.txt 12}}
    pub fn sample_tree() -> Node {
        let sub = CompositeBuilder::new("sub")
            .with(Leaf::new("c.txt", 45))
            .with(Leaf::new("d.txt", 12))
            .build();
        CompositeBuilder::new("root")
            .with(Leaf::new("a.txt", 120))
            .with(Leaf::new("b.txt", 2048))
            .with(sub)
            .build()
            .into()
    }

    /// root → mid → leaf(99)
    pub fn chain() -> Composite {
        let mid = CompositeBuilder::new("mid")
            .with(Leaf::new("leaf", 99))
            .build();
        CompositeBuilder::new("root").with(mid).build()
    }

    /// A random tree plus the counts and leaf sum recorded while building it.
    #[derive(Debug, Clone)]
    pub struct RandomTree {
        pub root: Node,
        pub leaves: u64,
        pub composites: u64,
        pub leaf_sum: u64,
    }

    impl Arbitrary for RandomTree {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut tree = RandomTree {
                root: Node::leaf("", 0),
                leaves: 0,
                composites: 0,
                leaf_sum: 0,
            };
            let depth = g.size().min(MAX_DEPTH);
            let root = gen_node(g, &mut tree, depth);
            tree.root = root;
            tree
        }
    }

    fn gen_node(g: &mut Gen, tree: &mut RandomTree, depth: usize) -> Node {
        if depth == 0 || bool::arbitrary(g) {
            // u32 values keep the sum clear of saturation.
            let value = u64::from(u32::arbitrary(g));
            tree.leaves += 1;
            tree.leaf_sum += value;
            return Node::leaf(format!("leaf{}", tree.leaves), value);
        }
        tree.composites += 1;
        let mut builder = CompositeBuilder::new(format!("dir{}", tree.composites));
        for _ in 0..usize::arbitrary(g) % (MAX_CHILDREN + 1) {
            builder.add(gen_node(g, tree, depth - 1));
        }
        builder.build().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::{sample_tree, RandomTree};
    use quickcheck::QuickCheck;

    /// Records every handler call so coverage and order can be asserted.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Visitor for Recorder {
        type Output = Vec<String>;

        fn visit_leaf(&mut self, leaf: &Leaf) {
            self.calls.push(format!("leaf:{}", leaf.name()));
        }

        fn visit_composite(&mut self, composite: &Composite) {
            self.calls.push(format!("dir:{}", composite.name()));
            walk_children(self, composite);
        }

        fn finish(self) -> Vec<String> {
            self.calls
        }
    }

    /// Leaf-only visitor relying on the default composite handler.
    #[derive(Default)]
    struct LeafNames(Vec<String>);

    impl Visitor for LeafNames {
        type Output = Vec<String>;

        fn visit_leaf(&mut self, leaf: &Leaf) {
            self.0.push(leaf.name().to_string());
        }

        fn finish(self) -> Vec<String> {
            self.0
        }
    }

    #[test]
    fn test_every_node_visited_once_in_preorder() {
        let calls = run_visitor(&sample_tree(), Recorder::default());
        assert_eq!(
            calls,
            [
                "dir:root",
                "leaf:a.txt",
                "leaf:b.txt",
                "dir:sub",
                "leaf:c.txt",
                "leaf:d.txt"
            ]
        );
    }

    #[test]
    fn test_default_composite_handler_recurses() {
        let names = run_visitor(&sample_tree(), LeafNames::default());
        assert_eq!(names, ["a.txt", "b.txt", "c.txt", "d.txt"]);
    }

    #[test]
    fn test_leaf_root_dispatches_to_leaf_handler() {
        let calls = run_visitor(&Node::leaf("solo", 7), Recorder::default());
        assert_eq!(calls, ["leaf:solo"]);
    }

    #[test]
    fn test_random_trees_visit_each_node_once() {
        fn prop(tree: RandomTree) -> bool {
            let calls = run_visitor(&tree.root, Recorder::default());
            let leaf_calls = calls.iter().filter(|c| c.starts_with("leaf:")).count() as u64;
            let dir_calls = calls.iter().filter(|c| c.starts_with("dir:")).count() as u64;
            leaf_calls == tree.leaves && dir_calls == tree.composites
        }

        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(RandomTree) -> bool);
    }

    #[test]
    fn test_reused_visitor_accumulates() {
        let tree = sample_tree();
        let mut names = LeafNames::default();
        tree.accept(&mut names);
        tree.accept(&mut names);
        assert_eq!(names.finish().len(), 8);
    }
}
