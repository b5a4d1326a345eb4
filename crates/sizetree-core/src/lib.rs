//! SizeTree Core — owned Leaf/Composite trees and the visitors that walk them.
//!
//! This crate has no CLI dependencies and can back any frontend.
//!
//! # Modules
//!
//! - [`model`] — `Node`, `Leaf`, `Composite`, and the bottom-up `CompositeBuilder`.
//! - [`visitor`] — the `Visitor` trait, `run_visitor`, and the stock visitors.
//! - [`builder`] — trees from a nested JSON description.
//! - [`scanner`] — trees from a real directory walk.
//!
//! ```
//! use sizetree_core::model::{CompositeBuilder, Leaf, Node};
//! use sizetree_core::visitor::{run_visitor, SizeCalculator};
//!
//! let root: Node = CompositeBuilder::new("root")
//!     .with(Leaf::new("a.txt", 120))
//!     .with(CompositeBuilder::new("sub").with(Leaf::new("c.txt", 45)).build())
//!     .build()
//!     .into();
//! assert_eq!(run_visitor(&root, SizeCalculator::new()), 165);
//! ```

pub mod builder;
pub mod model;
pub mod scanner;
pub mod visitor;

pub use builder::{build_tree, load_tree, BuildError, TreeSpec};
pub use model::{Composite, CompositeBuilder, Leaf, Node};
pub use scanner::{scan_directory, ScanError, ScanOptions, ScanOutcome};
pub use visitor::{run_visitor, walk_children, Visitor};
