//! Data model for SizeTree.
//!
//! Re-exports the owned Leaf/Composite tree and display helpers.

pub mod node;
pub mod size;

pub use node::{Composite, CompositeBuilder, Leaf, Node};
pub use size::{format_count, format_size};
