//! Owned Leaf/Composite tree nodes.
//!
//! A [`Composite`] holds its children by value, so every node has exactly
//! one owner and the structure cannot contain a cycle: a node is moved into
//! its parent once, during assembly, and there is no API to re-parent it.
//! Children are attached only through [`CompositeBuilder`]; a built
//! `Composite` is read-only.

use crate::visitor::Visitor;
use compact_str::CompactString;
use serde::Serialize;

/// A terminal node carrying a scalar value (typically a size in bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    name: CompactString,
    #[serde(rename = "size")]
    value: u64,
}

impl Leaf {
    /// Create a leaf with the given name and value.
    pub fn new(name: impl Into<CompactString>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scalar this leaf contributes to aggregations.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// A non-terminal node owning an ordered list of children.
///
/// Insertion order is preserved and drives traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composite {
    name: CompactString,
    children: Vec<Node>,
}

impl Composite {
    /// Create a composite with no children.
    pub fn empty(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct children in insertion order.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child at `index`, or `None` when out of range.
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Either a [`Leaf`] or a [`Composite`], addressed uniformly.
///
/// Serialises untagged: a leaf as `{"name", "size"}`, a composite as
/// `{"name", "children"}` — the same shape [`crate::builder::TreeSpec`] reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Leaf),
    Composite(Composite),
}

impl Node {
    /// Shorthand for `Node::Leaf(Leaf::new(name, value))`.
    pub fn leaf(name: impl Into<CompactString>, value: u64) -> Self {
        Self::Leaf(Leaf::new(name, value))
    }

    /// The node's identifier. Never fails.
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.name(),
            Self::Composite(composite) => composite.name(),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Dispatch to the visitor's handler for this variant.
    ///
    /// Recursion into a composite's children is the handler's job
    /// (see [`crate::visitor::walk_children`]), not this method's.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Leaf(leaf) => visitor.visit_leaf(leaf),
            Self::Composite(composite) => visitor.visit_composite(composite),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Self::Composite(composite)
    }
}

/// Assembles a [`Composite`] bottom-up from already-built children.
///
/// Each child is taken by value, so it cannot also belong to another parent.
#[derive(Debug)]
pub struct CompositeBuilder {
    name: CompactString,
    children: Vec<Node>,
}

impl CompositeBuilder {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child after any previously added ones.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// By-value form of [`add`](Self::add) for chained construction.
    pub fn with(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Number of children added so far.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Freeze the child list.
    pub fn build(self) -> Composite {
        Composite {
            name: self.name,
            children: self.children,
        }
    }
}
