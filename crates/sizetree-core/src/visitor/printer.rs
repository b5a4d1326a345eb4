//! Indented outline rendering.
//!
//! ```text
//! [root]
//!   a.txt (120 bytes)
//!   [sub]
//!     c.txt (45 bytes)
//! ```

use super::{walk_children, Visitor};
use crate::model::{format_size, Composite, Leaf};
use std::fmt::Write;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// How leaf sizes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrintStyle {
    /// `name (2048 bytes)`
    #[default]
    Bytes,
    /// `name (2.0 KB)`
    Human,
}

/// Builds a pre-order outline, one line per node.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    depth: usize,
    style: PrintStyle,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: PrintStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    fn indent(&mut self) {
        let width = self.depth * INDENT_WIDTH;
        self.out.push_str(&" ".repeat(width));
    }
}

impl Visitor for Printer {
    type Output = String;

    fn visit_leaf(&mut self, leaf: &Leaf) {
        self.indent();
        // Writing into a String cannot fail.
        let _ = match self.style {
            PrintStyle::Bytes => writeln!(self.out, "{} ({} bytes)", leaf.name(), leaf.value()),
            PrintStyle::Human => {
                writeln!(self.out, "{} ({})", leaf.name(), format_size(leaf.value()))
            }
        };
    }

    fn visit_composite(&mut self, composite: &Composite) {
        self.indent();
        let _ = writeln!(self.out, "[{}]", composite.name());
        self.depth += 1;
        walk_children(self, composite);
        self.depth -= 1;
    }

    fn finish(self) -> String {
        self.out
    }
}
