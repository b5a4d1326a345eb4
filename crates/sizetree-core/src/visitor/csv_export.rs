//! CSV export: one record per node, pre-order.
//!
//! Columns: `path,kind,depth,size`. A composite's `size` is the total of
//! its subtree, which is only known once its children have been visited,
//! so records are buffered and written in [`Visitor::finish`].

use super::{walk_children, Visitor};
use crate::model::{Composite, Leaf};
use serde::Serialize;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum NodeKind {
    Leaf,
    Composite,
}

#[derive(Debug, Serialize)]
struct Record {
    path: String,
    kind: NodeKind,
    depth: usize,
    size: u64,
}

/// An open composite: where its record sits and what it has summed so far.
#[derive(Debug)]
struct OpenComposite {
    record: usize,
    total: u64,
}

/// Writes the tree as CSV into `W` once traversal finishes.
pub struct CsvExporter<W: io::Write> {
    writer: csv::Writer<W>,
    records: Vec<Record>,
    ancestors: Vec<String>,
    open: Vec<OpenComposite>,
}

impl<W: io::Write> CsvExporter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            records: Vec::new(),
            ancestors: Vec::new(),
            open: Vec::new(),
        }
    }

    fn path_to(&self, name: &str) -> String {
        self.ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join("/")
    }

    fn add_to_parent(&mut self, size: u64) {
        if let Some(parent) = self.open.last_mut() {
            parent.total = parent.total.saturating_add(size);
        }
    }
}

impl<W: io::Write> Visitor for CsvExporter<W> {
    type Output = Result<W, ExportError>;

    fn visit_leaf(&mut self, leaf: &Leaf) {
        self.records.push(Record {
            path: self.path_to(leaf.name()),
            kind: NodeKind::Leaf,
            depth: self.ancestors.len(),
            size: leaf.value(),
        });
        self.add_to_parent(leaf.value());
    }

    fn visit_composite(&mut self, composite: &Composite) {
        let record = self.records.len();
        self.records.push(Record {
            path: self.path_to(composite.name()),
            kind: NodeKind::Composite,
            depth: self.ancestors.len(),
            size: 0,
        });
        self.open.push(OpenComposite { record, total: 0 });
        self.ancestors.push(composite.name().to_string());

        walk_children(self, composite);

        self.ancestors.pop();
        if let Some(done) = self.open.pop() {
            self.records[done.record].size = done.total;
            self.add_to_parent(done.total);
        }
    }

    fn finish(mut self) -> Result<W, ExportError> {
        for record in &self.records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        self.writer.into_inner().map_err(|err| err.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompositeBuilder, Node};
    use crate::visitor::fixtures::sample_tree;
    use crate::visitor::run_visitor;

    fn export(node: &Node) -> String {
        let bytes = run_visitor(node, CsvExporter::new(Vec::new())).expect("export");
        String::from_utf8(bytes).expect("utf-8")
    }

    #[test]
    fn test_rows_are_preorder_with_subtree_sizes() {
        let csv = export(&sample_tree());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "path,kind,depth,size",
                "root,composite,0,2225",
                "root/a.txt,leaf,1,120",
                "root/b.txt,leaf,1,2048",
                "root/sub,composite,1,57",
                "root/sub/c.txt,leaf,2,45",
                "root/sub/d.txt,leaf,2,12",
            ]
        );
    }

    #[test]
    fn test_empty_composite_row() {
        let csv = export(&Node::from(CompositeBuilder::new("empty").build()));
        assert_eq!(csv, "path,kind,depth,size\nempty,composite,0,0\n");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let csv = export(&Node::leaf("a,b.txt", 3));
        assert!(csv.contains("\"a,b.txt\",leaf,0,3"));
    }

    /// Sink that refuses every write.
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let result = run_visitor(&sample_tree(), CsvExporter::new(Broken));
        assert!(result.is_err());
    }
}
