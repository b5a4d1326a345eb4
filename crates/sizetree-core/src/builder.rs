//! Tree assembly from a nested, serde-readable description.
//!
//! ```json
//! { "name": "root", "children": [
//!     { "name": "a.txt", "size": 120 },
//!     { "name": "sub", "children": [] }
//! ] }
//! ```
//!
//! An object with `children` is a composite; one with `size` is a leaf.
//! The description is owned data, so the resulting [`Node`] is built
//! bottom-up and is acyclic by construction.

use crate::model::{CompositeBuilder, Leaf, Node};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while turning a description into a tree.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid tree description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A node had an empty name. `path` locates it by its ancestors' names.
    #[error("node at '{path}' has an empty name")]
    EmptyName { path: String },
}

pub type BuildResult<T> = Result<T, BuildError>;

/// A nested tree description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TreeSpec {
    Composite {
        name: String,
        children: Vec<TreeSpec>,
    },
    Leaf {
        name: String,
        size: u64,
    },
}

impl TreeSpec {
    /// Parse a description from JSON text.
    pub fn from_json(text: &str) -> BuildResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn name(&self) -> &str {
        match self {
            Self::Composite { name, .. } | Self::Leaf { name, .. } => name,
        }
    }
}

/// Build a [`Node`] tree from `spec`, children before parents.
pub fn build_tree(spec: &TreeSpec) -> BuildResult<Node> {
    let mut ancestors = Vec::new();
    let root = build_node(spec, &mut ancestors)?;
    debug!(root = root.name(), "built tree from description");
    Ok(root)
}

/// Read a JSON description from `path` and build it.
pub fn load_tree(path: &Path) -> BuildResult<Node> {
    let text = fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    build_tree(&TreeSpec::from_json(&text)?)
}

fn build_node<'a>(spec: &'a TreeSpec, ancestors: &mut Vec<&'a str>) -> BuildResult<Node> {
    if spec.name().is_empty() {
        let mut path = ancestors.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str("<unnamed>");
        return Err(BuildError::EmptyName { path });
    }

    match spec {
        TreeSpec::Leaf { name, size } => Ok(Leaf::new(name.as_str(), *size).into()),
        TreeSpec::Composite { name, children } => {
            ancestors.push(name.as_str());
            let mut builder = CompositeBuilder::new(name.as_str());
            for child in children {
                builder.add(build_node(child, ancestors)?);
            }
            ancestors.pop();
            Ok(builder.build().into())
        }
    }
}
