//! Scanner — builds a [`Node`] tree from a real directory.
//!
//! Directory reads run on a `jwalk` rayon pool, but entries are consumed
//! here one at a time, in depth-first sorted order, and assembled bottom-up
//! with a stack of open [`CompositeBuilder`]s: when the walk leaves a
//! directory its builder is frozen and moved into its parent. Each
//! directory becomes a composite, each other entry a leaf valued at its
//! byte length. Without `follow_links` a symlink is a leaf sized by the
//! link itself; with it, a link is sized (or walked) as its target.
//!
//! Unreadable entries are logged and counted, never fatal.

pub mod options;

pub use options::ScanOptions;

use crate::model::{CompositeBuilder, Leaf, Node};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A finished scan.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Always a composite named after the scanned directory.
    pub root: Node,
    pub files: u64,
    /// Directories below the root, plus the root itself.
    pub dirs: u64,
    pub error_count: u64,
    pub duration: Duration,
}

/// Walk `root_path` and build its tree.
pub fn scan_directory(root_path: &Path, options: &ScanOptions) -> Result<ScanOutcome, ScanError> {
    let meta = std::fs::metadata(root_path).map_err(|source| ScanError::Io {
        path: root_path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root_path.to_path_buf()));
    }

    info!("Starting scan of {}", root_path.display());
    let start = Instant::now();

    // open[d] is the directory at depth d currently being filled.
    let mut open: Vec<CompositeBuilder> = vec![CompositeBuilder::new(root_display_name(root_path))];
    let mut files: u64 = 0;
    let mut dirs: u64 = 1;
    let mut error_count: u64 = 0;

    for entry_result in options.walker(root_path) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                error_count += 1;
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!("skipping unreadable entry {path}: {err}");
                continue;
            }
        };

        // The root itself is already open.
        if entry.depth() == 0 {
            continue;
        }

        close_until(&mut open, entry.depth());
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            open.push(CompositeBuilder::new(name.as_ref()));
            dirs += 1;
            continue;
        }

        let path = entry.path();
        let meta = if options.follow_links {
            std::fs::metadata(&path)
        } else {
            std::fs::symlink_metadata(&path)
        };
        match meta {
            Ok(meta) => {
                if let Some(parent) = open.last_mut() {
                    parent.add(Leaf::new(name.as_ref(), meta.len()));
                }
                files += 1;
            }
            Err(err) => {
                error_count += 1;
                warn!("skipping {}: {err}", path.display());
            }
        }
    }

    close_until(&mut open, 1);
    let root = match open.pop() {
        Some(builder) => Node::from(builder.build()),
        None => Node::from(CompositeBuilder::new(root_display_name(root_path)).build()),
    };

    let duration = start.elapsed();
    debug!(files, dirs, error_count, ?duration, "scan complete");

    Ok(ScanOutcome {
        root,
        files,
        dirs,
        error_count,
        duration,
    })
}

/// Freeze open directories until only `depth` remain, moving each into
/// the one below it. An entry at depth `d` belongs to `open[d - 1]`.
fn close_until(open: &mut Vec<CompositeBuilder>, depth: usize) {
    while open.len() > depth {
        let Some(done) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => {
                parent.add(done.build());
            }
            None => {
                // Never closes the root.
                open.push(done);
                break;
            }
        }
    }
}

/// Display name for the scan root: the last path component, or the
/// path itself for roots like `/` or `C:\`.
fn root_display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            let s = path.to_string_lossy();
            let trimmed = s.trim_end_matches(['\\', '/']);
            if trimmed.is_empty() {
                s.into_owned()
            } else {
                trimmed.to_string()
            }
        }
    }
}
