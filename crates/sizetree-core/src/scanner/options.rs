//! Tunables for [`super::scan_directory`].

use std::path::Path;

/// Tuning for a directory scan. `Default` matches what the binary uses
/// when no flags are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Resolve symbolic links: directory links are walked and file links
    /// are sized by their target. Off by default, which also keeps a link
    /// loop from turning into an endless walk.
    pub follow_links: bool,
    /// Leave out dot-files and dot-directories.
    pub skip_hidden: bool,
    /// Deepest level to descend to; directories at this depth appear as
    /// empty composites. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Directory-reading threads. `None` uses one per logical CPU.
    pub threads: Option<usize>,
}

impl ScanOptions {
    fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// A configured walker. Sorting makes sibling order, and therefore
    /// traversal order of the built tree, reproducible between runs.
    pub(crate) fn walker(&self, root: &Path) -> jwalk::WalkDir {
        let walker = jwalk::WalkDir::new(root)
            .sort(true)
            .skip_hidden(self.skip_hidden)
            .follow_links(self.follow_links)
            .parallelism(jwalk::Parallelism::RayonNewPool(self.thread_count()));
        match self.max_depth {
            Some(depth) => walker.max_depth(depth),
            None => walker,
        }
    }
}
