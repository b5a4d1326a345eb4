//! Per-category size breakdown keyed on leaf file extensions.
//!
//! Groups leaves into broad categories (Documents, Media, Code, Archives,
//! System, Other) and totals size and count per category.

use super::Visitor;
use crate::model::Leaf;
use serde::Serialize;
use std::collections::HashMap;

/// Broad file type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileCategory {
    Documents,
    Images,
    Video,
    Audio,
    Archives,
    Code,
    Executables,
    System,
    Other,
}

impl FileCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Images => "Images",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archives => "Archives",
            Self::Code => "Code",
            Self::Executables => "Executables",
            Self::System => "System",
            Self::Other => "Other",
        }
    }

    /// Category of a leaf, judged by the text after its last `.`.
    /// Names without a dot are `Other`.
    pub fn of_name(name: &str) -> Self {
        name.rsplit_once('.')
            .map_or(Self::Other, |(_, ext)| categorise_extension(ext))
    }
}

/// Size and count totals for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: FileCategory,
    pub total_size: u64,
    pub leaf_count: u64,
}

/// Map an extension (without the dot) to a category, ignoring ASCII case.
///
/// Lowercases into a 16-byte stack buffer; longer extensions are `Other`.
pub fn categorise_extension(ext: &str) -> FileCategory {
    let bytes = ext.as_bytes();
    if bytes.len() > 16 {
        return FileCategory::Other;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes) {
        *dest = src.to_ascii_lowercase();
    }
    let Ok(lower) = std::str::from_utf8(&lower[..bytes.len()]) else {
        return FileCategory::Other;
    };

    match lower {
        "doc" | "docx" | "pdf" | "txt" | "rtf" | "odt" | "xls" | "xlsx" | "ppt" | "pptx"
        | "csv" | "md" | "epub" => FileCategory::Documents,
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "ico" | "tiff" | "tif"
        | "psd" | "raw" | "heic" | "heif" => FileCategory::Images,
        "mp4" | "mkv" | "avi" | "mov" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg" => {
            FileCategory::Video
        }
        "mp3" | "wav" | "flac" | "aac" | "ogg" | "wma" | "m4a" | "opus" => FileCategory::Audio,
        "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" | "xz" | "zst" | "iso" | "dmg" => {
            FileCategory::Archives
        }
        "rs" | "py" | "js" | "ts" | "jsx" | "tsx" | "c" | "cpp" | "h" | "hpp" | "cs" | "java"
        | "go" | "rb" | "php" | "swift" | "kt" | "html" | "css" | "json" | "xml" | "yaml"
        | "yml" | "toml" | "sql" | "sh" => FileCategory::Code,
        "exe" | "msi" | "dll" | "so" | "dylib" | "bin" | "app" => FileCategory::Executables,
        "sys" | "log" | "dat" | "tmp" | "bak" | "lock" => FileCategory::System,
        _ => FileCategory::Other,
    }
}

/// Accumulates [`CategoryStats`] over every leaf.
///
/// Composites contribute nothing themselves; the default handler walks them.
#[derive(Debug, Default)]
pub struct CategoryTally {
    // Nine categories at most.
    stats: HashMap<FileCategory, CategoryStats>,
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for CategoryTally {
    type Output = Vec<CategoryStats>;

    fn visit_leaf(&mut self, leaf: &Leaf) {
        let category = FileCategory::of_name(leaf.name());
        let entry = self.stats.entry(category).or_insert(CategoryStats {
            category,
            total_size: 0,
            leaf_count: 0,
        });
        entry.total_size = entry.total_size.saturating_add(leaf.value());
        entry.leaf_count += 1;
    }

    /// Sorted by total size, largest first; ties broken by label.
    fn finish(self) -> Vec<CategoryStats> {
        let mut results: Vec<CategoryStats> = self.stats.into_values().collect();
        results.sort_by(|a, b| {
            b.total_size
                .cmp(&a.total_size)
                .then_with(|| a.category.label().cmp(b.category.label()))
        });
        results
    }
}
