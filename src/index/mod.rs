// Docs tree scanning and tag aggregation

pub mod group;

pub use group::{group_by_tag, LetterBucket, TagGroup, TagPage};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::{frontmatter, metadata, PageMeta};
use glob::Pattern;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a docs tree.
#[derive(Debug)]
pub struct ScanResult {
    /// Metadata records for every page with usable front matter.
    pub records: Vec<PageMeta>,
    /// Markdown files that contributed no metadata (absent, malformed, or
    /// non-mapping front matter).
    pub skipped: Vec<PathBuf>,
}

/// Walks a docs tree and collects front-matter metadata from Markdown files.
pub struct Scanner {
    excludes: Vec<Pattern>,
    verbose: bool,
}

impl Scanner {
    /// Create a scanner with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let excludes = config
            .scan
            .exclude
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            excludes,
            verbose: false,
        })
    }

    /// Create scanner with verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan the docs tree, collecting metadata records from every Markdown
    /// file. File read errors are fatal; files whose front matter is absent
    /// or unusable are recorded in `skipped` and otherwise ignored.
    pub fn scan(&self, docs_dir: &Path) -> Result<ScanResult> {
        let root = docs_dir.canonicalize().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Cannot access path: {}", e),
            ))
        })?;

        let files = self.discover_files(&root)?;

        let progress = if self.verbose {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for path in &files {
            if let Some(ref pb) = progress {
                let msg = path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                pb.set_message(msg);
                pb.inc(1);
            }

            let content = std::fs::read_to_string(path)?;
            let front_matter = frontmatter::extract(&content);
            let filename = relative_name(path, &root);

            match metadata::parse(&front_matter, &filename) {
                Some(record) => records.push(record),
                None => skipped.push(path.clone()),
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Scan complete");
        }

        Ok(ScanResult { records, skipped })
    }

    /// Discover all Markdown files in the docs tree
    fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            if path.extension().map_or(true, |ext| ext != "md") {
                continue;
            }

            if self.should_exclude(path, root) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Check if a path matches any configured exclude pattern
    fn should_exclude(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.excludes
            .iter()
            .any(|pattern| pattern.matches_path(relative))
    }

    /// Get the Markdown file count for reporting
    pub fn file_count(&self, docs_dir: &Path) -> Result<usize> {
        let root = docs_dir
            .canonicalize()
            .map_err(|_| Error::PathNotFound(docs_dir.to_path_buf()))?;
        self.discover_files(&root).map(|files| files.len())
    }
}

/// Page path relative to the docs root, used as the link target in the
/// generated index.
fn relative_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
