// Tag index page writer
//
// Resolves the output location, renders the grouped structure, and writes
// the final document to disk.

use crate::config::OutputConfig;
use crate::error::Result;
use crate::index::LetterBucket;
use crate::output::templates::TemplateEngine;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the rendered tag index to its configured location.
pub struct PageGenerator {
    folder: PathBuf,
    filename: String,
    engine: TemplateEngine,
}

impl PageGenerator {
    /// Create a generator for the given output config, resolving the output
    /// folder against the docs root. A configured template path replaces the
    /// bundled template.
    pub fn new(config: &OutputConfig, docs_dir: &Path) -> Result<Self> {
        let engine = match &config.template {
            Some(path) => TemplateEngine::from_path(path)?,
            None => TemplateEngine::new()?,
        };

        Ok(Self {
            folder: config.resolved_folder(docs_dir),
            filename: config.filename.clone(),
            engine,
        })
    }

    /// Render and write the tag index, returning the written path. The
    /// output folder is created if missing.
    pub fn generate(&self, buckets: &[LetterBucket]) -> Result<PathBuf> {
        let text = self.engine.render(buckets)?;

        fs::create_dir_all(&self.folder)?;
        let path = self.folder.join(&self.filename);
        fs::write(&path, text)?;

        Ok(path)
    }

    /// Path the tag index will be written to
    pub fn output_path(&self) -> PathBuf {
        self.folder.join(&self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{TagGroup, TagPage};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_buckets() -> Vec<LetterBucket> {
        vec![LetterBucket {
            letter: "S".to_string(),
            groups: vec![TagGroup {
                tag: "sample".to_string(),
                pages: vec![TagPage {
                    title: "Test".to_string(),
                    filename: "test.md".to_string(),
                    year: None,
                    extra: BTreeMap::new(),
                }],
            }],
        }]
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();

        let config = OutputConfig::default();
        let generator = PageGenerator::new(&config, &docs).unwrap();
        let written = generator.generate(&sample_buckets()).unwrap();

        assert_eq!(written, dir.path().join("aux/tags.md"));
        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.contains("<span class=\"tag\">sample</span>"));
        assert!(content.contains("* [Test](test.md)"));
    }

    #[test]
    fn test_generate_creates_missing_folder() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();

        let config = OutputConfig {
            folder: PathBuf::from("deep/nested/tags"),
            ..Default::default()
        };
        let generator = PageGenerator::new(&config, &docs).unwrap();
        generator.generate(&[]).unwrap();

        assert!(dir.path().join("deep/nested/tags/tags.md").exists());
    }

    #[test]
    fn test_generate_with_custom_template() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();

        let template = dir.path().join("custom.md.tera");
        std::fs::write(&template, "custom output\n").unwrap();

        let config = OutputConfig {
            template: Some(template),
            ..Default::default()
        };
        let generator = PageGenerator::new(&config, &docs).unwrap();
        let written = generator.generate(&sample_buckets()).unwrap();

        assert_eq!(std::fs::read_to_string(written).unwrap(), "custom output\n");
    }

    #[test]
    fn test_output_path() {
        let config = OutputConfig::default();
        let generator = PageGenerator::new(&config, Path::new("/project/docs")).unwrap();
        assert_eq!(generator.output_path(), PathBuf::from("/project/aux/tags.md"));
    }
}
