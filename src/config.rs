use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Docs tree scanning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub exclude: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub filename: String,
    pub folder: PathBuf,
    pub template: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: vec![
                ".git/**".to_string(),
                "node_modules/**".to_string(),
                "site/**".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: "tags.md".to_string(),
            folder: PathBuf::from("aux"),
            template: None,
            format: OutputFormat::default(),
        }
    }
}

impl OutputConfig {
    /// Resolve the output folder against the docs root. Relative folders
    /// land next to the docs root; absolute folders are used as-is.
    pub fn resolved_folder(&self, docs_dir: &Path) -> PathBuf {
        if self.folder.is_absolute() {
            return self.folder.clone();
        }
        match docs_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(&self.folder),
            _ => self.folder.clone(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        folder: Option<PathBuf>,
        filename: Option<String>,
        template: Option<PathBuf>,
        exclude: Vec<String>,
        format: Option<String>,
    ) {
        if let Some(dir) = folder {
            self.output.folder = dir;
        }

        if let Some(name) = filename {
            self.output.filename = name;
        }

        if let Some(path) = template {
            self.output.template = Some(path);
        }

        if !exclude.is_empty() {
            self.scan.exclude.extend(exclude);
        }

        if let Some(fmt) = format {
            self.output.format = match fmt.as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Markdown,
            };
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.filename.is_empty() {
            return Err(Error::config_validation("output filename must not be empty"));
        }

        if self.output.folder.as_os_str().is_empty() {
            return Err(Error::config_validation("output folder must not be empty"));
        }

        Ok(())
    }
}
