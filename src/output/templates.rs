// Template engine for rendering the tag index page

use crate::error::Result;
use crate::index::LetterBucket;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera, Value};

const TEMPLATE_NAME: &str = "tags.md";

/// Template engine wrapping Tera with the slugify filter
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create an engine using the bundled default template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, include_str!("../../templates/tags.md.tera"))?;
        tera.register_filter("slugify", slugify_filter);

        Ok(Self { tera })
    }

    /// Create an engine from a custom template file
    pub fn from_path(template: &Path) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_template_file(template, Some(TEMPLATE_NAME))?;
        tera.register_filter("slugify", slugify_filter);

        Ok(Self { tera })
    }

    /// Render the letter-bucketed tag structure into the final document.
    /// The template sees it as the `tags` variable.
    pub fn render(&self, buckets: &[LetterBucket]) -> Result<String> {
        let mut context = Context::new();
        context.insert("tags", buckets);

        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Get the underlying Tera instance for advanced usage
    pub fn tera(&self) -> &Tera {
        &self.tera
    }
}

/// Convert text to an anchor-friendly slug
fn slugify_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().unwrap_or("");
    Ok(Value::String(slugify(s)))
}

/// Convert text to an anchor-friendly slug
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
