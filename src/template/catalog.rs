use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::assets::decode::{load_mask, open_image};
use crate::foundation::core::Rgba8Image;
use crate::foundation::error::{MockupError, MockupResult};
use crate::template::model::{MaskSpec, TemplateDescriptor, TemplateRecord};

/// File listing every template of a template directory.
pub const CATALOG_FILE: &str = "info.json";

/// A local directory of templates described by an `info.json` array.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    dir: PathBuf,
    templates: Vec<TemplateDescriptor>,
}

/// Decoded pixel assets of one template, ready for [`crate::render_mockup`].
#[derive(Clone, Debug)]
pub struct TemplateAssets {
    /// Device photo exactly as decoded; normalized by the pipeline.
    pub base: DynamicImage,
    /// Normalized mask, present for [`MaskSpec::ExplicitMask`] templates.
    pub mask: Option<Rgba8Image>,
}

impl TemplateCatalog {
    /// Load and validate `<dir>/info.json`.
    pub fn load(dir: impl AsRef<Path>) -> MockupResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(MockupError::invalid_template(format!(
                "template directory '{}' not found",
                dir.display()
            )));
        }
        let info = dir.join(CATALOG_FILE);
        let f = File::open(&info).map_err(|e| {
            MockupError::invalid_template(format!(
                "template directory missing '{CATALOG_FILE}' ({}): {e}",
                info.display()
            ))
        })?;
        let records: Vec<TemplateRecord> = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| MockupError::invalid_template(format!("parse '{}': {e}", info.display())))?;
        Self::from_records(dir, records)
    }

    /// Build a catalog rooted at `dir` from already-parsed records.
    pub fn from_records(dir: impl Into<PathBuf>, records: Vec<TemplateRecord>) -> MockupResult<Self> {
        let templates = records
            .into_iter()
            .map(TemplateDescriptor::from_record)
            .collect::<MockupResult<Vec<_>>>()?;
        tracing::debug!(count = templates.len(), "template catalog loaded");
        Ok(Self {
            dir: dir.into(),
            templates,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    /// Pick a template by 1-based index or by case-insensitive name.
    pub fn select(&self, choice: &str) -> Option<&TemplateDescriptor> {
        let choice = choice.trim();
        if choice.is_empty() {
            return None;
        }
        if choice.chars().all(|c| c.is_ascii_digit()) {
            let idx: usize = choice.parse().ok()?;
            return idx.checked_sub(1).and_then(|i| self.templates.get(i));
        }
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(choice))
    }

    /// Numbered listing, one template per line.
    pub fn listing(&self) -> String {
        self.templates
            .iter()
            .enumerate()
            .map(|(i, t)| format!(" {}. {}\n", i + 1, t.name))
            .collect()
    }

    /// Absolute-or-cwd-relative path of a template asset.
    pub fn resolve(&self, rel: &str) -> PathBuf {
        self.dir.join(rel)
    }

    /// Decode the base photo and, for explicit-mask templates, the mask.
    pub fn load_assets(&self, template: &TemplateDescriptor) -> MockupResult<TemplateAssets> {
        let base_path = self.resolve(&template.base_file);
        let base = open_image(&base_path).map_err(|e| {
            MockupError::decode_failure(format!(
                "template '{}' base image: {e}",
                template.name
            ))
        })?;
        let mask = match &template.mask {
            MaskSpec::ExplicitMask { path } => Some(load_mask(self.resolve(path))?),
            MaskSpec::AspectRatioOnly { .. } => None,
        };
        Ok(TemplateAssets { base, mask })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/catalog.rs"]
mod tests;
