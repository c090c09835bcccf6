use crate::foundation::core::{Point, ScreenQuad};
use crate::foundation::error::{MockupError, MockupResult};

/// Loose, JSON-facing template record as it appears in a catalog `info.json`.
///
/// Use [`TemplateDescriptor::from_record`] to validate it before rendering.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub base_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_aspect_ratio: Option<f64>,
    #[serde(default)]
    pub screen_points: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// How the screenshot's visible shape is defined.
#[derive(Clone, Debug, PartialEq)]
pub enum MaskSpec {
    /// Copy the alpha channel of this mask image (relative to the template directory).
    ExplicitMask { path: String },
    /// No mask image; the screen is a plain quad with this width / height ratio.
    AspectRatioOnly { ratio: f64 },
}

/// Validated, immutable description of one mockup template.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateDescriptor {
    pub name: String,
    pub slug: String,
    pub base_file: String,
    pub mask: MaskSpec,
    /// Screen corners in unscaled base-photo pixels.
    pub screen_points: ScreenQuad,
    pub brightness: f64,
    pub contrast: f64,
    pub author: Option<String>,
    pub backlink: Option<String>,
    pub category: Option<String>,
}

impl TemplateDescriptor {
    /// Parse and validate a single template record from JSON.
    pub fn from_json(json: &str) -> MockupResult<Self> {
        let record: TemplateRecord = serde_json::from_str(json)
            .map_err(|e| MockupError::invalid_template(format!("parse template JSON: {e}")))?;
        Self::from_record(record)
    }

    /// Validate a loose record once, so nothing downstream has to re-check it.
    pub fn from_record(record: TemplateRecord) -> MockupResult<Self> {
        let label = if record.name.is_empty() {
            "<unnamed>".to_string()
        } else {
            record.name.clone()
        };
        let fail =
            |msg: String| MockupError::invalid_template(format!("template '{label}': {msg}"));

        let base_file = asset_path(record.base_file, "base_file").map_err(fail)?;

        let mask = match (record.mask_file, record.mask_aspect_ratio) {
            (Some(path), None) => MaskSpec::ExplicitMask {
                path: asset_path(path, "mask_file").map_err(fail)?,
            },
            (None, Some(ratio)) => {
                if !ratio.is_finite() || ratio <= 0.0 {
                    return Err(fail(format!("mask_aspect_ratio must be > 0, got {ratio}")));
                }
                MaskSpec::AspectRatioOnly { ratio }
            }
            (Some(_), Some(_)) => {
                return Err(fail(
                    "exactly one of mask_file or mask_aspect_ratio may be set, found both".into(),
                ));
            }
            (None, None) => {
                return Err(fail("no mask_file or mask_aspect_ratio specified".into()));
            }
        };

        let points: [[f64; 2]; 4] = record.screen_points.as_slice().try_into().map_err(|_| {
            fail(format!(
                "screen_points must have exactly 4 points, got {}",
                record.screen_points.len()
            ))
        })?;
        if points.iter().flatten().any(|v| !v.is_finite()) {
            return Err(fail("screen_points must be finite".into()));
        }
        let screen_points = ScreenQuad(points.map(|[x, y]| Point::new(x, y)));

        let brightness = positive_or_default(record.brightness, "brightness").map_err(fail)?;
        let contrast = positive_or_default(record.contrast, "contrast").map_err(fail)?;

        Ok(Self {
            name: record.name,
            slug: record.slug,
            base_file,
            mask,
            screen_points,
            brightness,
            contrast,
            author: record.author,
            backlink: record.backlink,
            category: record.category,
        })
    }
}

fn positive_or_default(v: Option<f64>, field: &str) -> Result<f64, String> {
    match v {
        None => Ok(1.0),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(format!("{field} must be > 0, got {v}")),
    }
}

/// Asset paths are joined onto the template directory as written, so an absolute path is used
/// unchanged.
fn asset_path(path: String, field: &str) -> Result<String, String> {
    if path.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
