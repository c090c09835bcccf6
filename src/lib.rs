//! mockupgen composites a screenshot into a photographed device frame.
//!
//! A template pairs a device photo with the four corners of its screen (and optionally a mask
//! image for rounded corners or notches). Rendering is a single synchronous pass over owned
//! RGBA8 buffers:
//!
//! 1. **Normalize**: coerce decoded images to 8-bit RGBA ([`normalize_rgba8`])
//! 2. **Adjust**: template, then caller, contrast and brightness ([`Adjustments`])
//! 3. **Mask**: optional center crop, then the template mask's alpha ([`mask_screenshot`])
//! 4. **Warp**: perspective-map the screenshot onto the screen quad ([`warp_perspective`])
//! 5. **Composite**: "over" blend onto the supersampled photo, then size the output
//!
//! [`render_mockup`] runs the whole pipeline. Decoding, template catalogs and saving are thin
//! collaborators around it ([`open_image`], [`TemplateCatalog`], [`save_image`]).
#![forbid(unsafe_code)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod render;
mod template;
mod warp;

pub use assets::decode::{decode_image, load_mask, open_image};
pub use assets::normalize::normalize_rgba8;
pub use effects::adjust::{Adjustments, brightness, contrast, contrast_gain};
pub use effects::blur::{box_blur_2x2_rgba8, soften};
pub use effects::composite::{composite_over, over, over_in_place};
pub use effects::crop::{center_crop, rotate_ccw};
pub use effects::mask::{MaskedScreen, apply_mask, mask_screenshot};
pub use encode::save::{DEFAULT_OUTPUT, resolve_output, save_image};
pub use foundation::core::{AspectRatioMismatch, Point, Rect, Rgba8Image, ScreenQuad};
pub use foundation::error::{MockupError, MockupResult};
pub use render::pipeline::{RenderConfig, RenderOutput, render_mockup};
pub use render::resize::{
    Interpolation, WARP_SUPERSAMPLE, finish_output, resize_by, resize_exact, resize_to_width,
    upscale_for_warp,
};
pub use template::catalog::{CATALOG_FILE, TemplateAssets, TemplateCatalog};
pub use template::model::{MaskSpec, TemplateDescriptor, TemplateRecord};
pub use warp::homography::Homography;
pub use warp::perspective::warp_perspective;
