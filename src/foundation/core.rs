use std::fmt;

pub use kurbo::{Point, Rect};

/// Normalized pipeline buffer: straight (non-premultiplied) RGBA8, alpha in channel 4.
pub type Rgba8Image = image::RgbaImage;

/// Four corners of a screen region in the fixed winding order
/// top-left, bottom-left, bottom-right, top-right.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenQuad(pub [Point; 4]);

impl ScreenQuad {
    /// Corners of the `width` x `height` rectangle anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        Self([
            Point::new(0.0, 0.0),
            Point::new(0.0, h),
            Point::new(w, h),
            Point::new(w, 0.0),
        ])
    }

    /// Uniformly scale every corner about the origin.
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0.map(|p| Point::new(p.x * factor, p.y * factor)))
    }

    /// Axis-aligned bounding box of the corners.
    pub fn bounds(&self) -> Rect {
        let mut r = Rect::from_points(self.0[0], self.0[0]);
        for p in &self.0[1..] {
            r = r.union_pt(*p);
        }
        r
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.0
    }
}

/// Non-fatal warning: the screenshot is stretched noticeably to fit the template screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AspectRatioMismatch {
    /// Width / height of the screenshot as it enters the warp.
    pub screenshot_ratio: f64,
    /// Width / height expected by the template (mask or declared ratio).
    pub target_ratio: f64,
}

impl AspectRatioMismatch {
    /// Stretch tolerance in either direction.
    pub const TOLERANCE: f64 = 1.1;

    /// Return a warning when the two ratios differ by more than [`Self::TOLERANCE`].
    pub fn check(screenshot_ratio: f64, target_ratio: f64) -> Option<Self> {
        if screenshot_ratio / target_ratio > Self::TOLERANCE
            || target_ratio / screenshot_ratio > Self::TOLERANCE
        {
            Some(Self {
                screenshot_ratio,
                target_ratio,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for AspectRatioMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "screenshot aspect ratio {:.3} differs from template aspect ratio {:.3}; \
             the screenshot will be stretched (use crop to avoid this)",
            self.screenshot_ratio, self.target_ratio
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
