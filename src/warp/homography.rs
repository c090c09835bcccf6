use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

use crate::foundation::core::{Point, ScreenQuad};
use crate::foundation::error::{MockupError, MockupResult};

const EPS: f64 = 1e-9;

/// Planar projective transform, normalized so that `h33 == 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Homography {
    m: Matrix3<f64>,
}

impl Homography {
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
        }
    }

    /// Solve the unique transform taking each `src` corner to the matching `dst` corner.
    ///
    /// Both quads are conditioned first (centroid at the origin, mean corner distance `sqrt(2)`),
    /// so the solve and the invertibility test do not depend on where the screen sits in the photo.
    /// Fails with [`MockupError::InvalidTemplateAsset`] when the correspondence is degenerate
    /// (collapsed or collinear corners) and the transform would not be invertible.
    pub fn from_quads(src: &ScreenQuad, dst: &ScreenQuad) -> MockupResult<Self> {
        let src_cond = Conditioning::of(src)?;
        let dst_cond = Conditioning::of(dst)?;
        let src_n = src_cond.apply(src);
        let dst_n = dst_cond.apply(dst);

        let mut a = SMatrix::<f64, 8, 8>::zeros();
        let mut b = SVector::<f64, 8>::zeros();
        for (i, (s, d)) in src_n.iter().zip(&dst_n).enumerate() {
            let (r0, r1) = (2 * i, 2 * i + 1);
            a[(r0, 0)] = s.x;
            a[(r0, 1)] = s.y;
            a[(r0, 2)] = 1.0;
            a[(r0, 6)] = -s.x * d.x;
            a[(r0, 7)] = -s.y * d.x;
            b[r0] = d.x;

            a[(r1, 3)] = s.x;
            a[(r1, 4)] = s.y;
            a[(r1, 5)] = 1.0;
            a[(r1, 6)] = -s.x * d.y;
            a[(r1, 7)] = -s.y * d.y;
            b[r1] = d.y;
        }

        let h = a
            .lu()
            .solve(&b)
            .ok_or_else(|| degenerate("screen corners do not define a perspective transform"))?;
        let conditioned = Matrix3::new(h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0);
        if conditioned.iter().any(|v| !v.is_finite()) {
            return Err(degenerate("perspective transform is not finite"));
        }
        ensure_invertible(&conditioned)?;

        let m = dst_cond.inverse() * conditioned * src_cond.matrix();
        let w = m[(2, 2)];
        if !w.is_finite() || w.abs() <= EPS {
            return Err(degenerate("perspective transform is not finite"));
        }
        let out = Self { m: m / w };

        for (s, d) in src.corners().iter().zip(dst.corners()) {
            let p = out
                .apply(*s)
                .ok_or_else(|| degenerate("screen corner maps to infinity"))?;
            let tol = 1e-6 * (1.0 + d.x.abs().max(d.y.abs()));
            if (p.x - d.x).abs() > tol || (p.y - d.y).abs() > tol {
                return Err(degenerate("screen corners are collinear or collapsed"));
            }
        }
        Ok(out)
    }

    /// Transform mapping destination points back to source points.
    pub fn inverse(&self) -> MockupResult<Self> {
        let inv = self
            .m
            .try_inverse()
            .ok_or_else(|| degenerate("perspective transform is not invertible"))?;
        let w = inv[(2, 2)];
        if !w.is_finite() || w.abs() <= EPS {
            return Ok(Self { m: inv });
        }
        Ok(Self { m: inv / w })
    }

    /// Project a point; `None` when it lands on the line at infinity.
    pub fn apply(&self, p: Point) -> Option<Point> {
        let v = self.m * Vector3::new(p.x, p.y, 1.0);
        let w = v[2];
        if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
            return None;
        }
        Some(Point::new(v[0] / w, v[1] / w))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.m
    }
}

/// Similarity moving a quad's centroid to the origin with mean corner distance `sqrt(2)`.
#[derive(Clone, Copy, Debug)]
struct Conditioning {
    center: Point,
    scale: f64,
}

impl Conditioning {
    fn of(quad: &ScreenQuad) -> MockupResult<Self> {
        let corners = quad.corners();
        let (sx, sy) = corners.iter().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        let center = Point::new(sx / 4.0, sy / 4.0);
        let mean_dist = corners.iter().map(|p| p.distance(center)).sum::<f64>() / 4.0;
        if !mean_dist.is_finite() || mean_dist <= EPS {
            return Err(degenerate("screen corners are collinear or collapsed"));
        }
        Ok(Self {
            center,
            scale: std::f64::consts::SQRT_2 / mean_dist,
        })
    }

    fn apply(&self, quad: &ScreenQuad) -> [Point; 4] {
        quad.corners().map(|p| {
            Point::new(
                (p.x - self.center.x) * self.scale,
                (p.y - self.center.y) * self.scale,
            )
        })
    }

    fn matrix(&self) -> Matrix3<f64> {
        let s = self.scale;
        Matrix3::new(
            s,
            0.0,
            -s * self.center.x,
            0.0,
            s,
            -s * self.center.y,
            0.0,
            0.0,
            1.0,
        )
    }

    fn inverse(&self) -> Matrix3<f64> {
        let s = 1.0 / self.scale;
        Matrix3::new(s, 0.0, self.center.x, 0.0, s, self.center.y, 0.0, 0.0, 1.0)
    }
}

/// Determinant test on a conditioned matrix, whose entries are all of order one.
fn ensure_invertible(m: &Matrix3<f64>) -> MockupResult<()> {
    let det = m.determinant();
    let scale = m.norm().powi(3);
    if !det.is_finite() || det.abs() <= EPS * scale {
        return Err(degenerate("perspective transform is not invertible"));
    }
    Ok(())
}

fn degenerate(msg: &str) -> MockupError {
    MockupError::invalid_template(msg)
}

#[cfg(test)]
#[path = "../../tests/unit/warp/homography.rs"]
mod tests;
