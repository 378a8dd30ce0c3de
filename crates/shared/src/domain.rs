use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 0.02;
pub const MAX_SCALE: f64 = 200.0;

/// Clamps a scale into `[MIN_SCALE, MAX_SCALE]`. NaN collapses to the minimum.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Mapping from image space to viewport space: a zoom level and the image
/// point shown at the centre of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub scale: f64,
    pub cx: f64,
    pub cy: f64,
}

impl Camera {
    pub fn new(scale: f64, cx: f64, cy: f64) -> Self {
        Self {
            scale: clamp_scale(scale),
            cx,
            cy,
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self::new(scale, self.cx, self.cy)
    }

    pub fn with_center(self, cx: f64, cy: f64) -> Self {
        Self { cx, cy, ..self }
    }

    /// Component-wise linear interpolation; `t` is expected in `[0, 1]`.
    pub fn lerp(&self, target: &Camera, t: f64) -> Camera {
        fn mix(a: f64, b: f64, t: f64) -> f64 {
            a + (b - a) * t
        }

        Camera {
            scale: mix(self.scale, target.scale, t),
            cx: mix(self.cx, target.cx, t),
            cy: mix(self.cy, target.cy, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle in image space, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
