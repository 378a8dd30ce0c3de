//! Camera geometry: fitting, zoom and pan targets, and the visible region.

use shared::domain::{Camera, CropRect, ImageSize, ViewportSize};

/// Screen-to-image conversion never divides by less than this.
const MIN_PAN_DIVISOR: f64 = 1e-9;

/// Largest scale at which the whole image fits the viewport, centred.
pub fn fit_camera(image: ImageSize, viewport: ViewportSize) -> Camera {
    let image_w = f64::from(image.width.max(1));
    let image_h = f64::from(image.height.max(1));
    let view_w = f64::from(viewport.width.max(1));
    let view_h = f64::from(viewport.height.max(1));

    let (cx, cy) = image.center();
    Camera::new((view_w / image_w).min(view_h / image_h), cx, cy)
}

pub fn zoom_target(from: Camera, factor: f64) -> Camera {
    from.with_scale(from.scale * factor)
}

pub fn set_zoom_target(from: Camera, scale: f64) -> Camera {
    from.with_scale(scale)
}

/// Moves the centre by a delta given in screen pixels. The new centre is
/// kept inside the image bounds; scale is untouched.
pub fn pan_target(from: Camera, dx_px: f64, dy_px: f64, image: ImageSize) -> Camera {
    let divisor = from.scale.max(MIN_PAN_DIVISOR);
    let cx = (from.cx + dx_px / divisor).clamp(0.0, f64::from(image.width));
    let cy = (from.cy + dy_px / divisor).clamp(0.0, f64::from(image.height));
    from.with_center(cx, cy)
}

/// Image-space rectangle currently shown by `camera` in `viewport`, clipped
/// to the image. Edges are truncated to whole pixels.
pub fn visible_rect(camera: Camera, viewport: ViewportSize, image: ImageSize) -> CropRect {
    let half_w = f64::from(viewport.width) / (2.0 * camera.scale);
    let half_h = f64::from(viewport.height) / (2.0 * camera.scale);

    let clip = |value: f64, max: u32| value.clamp(0.0, f64::from(max)) as u32;

    CropRect {
        left: clip(camera.cx - half_w, image.width),
        top: clip(camera.cy - half_h, image.height),
        right: clip(camera.cx + half_w, image.width),
        bottom: clip(camera.cy + half_h, image.height),
    }
}

#[cfg(test)]
#[path = "tests/camera_tests.rs"]
mod tests;
