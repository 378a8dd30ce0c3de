use shared::domain::{Camera, ViewportSize};
use tracing::debug;
use viewer_core::{PixelBuffer, RenderSurface};

/// Stand-in for a window: fixed viewport, logs each new camera.
pub struct HeadlessSurface {
    viewport: ViewportSize,
    last_drawn: Option<Camera>,
}

impl HeadlessSurface {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            last_drawn: None,
        }
    }

    #[cfg(test)]
    pub fn last_drawn(&self) -> Option<Camera> {
        self.last_drawn
    }
}

impl RenderSurface for HeadlessSurface {
    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    fn draw(&mut self, camera: &Camera, pixels: &PixelBuffer) {
        if self.last_drawn == Some(*camera) {
            return;
        }
        self.last_drawn = Some(*camera);
        debug!(
            scale = camera.scale,
            cx = camera.cx,
            cy = camera.cy,
            width = pixels.width(),
            height = pixels.height(),
            "frame"
        );
    }
}
