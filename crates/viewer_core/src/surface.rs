use shared::domain::{Camera, ViewportSize};

use crate::imaging::PixelBuffer;

/// Whatever puts the image on screen. It reports its viewport size and is
/// handed the camera and pixels once per tick.
pub trait RenderSurface: Send {
    fn viewport_size(&self) -> ViewportSize;

    fn draw(&mut self, camera: &Camera, pixels: &PixelBuffer);
}
