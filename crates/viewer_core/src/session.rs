use std::{path::PathBuf, time::Instant};

use shared::domain::{Camera, ImageSize, ViewportSize};

use crate::{
    animation::{CameraAnimator, Easing},
    camera::fit_camera,
    imaging::{image_size, ImageOps, PixelBuffer},
};

/// The single owner of the camera, the working image and the pristine
/// original. Nothing here is shared; callers serialize access by owning it.
pub struct Session {
    pub(crate) animator: CameraAnimator,
    pub(crate) pixels: PixelBuffer,
    pub(crate) original: PixelBuffer,
    pub(crate) viewport: ViewportSize,
    pub(crate) ops: Box<dyn ImageOps>,
    pub(crate) crop_dir: PathBuf,
}

impl Session {
    /// Starts with the original image fitted to `viewport`.
    pub fn new(original: PixelBuffer, viewport: ViewportSize, ops: Box<dyn ImageOps>) -> Self {
        let camera = fit_camera(image_size(&original), viewport);
        Self {
            animator: CameraAnimator::new(camera),
            pixels: original.clone(),
            original,
            viewport,
            ops,
            crop_dir: PathBuf::from("."),
        }
    }

    /// Directory for crops saved without an explicit output path.
    pub fn with_crop_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.crop_dir = dir.into();
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animator = self.animator.with_easing(easing);
        self
    }

    pub fn image_size(&self) -> ImageSize {
        image_size(&self.pixels)
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    pub fn animator(&self) -> &CameraAnimator {
        &self.animator
    }

    pub fn current_camera(&self, now: Instant) -> Camera {
        self.animator.current(now)
    }

    pub fn target_camera(&self) -> Camera {
        self.animator.target()
    }

    pub fn fit_camera(&self) -> Camera {
        fit_camera(self.image_size(), self.viewport)
    }

    pub fn tick(&mut self, now: Instant) -> Camera {
        self.animator.tick(now)
    }
}
