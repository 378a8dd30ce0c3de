//! Pixel buffers and the filter/codec operations the session relies on.

use std::path::Path;

use anyhow::Context;
use image::{imageops, RgbaImage};
use shared::domain::{CropRect, ImageSize};

pub type PixelBuffer = RgbaImage;

pub trait ImageOps: Send {
    /// Unsharp mask: `radius` is the blur sigma, `percent` the strength and
    /// `threshold` the minimum per-channel difference that gets boosted.
    fn unsharp_mask(
        &self,
        buffer: &PixelBuffer,
        radius: f32,
        percent: i32,
        threshold: i32,
    ) -> PixelBuffer;

    fn crop_region(&self, buffer: &PixelBuffer, rect: CropRect) -> PixelBuffer;

    fn save_to_file(&self, buffer: &PixelBuffer, path: &Path) -> anyhow::Result<()>;
}

/// [`ImageOps`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateOps;

impl ImageOps for ImageCrateOps {
    fn unsharp_mask(
        &self,
        buffer: &PixelBuffer,
        radius: f32,
        percent: i32,
        threshold: i32,
    ) -> PixelBuffer {
        let blurred = imageops::blur(buffer, radius);
        let mut sharpened = buffer.clone();

        // Alpha is left alone.
        for (pixel, soft) in sharpened.pixels_mut().zip(blurred.pixels()) {
            for channel in 0..3 {
                let value = i32::from(pixel.0[channel]);
                let diff = value - i32::from(soft.0[channel]);
                if diff.abs() >= threshold {
                    pixel.0[channel] = (value + diff * percent / 100).clamp(0, 255) as u8;
                }
            }
        }

        sharpened
    }

    fn crop_region(&self, buffer: &PixelBuffer, rect: CropRect) -> PixelBuffer {
        imageops::crop_imm(buffer, rect.left, rect.top, rect.width(), rect.height()).to_image()
    }

    fn save_to_file(&self, buffer: &PixelBuffer, path: &Path) -> anyhow::Result<()> {
        buffer
            .save(path)
            .with_context(|| format!("failed to save image to '{}'", path.display()))
    }
}

pub fn load_image(path: &Path) -> anyhow::Result<PixelBuffer> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to open image '{}'", path.display()))?;
    Ok(decoded.to_rgba8())
}

pub fn image_size(buffer: &PixelBuffer) -> ImageSize {
    ImageSize::new(buffer.width(), buffer.height())
}

#[cfg(test)]
#[path = "tests/imaging_tests.rs"]
mod tests;
