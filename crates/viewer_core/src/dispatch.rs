use std::{path::PathBuf, time::Instant};

use chrono::{Local, NaiveDateTime};
use shared::protocol::Command;
use tracing::{debug, info, warn};

use crate::{
    camera::{pan_target, set_zoom_target, visible_rect, zoom_target},
    imaging::image_size,
    session::Session,
};

const MAX_SHARPEN_AMOUNT: f64 = 5.0;
const UNSHARP_RADIUS: f32 = 2.0;
const UNSHARP_THRESHOLD: i32 = 3;

/// `crop_<YYYYMMDD_HHMMSS>.png`
pub fn auto_crop_name(at: NaiveDateTime) -> String {
    format!("crop_{}.png", at.format("%Y%m%d_%H%M%S"))
}

/// Unsharp strength for a sharpen amount, after clamping it to `[0, 5]`.
pub fn sharpen_percent(amount: f64) -> i32 {
    let amount = amount.clamp(0.0, MAX_SHARPEN_AMOUNT);
    (120.0 + 200.0 * amount) as i32
}

impl Session {
    /// Applies one command. Nothing is reported back; failures are logged
    /// and leave the session as it was.
    ///
    /// Relative camera commands start from the camera as it is at `now`,
    /// mid-animation included.
    pub fn dispatch(&mut self, command: Command, now: Instant) {
        debug!(command = command.name(), "dispatching command");

        match command {
            Command::Zoom { factor, ms } => {
                let target = zoom_target(self.animator.current(now), factor);
                self.animator.request_transition(target, ms, now);
            }
            Command::SetZoom { scale, ms } => {
                let target = set_zoom_target(self.animator.current(now), scale);
                self.animator.request_transition(target, ms, now);
            }
            Command::Pan { dx, dy, ms } => {
                let target = pan_target(self.animator.current(now), dx, dy, self.image_size());
                self.animator.request_transition(target, ms, now);
            }
            Command::Fit { ms } => {
                let target = self.fit_camera();
                self.animator.request_transition(target, ms, now);
            }
            Command::ResetImage => self.reset_image(),
            Command::Sharpen { amount } => self.sharpen(amount),
            Command::CropView { out } => self.crop_view(out, now),
            Command::Unknown => debug!("ignoring unknown command"),
        }
    }

    fn reset_image(&mut self) {
        self.pixels = self.original.clone();
        let fitted = self.fit_camera();
        self.animator.snap(fitted);
    }

    fn sharpen(&mut self, amount: f64) {
        let percent = sharpen_percent(amount);
        let sharpened = self
            .ops
            .unsharp_mask(&self.pixels, UNSHARP_RADIUS, percent, UNSHARP_THRESHOLD);

        if sharpened.dimensions() != self.pixels.dimensions() {
            warn!(
                expected = ?self.pixels.dimensions(),
                got = ?sharpened.dimensions(),
                "sharpen changed image dimensions; result discarded"
            );
            return;
        }
        self.pixels = sharpened;
    }

    fn crop_view(&mut self, out: Option<String>, now: Instant) {
        let camera = self.animator.current(now);
        let rect = visible_rect(camera, self.viewport, image_size(&self.pixels));
        if rect.is_empty() {
            debug!(?rect, "visible region is empty; nothing to crop");
            return;
        }

        let path = match out {
            Some(out) => PathBuf::from(out),
            None => self.crop_dir.join(auto_crop_name(Local::now().naive_local())),
        };

        let cropped = self.ops.crop_region(&self.pixels, rect);
        match self.ops.save_to_file(&cropped, &path) {
            Ok(()) => info!(path = %path.display(), ?rect, "saved crop"),
            Err(error) => {
                let error = format!("{error:#}");
                warn!(path = %path.display(), %error, "failed to save crop");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
