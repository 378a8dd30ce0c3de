pub mod animation;
pub mod camera;
mod dispatch;
pub mod imaging;
pub mod runtime;
pub mod session;
pub mod surface;

pub use animation::{AnimationJob, CameraAnimator, Easing};
pub use dispatch::{auto_crop_name, sharpen_percent};
pub use imaging::{load_image, ImageCrateOps, ImageOps, PixelBuffer};
pub use runtime::{spawn_viewer, ViewerClosed, ViewerHandle};
pub use session::Session;
pub use surface::RenderSurface;
