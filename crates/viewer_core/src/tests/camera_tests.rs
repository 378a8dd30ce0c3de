use super::*;
use shared::domain::{MAX_SCALE, MIN_SCALE};

const IMAGE: ImageSize = ImageSize {
    width: 800,
    height: 600,
};

#[test]
fn fit_uses_the_tighter_axis_and_centres_the_image() {
    let camera = fit_camera(IMAGE, ViewportSize::new(1100, 700));
    assert!((camera.scale - 700.0 / 600.0).abs() < 1e-12);
    assert_eq!((camera.cx, camera.cy), (400.0, 300.0));
}

#[test]
fn fit_survives_zero_sized_inputs() {
    let camera = fit_camera(ImageSize::new(0, 0), ViewportSize::new(0, 0));
    assert!(camera.scale >= MIN_SCALE && camera.scale <= MAX_SCALE);
}

#[test]
fn zoom_targets_are_clamped() {
    let camera = Camera::new(1.0, 10.0, 10.0);
    assert_eq!(zoom_target(camera, 1e9).scale, MAX_SCALE);
    assert_eq!(zoom_target(camera, 0.0).scale, MIN_SCALE);
    assert_eq!(zoom_target(camera, -3.0).scale, MIN_SCALE);
    assert_eq!(set_zoom_target(camera, 0.001).scale, MIN_SCALE);
    assert_eq!(set_zoom_target(camera, 12.0).scale, 12.0);
    assert_eq!((zoom_target(camera, 2.0).cx, zoom_target(camera, 2.0).cy), (10.0, 10.0));
}

#[test]
fn pan_divides_screen_delta_by_scale() {
    let camera = Camera::new(2.0, 400.0, 300.0);
    let moved = pan_target(camera, 100.0, -50.0, IMAGE);
    assert_eq!((moved.cx, moved.cy), (450.0, 275.0));
    assert_eq!(moved.scale, 2.0);
}

#[test]
fn pan_round_trip_restores_centre() {
    let camera = Camera::new(0.75, 321.0, 123.0);
    let there = pan_target(camera, 90.0, 45.0, IMAGE);
    let back = pan_target(there, -90.0, -45.0, IMAGE);
    assert!((back.cx - camera.cx).abs() < 1e-9);
    assert!((back.cy - camera.cy).abs() < 1e-9);
}

#[test]
fn pan_clamps_centre_to_image_bounds() {
    let camera = Camera::new(1.0, 400.0, 300.0);
    let moved = pan_target(camera, 10_000.0, -10_000.0, IMAGE);
    assert_eq!((moved.cx, moved.cy), (800.0, 0.0));
}

#[test]
fn visible_rect_is_viewport_over_scale() {
    let camera = Camera::new(2.0, 400.0, 300.0);
    let rect = visible_rect(camera, ViewportSize::new(200, 100), IMAGE);
    assert_eq!(
        rect,
        CropRect {
            left: 350,
            top: 275,
            right: 450,
            bottom: 325,
        }
    );
}

#[test]
fn visible_rect_is_clipped_to_image() {
    let camera = Camera::new(0.5, 400.0, 300.0);
    let rect = visible_rect(camera, ViewportSize::new(1100, 700), IMAGE);
    assert_eq!(
        rect,
        CropRect {
            left: 0,
            top: 0,
            right: 800,
            bottom: 600,
        }
    );
}

#[test]
fn visible_rect_outside_image_collapses() {
    let camera = Camera::new(10.0, -500.0, 300.0);
    let rect = visible_rect(camera, ViewportSize::new(100, 100), IMAGE);
    assert!(rect.is_empty());
}
