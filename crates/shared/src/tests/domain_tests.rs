use super::*;

#[test]
fn scale_is_clamped_on_construction() {
    assert_eq!(Camera::new(0.0, 1.0, 2.0).scale, MIN_SCALE);
    assert_eq!(Camera::new(1e6, 1.0, 2.0).scale, MAX_SCALE);
    assert_eq!(Camera::new(f64::NAN, 1.0, 2.0).scale, MIN_SCALE);
    assert_eq!(Camera::new(3.5, 1.0, 2.0).scale, 3.5);
}

#[test]
fn lerp_hits_both_endpoints() {
    let a = Camera::new(1.0, 0.0, 100.0);
    let b = Camera::new(3.0, 50.0, 0.0);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
    assert_eq!(a.lerp(&b, 0.5), Camera::new(2.0, 25.0, 50.0));
}

#[test]
fn crop_rect_reports_degenerate_sizes() {
    let rect = CropRect {
        left: 10,
        top: 10,
        right: 10,
        bottom: 40,
    };
    assert_eq!(rect.width(), 0);
    assert!(rect.is_empty());

    let rect = CropRect {
        left: 0,
        top: 0,
        right: 4,
        bottom: 3,
    };
    assert_eq!((rect.width(), rect.height()), (4, 3));
    assert!(!rect.is_empty());
}
