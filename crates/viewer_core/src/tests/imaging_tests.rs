use super::*;
use image::Rgba;

fn checkerboard(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            Rgba([200, 200, 200, 255])
        } else {
            Rgba([40, 40, 40, 255])
        }
    })
}

#[test]
fn unsharp_mask_keeps_dimensions_and_flat_regions() {
    let flat = PixelBuffer::from_pixel(16, 9, Rgba([90, 120, 150, 255]));
    let out = ImageCrateOps.unsharp_mask(&flat, 2.0, 320, 3);
    assert_eq!(out.dimensions(), (16, 9));
    assert_eq!(out, flat);
}

#[test]
fn unsharp_mask_increases_edge_contrast() {
    let board = checkerboard(32, 32);
    let out = ImageCrateOps.unsharp_mask(&board, 2.0, 320, 3);
    assert_eq!(out.dimensions(), board.dimensions());

    // Corner pixels of a bright square sit next to dark neighbours.
    let before = board.get_pixel(3, 3).0[0];
    let after = out.get_pixel(3, 3).0[0];
    assert!(after > before, "expected brighter edge, {before} -> {after}");
    assert_eq!(out.get_pixel(3, 3).0[3], 255);
}

#[test]
fn crop_region_extracts_the_rectangle() {
    let board = checkerboard(32, 32);
    let rect = CropRect {
        left: 4,
        top: 8,
        right: 12,
        bottom: 10,
    };
    let cropped = ImageCrateOps.crop_region(&board, rect);
    assert_eq!(cropped.dimensions(), (8, 2));
    assert_eq!(cropped.get_pixel(0, 0), board.get_pixel(4, 8));
}

#[test]
fn save_then_load_round_trips_through_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("board.png");
    let board = checkerboard(10, 6);
    ImageCrateOps.save_to_file(&board, &path).expect("save");

    let loaded = load_image(&path).expect("load");
    assert_eq!(image_size(&loaded), ImageSize::new(10, 6));
    assert_eq!(loaded, board);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_image(&dir.path().join("missing.png")).expect_err("missing");
    assert!(err.to_string().contains("missing.png"));
}
