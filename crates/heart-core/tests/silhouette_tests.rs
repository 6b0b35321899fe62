// Alpha-buffer scanning: stride, threshold, and anchor-relative output.

use glam::Vec2;
use heart_core::scan_alpha;

fn buffer(width: usize, height: usize, opaque: &[(usize, usize, u8)]) -> Vec<u8> {
    let mut rgba = vec![0u8; width * height * 4];
    for &(x, y, a) in opaque {
        rgba[(y * width + x) * 4 + 3] = a;
    }
    rgba
}

#[test]
fn finds_opaque_pixels_on_the_sampling_stride() {
    // (3, 3) is opaque but sits off the stride-2 grid and must be skipped.
    let rgba = buffer(8, 8, &[(2, 2, 255), (4, 2, 255), (3, 3, 255)]);
    let points = scan_alpha(&rgba, 8, 8, 1.0);
    assert_eq!(points, vec![Vec2::new(-2.0, -3.0), Vec2::new(0.0, -3.0)]);
}

#[test]
fn threshold_is_strictly_greater_than() {
    let at_threshold = buffer(8, 8, &[(0, 0, 128)]);
    assert!(scan_alpha(&at_threshold, 8, 8, 0.0).is_empty());

    let above = buffer(8, 8, &[(0, 0, 129)]);
    let points = scan_alpha(&above, 8, 8, 0.0);
    assert_eq!(points, vec![Vec2::new(-4.0, -4.0)]);
}

#[test]
fn transparent_or_empty_buffers_yield_no_points() {
    let transparent = vec![0u8; 8 * 8 * 4];
    assert!(scan_alpha(&transparent, 8, 8, 0.0).is_empty());
    assert!(scan_alpha(&[], 0, 0, 0.0).is_empty());
}

#[test]
fn y_offset_shifts_points_against_the_anchor() {
    let rgba = buffer(8, 8, &[(4, 4, 255)]);
    let without = scan_alpha(&rgba, 8, 8, 0.0);
    let with = scan_alpha(&rgba, 8, 8, 10.0);
    assert_eq!(without, vec![Vec2::new(0.0, 0.0)]);
    assert_eq!(with, vec![Vec2::new(0.0, -10.0)]);
}
