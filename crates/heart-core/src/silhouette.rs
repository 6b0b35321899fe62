//! Pure half of text-silhouette sampling: scanning a pixel read-back for
//! glyph coverage. Rendering the text and reading the buffer back belong
//! to the drawing-surface side.

use glam::Vec2;

use crate::constants::{ALPHA_THRESHOLD, SAMPLE_STRIDE};

/// Collect emission points from an RGBA read-back of rendered text.
///
/// The buffer is scanned on [`SAMPLE_STRIDE`] in both axes; every sampled
/// pixel with alpha above [`ALPHA_THRESHOLD`] yields one point relative to
/// the text anchor `(width/2, height/2 + y_offset)`, so consumers can
/// re-add the anchor later. An empty or fully transparent buffer yields
/// an empty set.
pub fn scan_alpha(rgba: &[u8], width: u32, height: u32, y_offset: f32) -> Vec<Vec2> {
    let w = width as usize;
    let h = height as usize;
    let mut points = Vec::new();
    for y in (0..h).step_by(SAMPLE_STRIDE) {
        for x in (0..w).step_by(SAMPLE_STRIDE) {
            let idx = (y * w + x) * 4;
            let alpha = rgba.get(idx + 3).copied().unwrap_or(0);
            if alpha > ALPHA_THRESHOLD {
                points.push(Vec2::new(
                    x as f32 - width as f32 / 2.0,
                    y as f32 - height as f32 / 2.0 - y_offset,
                ));
            }
        }
    }
    points
}
