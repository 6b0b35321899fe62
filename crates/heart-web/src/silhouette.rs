use anyhow::anyhow;
use glam::Vec2;
use heart_core::{scan_alpha, TextSettings};
use web_sys as web;

/// Render the configured text once, read back the alpha channel, clear
/// the canvas again, and scan for glyph pixels. The paint exists only for
/// sampling; the canvas comes back empty.
///
/// Empty text short-circuits to an empty point set, which downstream
/// emission treats as "no text source".
pub fn sample(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    text: &TextSettings,
) -> anyhow::Result<Vec<Vec2>> {
    if text.content.is_empty() {
        return Ok(Vec::new());
    }
    let width = canvas.width();
    let height = canvas.height();

    ctx.set_font(&format!("bold {}px Arial", text.size_px));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("white");
    ctx.fill_text(
        &text.content,
        width as f64 / 2.0,
        height as f64 / 2.0 + text.y_offset as f64,
    )
    .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

    let rgba = image.data();
    let points = scan_alpha(&rgba, width, height, text.y_offset);
    log::info!(
        "silhouette: {} emission points for {:?}",
        points.len(),
        text.content
    );
    Ok(points)
}
