#![cfg(target_arch = "wasm32")]
//! Browser front-end: canvas setup, one-shot silhouette sampling, and the
//! requestAnimationFrame loop that drives the core simulation.

use heart_core::{Settings, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod frame;
mod silhouette;
mod surface;

/// Fraction of the canvas height the text anchor sits below the midpoint.
const TEXT_Y_OFFSET_FACTOR: f32 = 0.15;

thread_local! {
    static STOP_FLAG: RefCell<Option<Rc<RefCell<bool>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Stop the animation loop. The in-flight frame completes and no further
/// frames are scheduled; intended for page teardown.
#[wasm_bindgen]
pub fn stop() {
    STOP_FLAG.with(|f| {
        if let Some(flag) = f.borrow().as_ref() {
            *flag.borrow_mut() = false;
        }
    });
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("heart-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #heart-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = dom::context_2d(&canvas)?;

    dom::sync_canvas_backing_size(&canvas);
    dom::wire_canvas_resize(&canvas);

    let mut settings = Settings::default();
    settings.text.y_offset = canvas.height() as f32 * TEXT_Y_OFFSET_FACTOR;

    // One-shot precomputation keyed to the current canvas size and text.
    let silhouette = silhouette::sample(&ctx, &canvas, &settings.text)?;

    let seed = js_sys::Date::now() as u64;
    let sim = Simulation::new(settings.clone(), silhouette, seed);
    let surface = surface::CanvasSurface::new(ctx, settings.particles.color.clone());

    let running = Rc::new(RefCell::new(true));
    STOP_FLAG.with(|f| *f.borrow_mut() = Some(running.clone()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim, surface, canvas, running,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
