use crate::surface::CanvasSurface;
use glam::Vec2;
use heart_core::Simulation;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Simulation,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    /// Cleared by the host to stop re-registering with the scheduler.
    pub running: Rc<RefCell<bool>>,
    last_instant: Option<Instant>,
}

impl FrameContext {
    pub fn new(
        sim: Simulation,
        surface: CanvasSurface,
        canvas: web::HtmlCanvasElement,
        running: Rc<RefCell<bool>>,
    ) -> Self {
        Self {
            sim,
            surface,
            canvas,
            running,
            last_instant: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        // First frame advances nothing; dt starts once a previous tick exists.
        let dt = self
            .last_instant
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_instant = Some(now);

        let width = self.canvas.width();
        let height = self.canvas.height();
        self.surface.clear(width, height);

        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        self.sim.tick(dt, center);
        self.sim.draw(&mut self.surface);
    }
}

/// Drive [`FrameContext::frame`] from requestAnimationFrame until the
/// context's `running` flag is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        let keep_going = *frame_ctx_tick.borrow().running.borrow();
        if keep_going {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
