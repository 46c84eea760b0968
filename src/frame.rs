use crate::constants::MAX_FRAME_DT_MS;
use crate::render;
use instant::Instant;
use showcase_core::{SceneSession, TransitionEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<SceneSession>>,
    pub gpu: Rc<RefCell<render::GpuState>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        let update = {
            let mut session = self.session.borrow_mut();
            session.resize(w as f32, h as f32);
            session.tick(dt)
        };
        for ev in &update.events {
            match ev {
                TransitionEvent::Started => log::debug!("[transition] started"),
                TransitionEvent::Swapped => {}
                TransitionEvent::Finished => log::info!("[transition] finished"),
            }
        }
        if let Some(to) = update.swapped_to {
            log::info!("[transition] now showing map{}", to.map_number());
        }

        let mut gpu = self.gpu.borrow_mut();
        gpu.resize_if_needed(w, h);
        match gpu.render(&self.session.borrow()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[render] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[frame] render loop started");
}
