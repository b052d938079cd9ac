use cubewalk_core::{Action, Effects, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::aframe;
use crate::effects::Projector;

pub struct FrameContext {
    pub session: Session,
    pub projector: Projector,
}

impl FrameContext {
    /// Pull the live camera transform into the session. Keeps the previous
    /// snapshot when the rig cannot be read.
    fn sync_camera(&mut self) {
        if let Some(camera) = aframe::camera_snapshot(self.projector.camera_el()) {
            self.session.sync_camera(camera);
        }
    }

    fn project(&mut self, effects: Effects) {
        self.projector.apply(effects.iter());
    }

    pub fn handle_key(&mut self, key: &str) {
        self.sync_camera();
        let fx = self.session.handle_key(key);
        self.project(fx);
    }

    pub fn dispatch(&mut self, action: Action) {
        self.sync_camera();
        let fx = self.session.dispatch(action);
        self.project(fx);
    }

    pub fn frame(&mut self) {
        self.sync_camera();
        let fx = self.session.tick();
        self.project(fx);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
