use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::FrameContext;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &Rc<RefCell<FrameContext>>) {
    ctx.borrow_mut().handle_key(&ev.key());
}

pub fn wire_global_keydown(ctx: Rc<RefCell<FrameContext>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &ctx);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
