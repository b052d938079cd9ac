use cubewalk_core::input::action_for_button;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::BUTTON_IDS;
use crate::dom;
use crate::frame::FrameContext;

// On-screen mirrors of the keyboard actions, plus the forward step.
pub fn wire_buttons(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) {
    for id in BUTTON_IDS {
        let Some(action) = action_for_button(id) else {
            log::warn!("[buttons] no action bound to #{}", id);
            continue;
        };
        let ctx = ctx.clone();
        dom::add_click_listener(document, id, move || {
            ctx.borrow_mut().dispatch(action);
        });
    }
}
