#![cfg(target_arch = "wasm32")]
use cubewalk_core::{Camera, Instructions, Scene, Session};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod aframe;
mod audio;
mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod overlay;

use constants::{CAMERA_SELECTOR, SCENE_SELECTOR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cubewalk-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Resolves once A-Frame has finished initialising every entity.
async fn wait_for_scene(scene_el: &web::Element) -> anyhow::Result<()> {
    if aframe::has_loaded(scene_el) {
        return Ok(());
    }
    let target: web::EventTarget = scene_el.clone().into();
    let loaded = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::once(&target, "loaded", move || {
            _ = resolve.call0(&JsValue::NULL);
        });
    });
    JsFuture::from(loaded)
        .await
        .map_err(|e| anyhow::anyhow!("scene load failed: {:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scene_el = document
        .query_selector(SCENE_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing <{}>", SCENE_SELECTOR))?;
    wait_for_scene(&scene_el).await?;

    let camera_el = document
        .query_selector(CAMERA_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing camera entity"))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let camera = aframe::camera_snapshot(&camera_el).unwrap_or_else(|| {
        log::warn!("camera transform unavailable; using default rig");
        Camera::default()
    });
    let mut projector = effects::Projector::new(document.clone(), scene_el, camera_el);
    let mut scene = Scene::new();
    projector.adopt_existing(&mut scene);

    if overlay::instructions(&document).map_or(true, |t| t.trim().is_empty()) {
        overlay::set_instructions(&document, Instructions::Idle.text());
    }

    let session = Session::with_scene(scene, camera, rand::random());
    let ctx = Rc::new(RefCell::new(frame::FrameContext { session, projector }));

    events::wire_global_keydown(ctx.clone());
    events::wire_buttons(&document, ctx.clone());
    frame::start_loop(ctx);
    log::info!("cubewalk-web ready");
    Ok(())
}
