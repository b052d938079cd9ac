//! Thin bindings to the A-Frame / three.js objects the page provides.
//!
//! Everything goes through `js_sys::Reflect` so no extra JS glue is needed.
//! Any missing property or method yields `None` and callers skip the update.

use cubewalk_core::{Camera, Rgb};
use glam::Vec3;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{CUBE_TAG, PICKUPABLE_ATTR};

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call(target: &JsValue, method: &str, args: &Array) -> Option<JsValue> {
    let f = get(target, method)?.dyn_into::<Function>().ok()?;
    f.apply(target, args).ok()
}

#[inline]
fn object3d(el: &web::Element) -> Option<JsValue> {
    get(el.as_ref(), "object3D")
}

fn new_vector3() -> Option<JsValue> {
    let three = get(&js_sys::global(), "THREE")?;
    let ctor = get(&three, "Vector3")?.dyn_into::<Function>().ok()?;
    Reflect::construct(&ctor, &Array::new()).ok()
}

fn read_vec3(v: &JsValue) -> Option<Vec3> {
    let x = get(v, "x")?.as_f64()? as f32;
    let y = get(v, "y")?.as_f64()? as f32;
    let z = get(v, "z")?.as_f64()? as f32;
    Some(Vec3::new(x, y, z))
}

/// `object3D.getWorldPosition` / `getWorldDirection` style query.
fn world_query(el: &web::Element, method: &str) -> Option<Vec3> {
    let obj = object3d(el)?;
    let out = new_vector3()?;
    call(&obj, method, &Array::of1(&out))?;
    read_vec3(&out)
}

pub fn world_position(el: &web::Element) -> Option<Vec3> {
    world_query(el, "getWorldPosition")
}

/// Snapshot of the camera rig. The direction is the rig's raw local +Z.
pub fn camera_snapshot(camera_el: &web::Element) -> Option<Camera> {
    let position = world_position(camera_el)?;
    let direction = world_query(camera_el, "getWorldDirection")?;
    Some(Camera::new(position, direction))
}

pub fn has_loaded(scene_el: &web::Element) -> bool {
    get(scene_el.as_ref(), "hasLoaded")
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

#[inline]
fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

pub fn set_position(el: &web::Element, position: Vec3) {
    _ = el.set_attribute("position", &vec3_attr(position));
}

pub fn set_color(el: &web::Element, color: Rgb) {
    _ = el.set_attribute("color", &color.to_string());
}

pub fn set_visible(el: &web::Element, visible: bool) {
    _ = el.set_attribute("visible", if visible { "true" } else { "false" });
}

/// Single-property update, i.e. `el.setAttribute('material', 'opacity', 0.35)`.
pub fn set_component_property(el: &web::Element, component: &str, prop: &str, value: &JsValue) {
    let args = Array::of3(&JsValue::from_str(component), &JsValue::from_str(prop), value);
    _ = call(el.as_ref(), "setAttribute", &args);
}

pub fn set_opacity(el: &web::Element, opacity: f32) {
    set_component_property(el, "material", "transparent", &JsValue::from_bool(opacity < 1.0));
    set_component_property(el, "material", "opacity", &JsValue::from_f64(opacity as f64));
}

/// Move `child`'s three.js object under `parent`'s, leaving the DOM untouched.
pub fn reparent(child: &web::Element, parent: &web::Element) -> Option<()> {
    let child_obj = object3d(child)?;
    let parent_obj = object3d(parent)?;
    call(&parent_obj, "add", &Array::of1(&child_obj)).map(|_| ())
}

pub fn create_cube(
    document: &web::Document,
    scene_el: &web::Element,
    position: Vec3,
    color: Rgb,
) -> Option<web::Element> {
    let cube = document.create_element(CUBE_TAG).ok()?;
    set_position(&cube, position);
    set_color(&cube, color);
    _ = cube.set_attribute(PICKUPABLE_ATTR, "");
    scene_el.append_child(&cube).ok()?;
    Some(cube)
}

/// Colour declared in markup, if it parses.
pub fn declared_color(el: &web::Element) -> Option<Rgb> {
    el.get_attribute("color").as_deref().and_then(Rgb::parse)
}
