//! Pointer tilt and resize wiring for a mounted viewer.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use runtime::Debouncer;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent};

use crate::dom;
use crate::viewer::ViewerHandle;

pub fn install(handle: Rc<ViewerHandle>, resize_debounce_ms: u32) -> Result<(), JsValue> {
    install_pointer_tilt(handle.clone())?;
    install_resize(handle, resize_debounce_ms)
}

/// Pointer anywhere in the window tilts the emblem.
fn install_pointer_tilt(handle: Rc<ViewerHandle>) -> Result<(), JsValue> {
    let window = dom::window()?;
    let viewport = window.clone();
    let mousemove = Closure::wrap(Box::new(move |e: MouseEvent| {
        let (w, h) = dom::viewport_size(&viewport);
        handle.pointer_moved(e.client_x() as f64, e.client_y() as f64, w, h);
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
    mousemove.forget();
    Ok(())
}

/// Window resizes are coalesced; only the last one of a burst reaches the
/// viewer. Each event replaces the pending `Timeout`, which clears it.
fn install_resize(handle: Rc<ViewerHandle>, delay_ms: u32) -> Result<(), JsValue> {
    let debouncer: Debouncer<Timeout> = Debouncer::new(delay_ms);
    let onresize = Closure::wrap(Box::new(move |_e: Event| {
        let handle = handle.clone();
        debouncer.arm(Timeout::new(debouncer.delay_ms(), move || handle.resize()));
    }) as Box<dyn FnMut(Event)>);
    dom::window()?.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();
    Ok(())
}
