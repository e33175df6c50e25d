use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Calls `on_visible` the first time `target` is at least `threshold`
/// visible, then stops observing.
pub fn observe_first_visibility(
    target: &Element,
    threshold: f64,
    mut on_visible: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_visible();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    callback.forget();
    Ok(())
}
