use permit::ResultRegion;
use scene::LoadIndicator;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window missing"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document missing"))
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{id} missing")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has an unexpected element type")))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (dim(window.inner_width()), dim(window.inner_height()))
}

pub fn element_size(element: &Element) -> (f64, f64) {
    (element.client_width() as f64, element.client_height() as f64)
}

/// The "loading heritage view" text element. Absent elements are ignored.
#[derive(Debug, Clone)]
pub struct LoaderElement(Option<HtmlElement>);

impl LoaderElement {
    pub fn find(document: &Document, id: &str) -> Self {
        let element = element_by_id::<HtmlElement>(document, id).ok();
        if element.is_none() {
            log::debug!("loader element #{id} not found");
        }
        Self(element)
    }
}

impl LoadIndicator for LoaderElement {
    fn hide(&self) {
        if let Some(el) = &self.0 {
            if let Err(err) = el.style().set_property("display", "none") {
                log::warn!("failed to hide loader: {err:?}");
            }
        }
    }

    fn show_fallback(&self, message: &str) {
        if let Some(el) = &self.0 {
            el.set_inner_text(message);
        }
    }
}

/// Element whose markup is replaced by verification output.
pub struct DomRegion(pub Element);

impl ResultRegion for DomRegion {
    fn set_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }
}
