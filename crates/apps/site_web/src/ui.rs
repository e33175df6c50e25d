//! Page conveniences: suggestion box and smooth in-page navigation.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

pub const SUGGESTION_THANKS: &str =
    "Thank you for your suggestion! It has been sent to the ASC Secretariat.";

/// Element id targeted by a same-page link, e.g. `#about` -> `about`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Acknowledges non-empty suggestions and clears the field. Nothing is sent
/// anywhere.
pub fn install_suggestion_form(form_id: &str) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(form) = document.get_element_by_id(form_id) else {
        log::debug!("no suggestion form #{form_id}");
        return Ok(());
    };
    let Some(input) = form.query_selector("input")? else {
        log::warn!("suggestion form #{form_id} has no input");
        return Ok(());
    };
    let input = input.dyn_into::<HtmlInputElement>()?;

    let onsubmit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        if input.value().is_empty() {
            return;
        }
        if let Ok(window) = dom::window() {
            if let Err(err) = window.alert_with_message(SUGGESTION_THANKS) {
                log::warn!("alert failed: {err:?}");
            }
        }
        input.set_value("");
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
    onsubmit.forget();
    Ok(())
}

/// Same-page anchors scroll smoothly instead of jumping.
pub fn install_smooth_scroll() -> Result<(), JsValue> {
    let document = dom::document()?;
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let link = anchor.clone();
        let onclick = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = fragment_target(&href) else {
                return;
            };
            let Some(target) = dom::document().ok().and_then(|d| d.get_element_by_id(id)) else {
                log::debug!("anchor target #{id} not found");
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}
