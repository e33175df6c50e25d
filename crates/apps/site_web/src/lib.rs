use console_error_panic_hook::set_once;
use runtime::OneShot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod config;
mod dom;
mod interaction;
mod lazy;
mod permit_form;
pub mod ui;
mod viewer;
mod wgpu;

pub use config::SiteConfig;
use dom::LoaderElement;

thread_local! {
    static SITE: RefCell<Rc<SiteConfig>> = RefCell::new(Rc::new(SiteConfig::default()));
}

fn site_config() -> Rc<SiteConfig> {
    SITE.with(|site| site.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();

    let document = dom::document()?;
    let text = document
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = Rc::new(SiteConfig::from_page_text(text.as_deref()));
    SITE.with(|site| *site.borrow_mut() = config.clone());

    mount(&config)
}

/// Wires every page feature whose elements are present.
fn mount(config: &Rc<SiteConfig>) -> Result<(), JsValue> {
    if let Err(err) = mount_viewer(config) {
        log::error!("heritage viewer disabled: {err:?}");
    }
    if let Err(err) = ui::install_suggestion_form(&config.suggestion_form_id) {
        log::warn!("suggestion form disabled: {err:?}");
    }
    ui::install_smooth_scroll()
}

fn mount_viewer(config: &Rc<SiteConfig>) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(container) = document.get_element_by_id(&config.container_id) else {
        log::warn!("no #{} on this page; viewer not started", config.container_id);
        return Ok(());
    };
    let container = container.dyn_into::<HtmlElement>()?;
    let loader = LoaderElement::find(&document, &config.loader_id);

    let guard = OneShot::new();
    let site = config.clone();
    let target = container.clone();
    let activate = move || {
        if !guard.fire() {
            return;
        }
        log::info!("starting heritage viewer");
        let started = viewer::initialize(&target, site.viewer_config(), loader.clone())
            .and_then(|handle| interaction::install(handle, site.resize_debounce_ms));
        if let Err(err) = started {
            log::error!("viewer start-up failed: {err:?}");
        }
    };

    if config.lazy {
        lazy::observe_first_visibility(&container, config.visibility_threshold, activate)
    } else {
        activate();
        Ok(())
    }
}

/// Looks up the permit typed into the search box.
///
/// Exposed for the page's verify button.
#[wasm_bindgen(js_name = verifyPermit)]
pub async fn verify_permit() -> Result<(), JsValue> {
    let config = site_config();
    permit_form::verify_from_page(&config).await.map(|_| ())
}
