//! Emblem viewer runtime: canvas, GPU surface, model load and render loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use formats::{ModelLoadError, decode_emblem};
use gloo_net::http::Request;
use gpu::{Globals, SurfaceSize};
use scene::components::Mesh;
use scene::{Viewer, ViewerConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::dom::{self, LoaderElement};
use crate::wgpu::{WgpuContext, init_wgpu, render_frame, resize_wgpu, upload_emblem};

/// Owns everything the viewer needs for the lifetime of the page.
///
/// Handlers receive a clone of the `Rc` instead of reaching for globals.
pub struct ViewerHandle {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    viewer: RefCell<Viewer>,
    gpu: RefCell<Option<WgpuContext>>,
    loader: LoaderElement,
    render_failures: Cell<u64>,
}

impl ViewerHandle {
    fn surface_size(&self) -> SurfaceSize {
        let (w, h) = dom::element_size(&self.container);
        let dpr = dom::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let max_ratio = self.viewer.borrow().config().max_pixel_ratio;
        SurfaceSize::from_css(w, h, dpr, max_ratio)
    }

    /// Brings camera aspect and surface size in line with the container.
    pub fn resize(&self) {
        let (w, h) = dom::element_size(&self.container);
        if !self.viewer.borrow_mut().resize(w, h) {
            return;
        }
        let size = self.surface_size();
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        if let Some(ctx) = self.gpu.borrow_mut().as_mut() {
            resize_wgpu(ctx, size);
        }
    }

    pub fn pointer_moved(&self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        self.viewer
            .borrow_mut()
            .pointer_moved(x, y, viewport_width, viewport_height);
    }

    /// One render-loop iteration.
    fn frame(&self) {
        let mut viewer = self.viewer.borrow_mut();
        viewer.tick();

        let mut gpu = self.gpu.borrow_mut();
        let Some(ctx) = gpu.as_mut() else {
            return;
        };
        if let Some(emblem) = viewer.emblem() {
            if !ctx.has_emblem() {
                upload_emblem(ctx, &emblem.mesh);
            }
        }

        let globals = Globals::from_viewer(&viewer);
        if let Err(err) = render_frame(ctx, &globals) {
            let failures = self.render_failures.get();
            if failures == 0 {
                log::warn!("render failed: {err:?}");
            }
            self.render_failures.set(failures + 1);
        }
    }
}

/// Mounts the viewer inside `container` and starts it.
///
/// The surface, the model and the render loop come up independently; the
/// loop renders an empty scene until both GPU and model are ready.
pub fn initialize(
    container: &HtmlElement,
    config: ViewerConfig,
    loader: LoaderElement,
) -> Result<Rc<ViewerHandle>, JsValue> {
    let document = dom::document()?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    let style = canvas.style();
    style.set_property("display", "block")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    container.append_child(&canvas)?;

    let (w, h) = dom::element_size(container);
    let model_path = config.model_path.clone();
    let handle = Rc::new(ViewerHandle {
        container: container.clone(),
        canvas: canvas.clone(),
        viewer: RefCell::new(Viewer::new(config, w, h)),
        gpu: RefCell::new(None),
        loader,
        render_failures: Cell::new(0),
    });

    let size = handle.surface_size();
    canvas.set_width(size.width);
    canvas.set_height(size.height);

    {
        let handle = handle.clone();
        spawn_local(async move {
            match init_wgpu(canvas, size).await {
                Ok(ctx) => {
                    *handle.gpu.borrow_mut() = Some(ctx);
                    // The container may have changed while the adapter was pending.
                    handle.resize();
                }
                Err(err) => log::error!("wgpu init error: {err:?}"),
            }
        });
    }

    {
        let handle = handle.clone();
        spawn_local(async move {
            let result = load_emblem(&model_path).await;
            handle
                .viewer
                .borrow_mut()
                .finish_load(result, &handle.loader);
        });
    }

    start_render_loop(handle.clone())?;
    Ok(handle)
}

async fn load_emblem(path: &str) -> Result<Mesh, ModelLoadError> {
    let fetch_err = |message: String| ModelLoadError::Fetch {
        path: path.to_string(),
        message,
    };
    let resp = Request::get(path)
        .send()
        .await
        .map_err(|e| fetch_err(e.to_string()))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    let expected = resp.headers().get("content-length");
    let bytes = resp.binary().await.map_err(|e| fetch_err(e.to_string()))?;
    log::debug!("{path}: {}", load_progress(bytes.len(), expected.as_deref()));
    decode_emblem(&bytes)
}

/// "N bytes (P% loaded)" when the server announced a length, else "N bytes".
fn load_progress(received: usize, content_length: Option<&str>) -> String {
    match content_length
        .and_then(|len| len.trim().parse::<u64>().ok())
        .filter(|&len| len > 0)
    {
        Some(total) => format!(
            "{received} bytes ({:.0}% loaded)",
            received as f64 / total as f64 * 100.0
        ),
        None => format!("{received} bytes"),
    }
}

type RafClosure = Closure<dyn FnMut(f64)>;

fn request_animation_frame(callback: &RafClosure) -> Result<i32, JsValue> {
    dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Re-schedules itself every display frame for the rest of the page's life.
fn start_render_loop(handle: Rc<ViewerHandle>) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        handle.frame();
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                log::error!("render loop stopped: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(())
}
