use gloo_net::http::Request;
use permit::{PERMIT_PARAM, PermitTransport, TransportError, Verification};
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::config::SiteConfig;
use crate::dom::{self, DomRegion};

/// Browser `fetch` via gloo-net.
pub struct GlooTransport;

impl PermitTransport for GlooTransport {
    async fn fetch(&self, endpoint: &str, permit: &str) -> Result<String, TransportError> {
        let resp = Request::get(endpoint)
            .query([(PERMIT_PARAM, permit)])
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        resp.text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Reads the search box and renders the lookup into the result region.
pub async fn verify_from_page(config: &SiteConfig) -> Result<Option<Verification>, JsValue> {
    let document = dom::document()?;
    let input = dom::element_by_id::<HtmlInputElement>(&document, &config.permit_input_id)?;
    let region = DomRegion(dom::element_by_id(&document, &config.permit_result_id)?);
    Ok(permit::verify(&GlooTransport, &region, &config.verify_endpoint, &input.value()).await)
}
