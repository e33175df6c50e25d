use crate::query::PermitQuery;
use crate::render;
use crate::response::{PermitResponse, Verification};
use crate::transport::PermitTransport;

/// Where verification output is shown (the page's result element).
pub trait ResultRegion {
    fn set_html(&self, html: &str);
}

/// Runs one verification for a user submission and renders the outcome.
///
/// Blank input renders the validation message and returns `None` without
/// touching the transport. Network and decode failures render the soft
/// "not connected yet" message; they never propagate.
pub async fn verify<T, R>(transport: &T, region: &R, endpoint: &str, raw: &str) -> Option<Verification>
where
    T: PermitTransport,
    R: ResultRegion,
{
    let query = match PermitQuery::parse(raw) {
        Ok(query) => query,
        Err(err) => {
            region.set_html(&render::validation_error(&err));
            return None;
        }
    };

    region.set_html(render::VERIFYING_MARKUP);

    let outcome = match transport
        .fetch(endpoint, query.as_str())
        .await
        .and_then(|body| PermitResponse::from_json(&body))
    {
        Ok(response) => Verification::from(response),
        Err(err) => {
            log::info!("permit lookup unavailable: {err}");
            Verification::Unavailable
        }
    };

    region.set_html(&render::verification(&outcome));
    Some(outcome)
}
