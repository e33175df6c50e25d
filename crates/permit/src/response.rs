use serde::Deserialize;
use serde_json::{Map, Value};

use crate::transport::TransportError;

/// JSON object returned by the verification endpoint.
///
/// Only `status == "success"` carries meaningful holder fields; any other
/// status, of any JSON type, is treated as "not found". Field values are kept
/// loosely typed since the backend may emit `null` or numbers for them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PermitResponse {
    fields: Map<String, Value>,
}

impl PermitResponse {
    /// Fails for anything that is not a JSON object.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        match serde_json::from_str(body) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            Ok(other) => Err(TransportError::Decode(format!(
                "expected a JSON object, got {other}"
            ))),
            Err(err) => Err(TransportError::Decode(err.to_string())),
        }
    }

    pub fn is_success(&self) -> bool {
        self.fields.get("status").and_then(Value::as_str) == Some("success")
    }

    /// Display text of a field: strings as-is, `null` or missing as empty,
    /// anything else as its JSON text.
    pub fn field(&self, name: &str) -> String {
        match self.fields.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Outcome of one verification attempt. Rendered, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified {
        holder_name: String,
        expiry_date: String,
        permit_status: String,
    },
    NotFound,
    /// The service could not be reached or answered with something other
    /// than JSON.
    Unavailable,
}

impl From<PermitResponse> for Verification {
    fn from(response: PermitResponse) -> Self {
        if !response.is_success() {
            return Verification::NotFound;
        }
        Verification::Verified {
            holder_name: response.field("holder_name"),
            expiry_date: response.field("expiry_date"),
            permit_status: response.field("permit_status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PermitResponse, Verification};
    use crate::transport::TransportError;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_body_maps_to_verified() {
        let response = PermitResponse::from_json(
            r#"{"status":"success","holder_name":"Jane Doe","expiry_date":"2026-01-01","permit_status":"Active"}"#,
        )
        .expect("parse");
        assert_eq!(
            Verification::from(response),
            Verification::Verified {
                holder_name: "Jane Doe".to_string(),
                expiry_date: "2026-01-01".to_string(),
                permit_status: "Active".to_string(),
            }
        );
    }

    #[test]
    fn any_other_status_is_not_found() {
        for body in [r#"{"status":"expired"}"#, r#"{"status":"error"}"#, "{}"] {
            let response = PermitResponse::from_json(body).expect("parse");
            assert_eq!(Verification::from(response), Verification::NotFound);
        }
    }

    #[test]
    fn non_string_status_is_not_found() {
        for body in [r#"{"status":null}"#, r#"{"status":404}"#, r#"{"status":false}"#] {
            let response = PermitResponse::from_json(body).expect("parse");
            assert_eq!(Verification::from(response), Verification::NotFound);
        }
    }

    #[test]
    fn loosely_typed_fields_are_rendered_as_text() {
        let response = PermitResponse::from_json(
            r#"{"status":"success","holder_name":"Jane Doe","expiry_date":null,"permit_status":1}"#,
        )
        .expect("parse");
        assert_eq!(response.field("holder_name"), "Jane Doe");
        assert_eq!(response.field("expiry_date"), "");
        assert_eq!(response.field("permit_status"), "1");
        assert_eq!(response.field("missing"), "");
    }

    #[test]
    fn non_object_bodies_fail_to_decode() {
        for body in ["null", "[]", "\"success\"", "<html>404</html>", ""] {
            assert!(matches!(
                PermitResponse::from_json(body),
                Err(TransportError::Decode(_))
            ));
        }
    }
}
