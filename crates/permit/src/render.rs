//! HTML fragments written into the result region.

use crate::query::ValidationError;
use crate::response::Verification;

pub const VERIFYING_MARKUP: &str = r#"<div class="loader-small">Verifying...</div>"#;
pub const NOT_FOUND_MESSAGE: &str = "Record not found or expired.";
pub const UNAVAILABLE_MESSAGE: &str =
    "Search feature ready. Connect to database to fetch live data.";

const ERROR_COLOR: &str = "#ff4d4d";
const MUTED_COLOR: &str = "#8892b0";

pub fn validation_error(err: &ValidationError) -> String {
    paragraph(ERROR_COLOR, &err.to_string())
}

pub fn verification(outcome: &Verification) -> String {
    match outcome {
        Verification::Verified {
            holder_name,
            expiry_date,
            permit_status,
        } => format!(
            concat!(
                r#"<div class="result-success">"#,
                r#"<i class="fas fa-check-circle"></i> Verified: {}<br>"#,
                "<small>Validity: {} | Status: {}</small>",
                "</div>"
            ),
            escape_html(holder_name),
            escape_html(expiry_date),
            escape_html(permit_status),
        ),
        Verification::NotFound => paragraph(ERROR_COLOR, NOT_FOUND_MESSAGE),
        Verification::Unavailable => paragraph(MUTED_COLOR, UNAVAILABLE_MESSAGE),
    }
}

fn paragraph(color: &str, text: &str) -> String {
    format!(r#"<p style="color: {color};">{}</p>"#, escape_html(text))
}

/// Escapes text for inclusion in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_markup_lists_all_fields() {
        let html = verification(&Verification::Verified {
            holder_name: "Jane Doe".to_string(),
            expiry_date: "2026-01-01".to_string(),
            permit_status: "Active".to_string(),
        });
        assert!(html.contains("Verified: Jane Doe<br>"));
        assert!(html.contains("Validity: 2026-01-01 | Status: Active"));
        assert!(html.starts_with(r#"<div class="result-success">"#));
    }

    #[test]
    fn server_strings_are_escaped() {
        let html = verification(&Verification::Verified {
            holder_name: "<script>alert(1)</script>".to_string(),
            expiry_date: "a & b".to_string(),
            permit_status: "\"x\"".to_string(),
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;x&quot;"));
    }

    #[test]
    fn messages_render_as_paragraphs() {
        assert_eq!(
            validation_error(&ValidationError::Empty),
            r#"<p style="color: #ff4d4d;">Please enter a permit number.</p>"#
        );
        assert_eq!(
            verification(&Verification::NotFound),
            r#"<p style="color: #ff4d4d;">Record not found or expired.</p>"#
        );
        assert!(verification(&Verification::Unavailable).contains(UNAVAILABLE_MESSAGE));
    }
}
