//! Contract with the external rendering collaborator.
//!
//! Given a document's content and language, an external service produces
//! HTML — or a human-readable failure. This crate only declares the shape;
//! it never makes the call.
//!
//! ## Learning: Making Invalid States Unrepresentable
//!
//! On the wire the collaborator answers `{ html, error? }`, a pair where
//! "error set but html also present" is a representable-but-meaningless
//! state. Locally we model it as an enum, so exactly one of the two arms
//! exists; the serde bridge below maps the wire pair onto it, letting the
//! error win when both are present (the html is not authoritative then).

use serde::{Deserialize, Serialize};

/// Outcome of an external render request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WirePreview", into = "WirePreview")]
pub enum PreviewResponse {
    /// Rendered markup, ready to display
    Html(String),

    /// Human-readable failure message, displayed verbatim
    Error(String),
}

impl PreviewResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, PreviewResponse::Error(_))
    }

    /// Returns the rendered markup, if the render succeeded.
    pub fn html(&self) -> Option<&str> {
        match self {
            PreviewResponse::Html(html) => Some(html),
            PreviewResponse::Error(_) => None,
        }
    }
}

/// The collaborator's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WirePreview {
    #[serde(default)]
    html: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<WirePreview> for PreviewResponse {
    fn from(wire: WirePreview) -> Self {
        match wire.error {
            Some(error) => PreviewResponse::Error(error),
            None => PreviewResponse::Html(wire.html),
        }
    }
}

impl From<PreviewResponse> for WirePreview {
    fn from(response: PreviewResponse) -> Self {
        match response {
            PreviewResponse::Html(html) => WirePreview { html, error: None },
            PreviewResponse::Error(error) => WirePreview {
                html: String::new(),
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_decodes_to_html() {
        let response: PreviewResponse =
            serde_json::from_str(r#"{"html":"<h1>Hi</h1>"}"#).unwrap();
        assert_eq!(response, PreviewResponse::Html("<h1>Hi</h1>".to_string()));
        assert_eq!(response.html(), Some("<h1>Hi</h1>"));
    }

    #[test]
    fn test_error_wins_over_html() {
        let response: PreviewResponse =
            serde_json::from_str(r#"{"html":"<p>stale</p>","error":"render timed out"}"#).unwrap();
        assert_eq!(
            response,
            PreviewResponse::Error("render timed out".to_string())
        );
        assert!(response.is_error());
        assert_eq!(response.html(), None);
    }

    #[test]
    fn test_round_trip_preserves_the_arm() {
        for original in [
            PreviewResponse::Html("<p>ok</p>".to_string()),
            PreviewResponse::Error("boom".to_string()),
        ] {
            let json = serde_json::to_string(&original).unwrap();
            let decoded: PreviewResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, original);
        }
    }
}
