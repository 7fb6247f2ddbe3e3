//! Naming and lookup helpers the theme templates call while rendering a method.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::models::{ApiMethod, Parameter};

static UNSAFE_ID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static JSON_MIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^application/json$|\+json$").unwrap());

static XML_MIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^application/xml$|\+xml$").unwrap());

const EVENT_STREAM_MIME: &str = "text/event-stream";

/// Turn an arbitrary label into something usable as an HTML id
pub fn safe_id(value: Option<&str>) -> String {
    let lowered = value.unwrap_or_default().to_lowercase();
    UNSAFE_ID_CHARS.replace_all(&lowered, "-").into_owned()
}

/// Syntax highlighting language for a body MIME type, empty when unknown
pub fn language_for_mime(mime: Option<&str>) -> &'static str {
    match mime {
        Some(m) if JSON_MIME_REGEX.is_match(m) => "json",
        Some(m) if XML_MIME_REGEX.is_match(m) => "xml",
        Some(EVENT_STREAM_MIME) => "sse",
        _ => "",
    }
}

/// Headers of all responses of a method, without duplicates
pub fn response_headers(method: &ApiMethod) -> Vec<Parameter> {
    let mut headers: Vec<Parameter> = Vec::new();
    for header in method.responses.iter().flat_map(|r| r.headers.iter()) {
        if !headers.contains(header) {
            headers.push(header.clone());
        }
    }
    headers
}

/// Whether any of the parameters carries at least one example
pub fn has_examples(parameters: &[Parameter]) -> bool {
    parameters.iter().any(|p| !p.examples.is_empty())
}

/// Guess the MIME type of an image from its extension, `image/png` by default
pub fn image_mime_type(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tiff" => "image/tiff",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiResponse, Example};

    fn header(name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_safe_id() {
        assert_eq!(safe_id(None), "");
        assert_eq!(safe_id(Some("foo bar")), "foo-bar");
        assert_eq!(safe_id(Some("fooBAR")), "foobar");
        assert_eq!(safe_id(Some("/users/{id}")), "-users-id-");
    }

    #[test]
    fn test_language_for_mime() {
        assert_eq!(language_for_mime(None), "");
        assert_eq!(language_for_mime(Some("application/json")), "json");
        assert_eq!(language_for_mime(Some("vnd/some.stuff+json")), "json");
        assert_eq!(language_for_mime(Some("application/xml")), "xml");
        assert_eq!(language_for_mime(Some("vnd/some.stuff+xml")), "xml");
        assert_eq!(language_for_mime(Some("text/event-stream")), "sse");
        assert_eq!(language_for_mime(Some("vnd/some.stuff")), "");
    }

    #[test]
    fn test_response_headers() {
        assert!(response_headers(&ApiMethod::default()).is_empty());

        let method = ApiMethod {
            responses: vec![
                ApiResponse {
                    code: Some("200".to_string()),
                    headers: vec![header("foo"), header("bar")],
                },
                ApiResponse {
                    code: Some("404".to_string()),
                    headers: vec![header("foo"), header("baz")],
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            response_headers(&method),
            vec![header("foo"), header("bar"), header("baz")]
        );
    }

    #[test]
    fn test_has_examples() {
        assert!(!has_examples(&[]));
        assert!(!has_examples(&[header("foo"), header("bar")]));

        let with_example = Parameter {
            examples: vec![Example {
                value: serde_json::json!(1),
                name: None,
            }],
            ..header("foo")
        };
        assert!(has_examples(&[with_example.clone()]));
        assert!(has_examples(&[header("bar"), with_example]));
    }

    #[test]
    fn test_image_mime_type() {
        assert_eq!(image_mime_type("foo"), "image/png");
        assert_eq!(image_mime_type("foo.png"), "image/png");
        assert_eq!(image_mime_type("foo.jpg"), "image/jpeg");
        assert_eq!(image_mime_type("foo.JPEG"), "image/jpeg");
        assert_eq!(image_mime_type("foo.gif"), "image/gif");
        assert_eq!(image_mime_type("foo.bmp"), "image/bmp");
        assert_eq!(image_mime_type("foo.tiff"), "image/tiff");
        assert_eq!(image_mime_type("foo.svg"), "image/svg+xml");
    }
}
