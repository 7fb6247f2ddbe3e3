#![allow(non_snake_case)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Security scheme type labels as they appear in an API description
pub const OAUTH2_TYPE: &str = "OAuth 2.0";
pub const OAUTH1_TYPE: &str = "OAuth 1.0";
pub const BASIC_AUTH_TYPE: &str = "Basic Authentication";
pub const DIGEST_AUTH_TYPE: &str = "Digest Authentication";
pub const PASS_THROUGH_TYPE: &str = "Pass Through";
pub const CUSTOM_TYPE_PREFIX: &str = "x-";

/// Security scheme declared by an API description
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describedBy: Option<DescribedBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SchemeSettings>,
}

impl SecurityScheme {
    /// Resolve the free-form type label into a scheme kind
    pub fn kind(&self) -> SchemeKind {
        SchemeKind::from(self.type_.as_str())
    }

    /// Header parameters declared by the scheme, empty when not described
    pub fn headers(&self) -> &[Parameter] {
        self.describedBy
            .as_ref()
            .map(|d| d.headers.as_slice())
            .unwrap_or_default()
    }

    /// Query parameters declared by the scheme, empty when not described
    pub fn query_parameters(&self) -> &[Parameter] {
        self.describedBy
            .as_ref()
            .map(|d| d.queryParameters.as_slice())
            .unwrap_or_default()
    }

    /// First declared signature method, if any
    pub fn signature(&self) -> Option<&str> {
        self.settings
            .as_ref()
            .and_then(|s| s.signatures.first())
            .map(String::as_str)
    }
}

/// Headers and query parameters a scheme expects on each request
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DescribedBy {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub headers: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub queryParameters: Vec<Parameter>,
}

/// Scheme specific settings; only OAuth 1.0 signatures are consulted
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SchemeSettings {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub signatures: Vec<String>,
}

/// Named parameter (header or query) with optional examples
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: String,
    // Method parameters are keyed by `key`, often alongside `name`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub examples: Vec<Example>,
}

impl Parameter {
    /// Declared name, falling back to `key` when no name is given
    pub fn name(&self) -> &str {
        match self.key.as_deref() {
            Some(key) if self.name.is_empty() => key,
            _ => &self.name,
        }
    }

    /// Value of the first example, if one is declared
    pub fn example_value(&self) -> Option<String> {
        self.examples.first().map(Example::text)
    }

    /// First example value, falling back to the declared type as a placeholder
    pub fn value_or_type(&self) -> String {
        self.example_value().unwrap_or_else(|| self.type_.clone())
    }
}

/// Example value attached to a parameter
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Example {
    pub value: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
}

impl Example {
    /// Render the example as it should appear on a command line
    pub fn text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Reference from a method to a named security scheme
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SchemeRef {
    pub schemeName: String,
}

/// Closed set of supported scheme kinds, plus the open `x-` family
#[derive(Debug, Clone, PartialEq)]
pub enum SchemeKind {
    OAuth2,
    OAuth1,
    Basic,
    Digest,
    PassThrough,
    Custom(String),
    Unknown(String),
}

impl From<&str> for SchemeKind {
    fn from(s: &str) -> Self {
        match s {
            OAUTH2_TYPE => Self::OAuth2,
            OAUTH1_TYPE => Self::OAuth1,
            BASIC_AUTH_TYPE => Self::Basic,
            DIGEST_AUTH_TYPE => Self::Digest,
            PASS_THROUGH_TYPE => Self::PassThrough,
            custom if custom.starts_with(CUSTOM_TYPE_PREFIX) => Self::Custom(custom.to_string()),
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Extra headers, query parameters and options contributed by one way of authenticating.
///
/// A `None` field means the scheme does not touch that part of the command; `Some(vec![])`
/// means it does, but declared nothing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AuthFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl AuthFragment {
    pub fn with_headers(headers: Vec<String>) -> Self {
        Self {
            headers: Some(headers),
            ..Default::default()
        }
    }

    pub fn with_params(params: Vec<String>) -> Self {
        Self {
            params: Some(params),
            ..Default::default()
        }
    }

    pub fn with_options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Default::default()
        }
    }

    pub fn headers(&self) -> &[String] {
        self.headers.as_deref().unwrap_or_default()
    }

    pub fn params(&self) -> &[String] {
        self.params.as_deref().unwrap_or_default()
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// Request shape of a single method, with pre-formatted tokens
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MethodDescriptor {
    pub method: String,
    #[serde(default)]
    pub baseUri: String,
    #[serde(default)]
    pub path: String,
    // `key=value` tokens
    #[serde(default)]
    pub params: Vec<String>,
    // `-H "..."` tokens
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub securedBy: Vec<Option<SchemeRef>>,
}

/// Parsed API description, as handed over by the description loader
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseUri: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub securitySchemes: HashMap<String, SecurityScheme>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub resources: Vec<ApiResource>,
}

/// A resource node; children are nested below their parent
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayName: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parentUrl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relativeUri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub methods: Vec<ApiMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub resources: Vec<ApiResource>,
}

impl ApiResource {
    /// Full path of the resource below the base URI
    pub fn path(&self) -> String {
        format!(
            "{}{}",
            self.parentUrl.as_deref().unwrap_or(""),
            self.relativeUri.as_deref().unwrap_or("/")
        )
    }
}

/// An HTTP method of a resource
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub headers: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub queryParameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub securedBy: Vec<Option<SchemeRef>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub responses: Vec<ApiResponse>,
}

/// A documented response of a method
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub headers: Vec<Parameter>,
}
