//! Curl statements for methods of an API description, as shown by the theme templates.

use std::collections::HashMap;

use crate::auth::{header_token, param_token};
use crate::curl;
use crate::models::{ApiMethod, ApiResource, MethodDescriptor, Parameter, SecurityScheme};

/// Payload clause for methods that send a request body
pub const REQUEST_BODY_PAYLOAD: &str = " \\\n\t-d @request_body";

const DEFAULT_METHOD: &str = "get";
const METHODS_WITH_BODY: [&str; 3] = ["post", "put", "patch"];

/// Translate a description method into the request shape the assembler works on
pub fn method_descriptor(
    base_uri: Option<&str>,
    method: &ApiMethod,
    resource: &ApiResource,
) -> MethodDescriptor {
    let base_uri = base_uri.unwrap_or_default();
    let verb = method.method.as_deref().unwrap_or(DEFAULT_METHOD);

    let payload = if METHODS_WITH_BODY.contains(&verb.to_lowercase().as_str()) {
        REQUEST_BODY_PAYLOAD.to_string()
    } else {
        String::new()
    };

    MethodDescriptor {
        method: verb.to_string(),
        baseUri: base_uri.strip_suffix('/').unwrap_or(base_uri).to_string(),
        path: resource.path(),
        params: with_examples(&method.queryParameters, param_token),
        headers: with_examples(&method.headers, header_token),
        payload,
        securedBy: method.securedBy.clone(),
    }
}

// Parameters without examples are left out of the command
fn with_examples(parameters: &[Parameter], token: fn(&str, &str) -> String) -> Vec<String> {
    parameters
        .iter()
        .filter_map(|p| p.example_value().map(|value| token(p.name(), &value)))
        .collect()
}

/// Every curl command for a method, one per way of authenticating
pub fn curl_commands(
    schemes: Option<&HashMap<String, SecurityScheme>>,
    base_uri: Option<&str>,
    method: &ApiMethod,
    resource: &ApiResource,
) -> Vec<String> {
    curl::for_method(&method_descriptor(base_uri, method, resource), schemes)
}

/// Display string for a method: alternatives joined, a single command unchanged
pub fn curl_statement(
    schemes: Option<&HashMap<String, SecurityScheme>>,
    base_uri: Option<&str>,
    method: &ApiMethod,
    resource: &ApiResource,
) -> String {
    curl::join_alternatives(&curl_commands(schemes, base_uri, method, resource))
}
