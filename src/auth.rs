//! Compiles a security scheme into the alternative ways a curl command can authenticate.
//!
//! Every compiler returns at least one [`AuthFragment`]. A scheme that contributes nothing
//! still yields a single empty fragment, so callers can map fragments to commands one to one.

use log::debug;

use crate::models::{AuthFragment, Parameter, SchemeKind, SecurityScheme};

// Placeholder credentials; examples only, never real values
pub const USER_OPTION: &str = "--user username:password";
pub const DIGEST_OPTION: &str = "--digest";
pub const DEFAULT_OAUTH1_SIGNATURE: &str = "RSA-SHA1";
const OAUTH1_REALM: &str = "API";
const OAUTH1_CONSUMER_KEY: &str = "consumer_key";
const OAUTH1_TOKEN: &str = "token";
const OAUTH1_SIGNATURE: &str = "computed_signature";
const OAUTH1_TIMESTAMP: &str = "timestamp";
const OAUTH1_NONCE: &str = "nonce";
const OAUTH1_VERSION: &str = "1.0";

/// Continuation between attributes of the OAuth 1.0 `Authorization` header
const OAUTH1_ATTRIBUTE_SEPARATOR: &str = ",\\\n\t";

/// Produce the auth fragments for a scheme, dispatching on its type
pub fn compile(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    match scheme.kind() {
        SchemeKind::OAuth2 => oauth2(scheme),
        SchemeKind::OAuth1 => oauth1(scheme),
        SchemeKind::Basic => basic_auth(),
        SchemeKind::Digest => digest_auth(),
        SchemeKind::PassThrough => pass_through(scheme),
        SchemeKind::Custom(_) => custom(scheme),
        SchemeKind::Unknown(type_) => {
            debug!(
                "Unsupported security scheme type {:?} for {:?}, treating as unauthenticated",
                type_, scheme.name
            );
            null_auth()
        }
    }
}

/// Format a parameter as a curl header token
pub fn header_token(name: &str, value: &str) -> String {
    format!("-H \"{}: {}\"", name, value)
}

/// Format a parameter as a query string token
pub fn param_token(name: &str, value: &str) -> String {
    format!("{}={}", name, value)
}

fn header_tokens(parameters: &[Parameter]) -> Vec<String> {
    parameters
        .iter()
        .map(|p| header_token(p.name(), &p.value_or_type()))
        .collect()
}

fn param_tokens(parameters: &[Parameter]) -> Vec<String> {
    parameters
        .iter()
        .map(|p| param_token(p.name(), &p.value_or_type()))
        .collect()
}

/// Bearer header or access token query parameter, each its own alternative
fn oauth2(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    let headers = scheme.headers().iter().map(|h| {
        let bearer = format!("Bearer {}", h.value_or_type());
        AuthFragment::with_headers(vec![header_token(h.name(), &bearer)])
    });
    let params = scheme
        .query_parameters()
        .iter()
        .map(|q| AuthFragment::with_params(vec![param_token(q.name(), &q.value_or_type())]));

    let fragments: Vec<AuthFragment> = headers.chain(params).collect();
    if fragments.is_empty() {
        return null_auth();
    }
    fragments
}

/// Signed `Authorization` header, or the same attributes as query parameters
fn oauth1(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    let signature_method = scheme.signature().unwrap_or(DEFAULT_OAUTH1_SIGNATURE);
    let attributes = [
        ("oauth_consumer_key", OAUTH1_CONSUMER_KEY),
        ("oauth_token", OAUTH1_TOKEN),
        ("oauth_signature_method", signature_method),
        ("oauth_signature", OAUTH1_SIGNATURE),
        ("oauth_timestamp", OAUTH1_TIMESTAMP),
        ("oauth_nonce", OAUTH1_NONCE),
        ("oauth_version", OAUTH1_VERSION),
    ];

    let header_value = std::iter::once(format!("OAuth realm=\"{}\"", OAUTH1_REALM))
        .chain(attributes.iter().map(|(k, v)| format!("{}=\"{}\"", k, v)))
        .collect::<Vec<_>>()
        .join(OAUTH1_ATTRIBUTE_SEPARATOR);
    let header = format!("-H 'Authorization: {}'", header_value);

    let params = attributes
        .iter()
        .map(|(k, v)| param_token(k, v))
        .collect();

    vec![
        AuthFragment::with_headers(vec![header]),
        AuthFragment::with_params(params),
    ]
}

fn basic_auth() -> Vec<AuthFragment> {
    vec![AuthFragment::with_options(vec![USER_OPTION.to_string()])]
}

fn digest_auth() -> Vec<AuthFragment> {
    vec![AuthFragment::with_options(vec![
        USER_OPTION.to_string(),
        DIGEST_OPTION.to_string(),
    ])]
}

/// Every declared header and query parameter in a single fragment
fn pass_through(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    vec![AuthFragment {
        headers: Some(header_tokens(scheme.headers())),
        params: Some(param_tokens(scheme.query_parameters())),
        options: None,
    }]
}

/// `x-` schemes: headers only, query parameters are ignored
fn custom(scheme: &SecurityScheme) -> Vec<AuthFragment> {
    vec![AuthFragment::with_headers(header_tokens(scheme.headers()))]
}

/// Unauthenticated: a single fragment that changes nothing
pub fn null_auth() -> Vec<AuthFragment> {
    vec![AuthFragment::default()]
}
