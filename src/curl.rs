//! Assembles literal curl commands from a method's request shape and its auth fragments.

use log::debug;
use std::collections::HashMap;

use crate::auth;
use crate::models::{AuthFragment, MethodDescriptor, SecurityScheme};

/// Prefix of every continuation line in a multi-line command
pub const CONTINUATION: &str = " \\\n\t";

/// Separator between alternative commands in the display string
pub const ALTERNATIVE_SEPARATOR: &str = "\n\n or \n\n";

/// Build one command per fragment; an empty fragment list yields the bare command
pub fn build_commands(method: &MethodDescriptor, fragments: &[AuthFragment]) -> Vec<String> {
    if fragments.is_empty() {
        return vec![build_command(method, &AuthFragment::default())];
    }
    fragments
        .iter()
        .map(|fragment| build_command(method, fragment))
        .collect()
}

/// Render a single command for one way of authenticating
pub fn build_command(method: &MethodDescriptor, fragment: &AuthFragment) -> String {
    let params: Vec<&str> = method
        .params
        .iter()
        .chain(fragment.params())
        .map(String::as_str)
        .collect();

    let mut uri = format!("{}{}", method.baseUri, method.path);
    if !params.is_empty() {
        uri.push('?');
        uri.push_str(&params.join("&"));
    }

    let mut command = format!("curl -X {} \"{}\"", method.method.to_uppercase(), uri);

    for header in method.headers.iter().chain(fragment.headers()) {
        command.push_str(CONTINUATION);
        command.push_str(header);
    }

    command.push_str(&method.payload);

    for option in fragment.options() {
        command.push_str(CONTINUATION);
        command.push_str(option);
    }

    command
}

/// Flatten the fragments of every scheme the method is secured by, in order.
///
/// `null` entries stay as their own unauthenticated alternative. References to schemes that
/// are not declared are dropped; if nothing is left the method is unauthenticated.
pub fn resolve_fragments(
    method: &MethodDescriptor,
    schemes: Option<&HashMap<String, SecurityScheme>>,
) -> Vec<AuthFragment> {
    let mut fragments = Vec::new();

    for entry in &method.securedBy {
        match entry {
            None => fragments.extend(auth::null_auth()),
            Some(reference) => match schemes.and_then(|s| s.get(&reference.schemeName)) {
                Some(scheme) => fragments.extend(auth::compile(scheme)),
                None => debug!(
                    "Security scheme {:?} is not defined, skipping it",
                    reference.schemeName
                ),
            },
        }
    }

    if fragments.is_empty() {
        return auth::null_auth();
    }
    fragments
}

/// All commands for a method, one per applicable way of authenticating
pub fn for_method(
    method: &MethodDescriptor,
    schemes: Option<&HashMap<String, SecurityScheme>>,
) -> Vec<String> {
    let fragments = resolve_fragments(method, schemes);
    build_commands(method, &fragments)
}

/// Join alternative commands into a single display string
pub fn join_alternatives(commands: &[String]) -> String {
    commands.join(ALTERNATIVE_SEPARATOR)
}
