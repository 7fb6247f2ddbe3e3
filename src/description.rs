use log::debug;
use std::{fs, path::Path};
use thiserror::Error;

use crate::models::{ApiDescription, ApiMethod, ApiResource};
use crate::statement::curl_statement;

#[derive(Error, Debug)]
pub enum DescriptionError {
    #[error("Failed to read API description: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid JSON API description: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid YAML API description: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// A method together with the resource it belongs to
#[derive(Debug, Clone)]
pub struct ResourceMethod {
    pub resource: ApiResource,
    pub method: ApiMethod,
}

impl ApiDescription {
    /// Load a description; `.json` files are read as JSON, everything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        debug!("Loading API description from {:?}", path);
        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// All methods of the resource tree, depth first, with `parentUrl` filled in on nested resources
    pub fn methods(&self) -> Vec<ResourceMethod> {
        let mut methods = Vec::new();
        for resource in &self.resources {
            collect_methods(resource, &mut methods);
        }
        methods
    }

    /// Display curl statement for every method
    pub fn curl_statements(&self) -> Vec<(ResourceMethod, String)> {
        self.methods()
            .into_iter()
            .map(|rm| {
                let statement = curl_statement(
                    Some(&self.securitySchemes),
                    self.baseUri.as_deref(),
                    &rm.method,
                    &rm.resource,
                );
                (rm, statement)
            })
            .collect()
    }
}

fn collect_methods(resource: &ApiResource, methods: &mut Vec<ResourceMethod>) {
    for method in &resource.methods {
        methods.push(ResourceMethod {
            resource: ApiResource {
                resources: Vec::new(),
                ..resource.clone()
            },
            method: method.clone(),
        });
    }

    let parent_url = resource.path();
    for child in &resource.resources {
        let child = ApiResource {
            parentUrl: Some(parent_url.clone()),
            ..child.clone()
        };
        collect_methods(&child, methods);
    }
}
