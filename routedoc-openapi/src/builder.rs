use routedoc_core::Route;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::operation::emit_operation;
use crate::schema::SchemaRegistry;

/// Configuration for the generated OpenAPI document.
pub struct OpenApiConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl OpenApiConfig {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// A documented route bound to the method and path it serves.
///
/// The method and path belong to whatever framework the route plugs
/// into; the documentation model itself knows nothing about them.
#[derive(Debug, Clone)]
pub struct RouteBinding {
    pub method: String,
    pub path: String,
    pub route: Route,
}

impl RouteBinding {
    pub fn new(method: &str, path: &str, route: Route) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            route,
        }
    }
}

/// Build an OpenAPI 3.1.0 JSON document from config and bound routes.
pub fn build_spec(config: &OpenApiConfig, routes: &[RouteBinding]) -> Value {
    debug!(routes = routes.len(), "building OpenAPI spec");

    let mut schemas = SchemaRegistry::new();
    let mut paths: Map<String, Value> = Map::new();

    for binding in routes {
        let operation = emit_operation(&binding.route, &mut schemas);
        let method_lower = binding.method.to_lowercase();

        let path_entry = paths
            .entry(binding.path.clone())
            .or_insert_with(|| json!({}));

        if let Some(obj) = path_entry.as_object_mut() {
            obj.insert(method_lower, operation);
        }
    }

    let mut info: Map<String, Value> = Map::new();
    info.insert("title".into(), json!(config.title));
    info.insert("version".into(), json!(config.version));
    if let Some(ref desc) = config.description {
        info.insert("description".into(), json!(desc));
    }

    let mut components: Map<String, Value> = Map::new();
    components.insert(
        "securitySchemes".into(),
        json!({
            "bearerAuth": {
                "type": "http",
                "scheme": "bearer",
                "bearerFormat": "JWT"
            }
        }),
    );
    let schema_map = schemas.into_schemas();
    if !schema_map.is_empty() {
        components.insert("schemas".into(), Value::Object(schema_map));
    }

    json!({
        "openapi": "3.1.0",
        "info": info,
        "paths": paths,
        "components": components
    })
}
