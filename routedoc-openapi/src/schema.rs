use serde_json::{json, Map, Value};

/// Recursively rewrite `$ref` paths from schemars format to OpenAPI
/// components format.
///
/// schemars 1.x generates JSON Schema Draft 2020-12 using `$defs` and
/// `$ref: "#/$defs/X"`. OpenAPI 3.1.0 expects schemas under
/// `#/components/schemas/X`.
fn sanitize_schema(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            if let Some(Value::String(ref_str)) = obj.get_mut("$ref") {
                if ref_str.starts_with("#/$defs/") {
                    *ref_str = ref_str.replace("#/$defs/", "#/components/schemas/");
                }
            }

            for (_, v) in obj.iter_mut() {
                sanitize_schema(v);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                sanitize_schema(v);
            }
        }
        _ => {}
    }
}

/// Collects the component schemas referenced by emitted media types.
///
/// Registration strips `$schema`, promotes `$defs` entries to top-level
/// components, and rewrites `$ref` paths. The first registration wins per
/// name; promoted definitions never displace an explicit registration.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: Map<String, Value>,
    definitions: Vec<(String, Value)>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a captured schema under the given component name.
    ///
    /// An absent schema registers the generic `{"type": "object"}`
    /// fallback so the `$ref` emitted for it still resolves.
    pub fn register(&mut self, name: &str, root_schema: Option<&Value>) {
        if self.schemas.contains_key(name) {
            return;
        }
        match root_schema {
            Some(root) => {
                let mut schema = root.clone();
                if let Some(obj) = schema.as_object_mut() {
                    obj.remove("$schema");
                    // schemars 1.x uses "$defs" (Draft 2020-12)
                    if let Some(Value::Object(defs)) = obj.remove("$defs") {
                        for (def_name, def_schema) in defs {
                            self.definitions.push((def_name, def_schema));
                        }
                    }
                }
                sanitize_schema(&mut schema);
                self.schemas.insert(name.to_string(), schema);
            }
            None => {
                self.schemas.insert(name.to_string(), json!({ "type": "object" }));
            }
        }
    }

    /// Check if a schema is registered under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.definitions.is_empty()
    }

    /// Consume the registry and return the component map, merging promoted
    /// `$defs` entries in.
    pub fn into_schemas(mut self) -> Map<String, Value> {
        for (def_name, mut def_schema) in self.definitions {
            sanitize_schema(&mut def_schema);
            self.schemas.entry(def_name).or_insert(def_schema);
        }
        self.schemas
    }
}
