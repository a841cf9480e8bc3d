use schemars::JsonSchema;
use serde_json::{json, Value};

pub const APPLICATION_JSON: &str = "application/json";

/// Create an empty body description.
pub fn content() -> Content {
    Content::new()
}

/// Create a body variant seeded with one MIME type.
pub fn with_mime(mime: impl Into<String>) -> ContentEntry {
    ContentEntry::new(mime)
}

/// Create a body variant seeded with several MIME types sharing one
/// schema and example.
pub fn with_mimes<I, S>(mimes: I) -> ContentEntry
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ContentEntry {
        mime_types: mimes.into_iter().map(Into::into).collect(),
        type_name: None,
        schema: None,
        example: None,
    }
}

/// Create a body variant for the common `application/json` case.
pub fn with_mime_json() -> ContentEntry {
    ContentEntry::new(APPLICATION_JSON)
}

/// A documented body shape: an ordered list of MIME-type variants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    entries: Vec<ContentEntry>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variant. Order is preserved and only matters for
    /// deterministic emission.
    pub fn entry(mut self, entry: ContentEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }
}

/// One MIME-type group of a body: one or more MIME strings sharing an
/// optional captured schema and an optional example value.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    mime_types: Vec<String>,
    type_name: Option<String>,
    schema: Option<Value>,
    example: Option<Value>,
}

impl ContentEntry {
    pub fn new(mime: impl Into<String>) -> Self {
        Self {
            mime_types: vec![mime.into()],
            type_name: None,
            schema: None,
            example: None,
        }
    }

    /// Append another MIME type to the group, so the same schema and
    /// example serve it too.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime_types.push(mime.into());
        self
    }

    /// Capture `T`'s JSON Schema for this group. Last call wins.
    ///
    /// The schema is generated now, through schemars, and carried on the
    /// entry; the emitter never sees `T` itself.
    pub fn with_schema<T: JsonSchema>(mut self) -> Self {
        let schema = serde_json::to_value(schemars::schema_for!(T))
            .unwrap_or_else(|_| json!({ "type": "object" }));
        self.type_name = Some(
            schema
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(short_type_name::<T>),
        );
        self.schema = Some(schema);
        self
    }

    /// Attach an example value. Last call wins.
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    pub fn mime_types(&self) -> &[String] {
        &self.mime_types
    }

    /// Name of the captured schema type, used as its components key.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn schema(&self) -> Option<&Value> {
        self.schema.as_ref()
    }

    pub fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }
}

fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full).to_string()
}
