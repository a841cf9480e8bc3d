use routedoc_core::{Content, ContentEntry, Header, Parameter, Response, Route};
use serde_json::{json, Map, Value};

use crate::schema::SchemaRegistry;

/// Emit one parameter as an OpenAPI parameter object.
///
/// A schema object is attached only when the parameter resolved to a
/// [`FormatType`](routedoc_core::FormatType); an explicit format override
/// on the parameter replaces the mapped format string.
pub fn emit_parameter(param: &Parameter) -> Value {
    let mut obj = Map::new();
    obj.insert("name".into(), json!(param.name()));
    obj.insert("in".into(), json!(param.location().as_str()));
    if let Some(description) = param.description() {
        obj.insert("description".into(), json!(description));
    }
    if let Some(required) = param.required() {
        obj.insert("required".into(), json!(required));
    }
    if let Some(schema_type) = param.schema_type() {
        let mut schema = Map::new();
        schema.insert("type".into(), json!(schema_type.schema_type()));
        let format = param
            .format()
            .or_else(|| schema_type.schema_format());
        if let Some(format) = format {
            schema.insert("format".into(), json!(format));
        }
        obj.insert("schema".into(), Value::Object(schema));
    }
    Value::Object(obj)
}

/// Emit one header as an OpenAPI header object. The header name is the
/// map key at the call site and is not repeated inside the object.
pub fn emit_header(header: &Header) -> Value {
    let mut obj = Map::new();
    if let Some(description) = header.description() {
        obj.insert("description".into(), json!(description));
    }
    if let Some(schema_type) = header.schema_type() {
        let mut schema = Map::new();
        schema.insert("type".into(), json!(schema_type.schema_type()));
        if let Some(format) = schema_type.schema_format() {
            schema.insert("format".into(), json!(format));
        }
        obj.insert("schema".into(), Value::Object(schema));
    }
    Value::Object(obj)
}

/// Emit a body description as an OpenAPI content map, fanning each
/// entry's media object out to every MIME type in its group.
pub fn emit_content(content: &Content, schemas: &mut SchemaRegistry) -> Value {
    let mut media_types = Map::new();
    for entry in content.entries() {
        let media = emit_media_type(entry, schemas);
        for mime in entry.mime_types() {
            media_types.insert(mime.clone(), media.clone());
        }
    }
    Value::Object(media_types)
}

/// A media object references its captured schema through the registry.
/// Without a captured schema the object stays empty; an example alone
/// is not emitted.
fn emit_media_type(entry: &ContentEntry, schemas: &mut SchemaRegistry) -> Value {
    let mut media = Map::new();
    if let Some(type_name) = entry.type_name() {
        schemas.register(type_name, entry.schema());
        media.insert(
            "schema".into(),
            json!({ "$ref": format!("#/components/schemas/{type_name}") }),
        );
        if let Some(example) = entry.example() {
            media.insert("example".into(), example.clone());
        }
    }
    Value::Object(media)
}

/// Emit the responses map, keyed by status in entry order.
///
/// Duplicate statuses collapse here: the last entry for a status wins.
/// The `headers` key is absent when headers were never set and an empty
/// object when they were set to an empty group.
pub fn emit_responses(response: &Response, schemas: &mut SchemaRegistry) -> Value {
    let mut responses = Map::new();
    for entry in response.entries() {
        let mut obj = Map::new();
        if let Some(description) = entry.description() {
            obj.insert("description".into(), json!(description));
        }
        if let Some(content) = entry.content() {
            obj.insert("content".into(), emit_content(content, schemas));
        }
        if let Some(headers) = entry.headers() {
            let mut map = Map::new();
            for header in headers {
                map.insert(header.name().to_string(), emit_header(header));
            }
            obj.insert("headers".into(), Value::Object(map));
        }
        responses.insert(entry.status().to_string(), Value::Object(obj));
    }
    Value::Object(responses)
}

/// Emit a whole route description as an OpenAPI operation object.
pub fn emit_operation(route: &Route, schemas: &mut SchemaRegistry) -> Value {
    let mut operation = Map::new();

    if let Some(id) = route.id() {
        operation.insert("operationId".into(), json!(id));
    }
    if let Some(tag) = route.tag() {
        operation.insert("tags".into(), json!([tag]));
    }
    if let Some(summary) = route.summary() {
        operation.insert("summary".into(), json!(summary));
    }
    if let Some(description) = route.description() {
        operation.insert("description".into(), json!(description));
    }
    if route.deprecated() {
        operation.insert("deprecated".into(), json!(true));
    }

    let params: Vec<Value> = route.params().iter().map(emit_parameter).collect();
    if !params.is_empty() {
        operation.insert("parameters".into(), json!(params));
    }

    let request = route.request();
    if request.description().is_some() || request.required() || request.content().is_some() {
        let mut body = Map::new();
        if let Some(description) = request.description() {
            body.insert("description".into(), json!(description));
        }
        body.insert("required".into(), json!(request.required()));
        if let Some(content) = request.content() {
            body.insert("content".into(), emit_content(content, schemas));
        }
        operation.insert("requestBody".into(), Value::Object(body));
    }

    operation.insert("responses".into(), emit_responses(route.response(), schemas));

    if !route.security().is_empty() {
        let security: Vec<Value> = route
            .security()
            .iter()
            .map(|req| req.as_value().clone())
            .collect();
        operation.insert("security".into(), json!(security));
    }

    Value::Object(operation)
}
