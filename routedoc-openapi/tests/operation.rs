use routedoc_core::{
    content, parameter, route, with_mime, with_mime_json, with_mimes, with_status, FormatType,
    Header, ParamLocation,
};
use routedoc_openapi::{emit_content, emit_header, emit_parameter, emit_responses, SchemaRegistry};
use schemars::JsonSchema;
use serde_json::json;

#[derive(JsonSchema)]
#[allow(dead_code)]
struct CreateUser {
    name: String,
}

// ── Parameters ──────────────────────────────────────────────────────────────

#[test]
fn parameter_with_schema() {
    let param = parameter("id", ParamLocation::Path)
        .with_description("user id")
        .with_required(true)
        .with_schema::<i32>();
    let emitted = emit_parameter(&param);

    assert_eq!(emitted["name"], "id");
    assert_eq!(emitted["in"], "path");
    assert_eq!(emitted["description"], "user id");
    assert_eq!(emitted["required"], true);
    assert_eq!(emitted["schema"]["type"], "integer");
    assert_eq!(emitted["schema"]["format"], "int32");
}

#[test]
fn parameter_without_schema_has_no_schema_key() {
    let param = parameter("q", ParamLocation::Query);
    let emitted = emit_parameter(&param);
    assert!(emitted.get("schema").is_none());
    assert!(emitted.get("required").is_none());
    assert!(emitted.get("description").is_none());
}

#[test]
fn parameter_format_override_replaces_mapped_format() {
    let param = parameter("when", ParamLocation::Query)
        .with_schema_type(FormatType::Date)
        .with_format("date-time");
    let emitted = emit_parameter(&param);
    assert_eq!(emitted["schema"]["type"], "string");
    assert_eq!(emitted["schema"]["format"], "date-time");
}

#[test]
fn parameter_formatless_primitive_has_no_format_key() {
    let param = parameter("flag", ParamLocation::Query).with_schema::<bool>();
    let emitted = emit_parameter(&param);
    assert_eq!(emitted["schema"]["type"], "boolean");
    assert!(emitted["schema"].get("format").is_none());
}

#[test]
fn cookie_location_stringified() {
    let param = parameter("session", ParamLocation::Cookie);
    assert_eq!(emit_parameter(&param)["in"], "cookie");
}

// ── Headers ─────────────────────────────────────────────────────────────────

#[test]
fn header_with_schema() {
    let header = Header::new("X-Rate-Limit")
        .with_description("requests left")
        .with_schema::<i64>();
    let emitted = emit_header(&header);
    assert_eq!(emitted["description"], "requests left");
    assert_eq!(emitted["schema"]["type"], "integer");
    assert_eq!(emitted["schema"]["format"], "int64");
}

#[test]
fn bare_header_is_empty_object() {
    let emitted = emit_header(&Header::new("X-Bare"));
    assert_eq!(emitted, json!({}));
}

// ── Content fan-out ─────────────────────────────────────────────────────────

#[test]
fn fan_out_duplicates_media_object_per_mime() {
    let body = content().entry(
        with_mimes(["application/json", "application/xml"])
            .with_schema::<CreateUser>()
            .with_example(json!({ "name": "ada" })),
    );
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_content(&body, &mut schemas);

    for mime in ["application/json", "application/xml"] {
        assert_eq!(
            emitted[mime]["schema"]["$ref"],
            "#/components/schemas/CreateUser"
        );
        assert_eq!(emitted[mime]["example"], json!({ "name": "ada" }));
    }
    assert!(schemas.contains("CreateUser"));
}

#[test]
fn separate_entries_keep_separate_schemas() {
    let body = content()
        .entry(with_mime_json().with_schema::<CreateUser>())
        .entry(with_mime("text/plain"));
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_content(&body, &mut schemas);

    assert!(emitted["application/json"]["schema"].is_object());
    assert_eq!(emitted["text/plain"], json!({}));
}

#[test]
fn example_without_schema_is_dropped() {
    let body = content().entry(with_mime_json().with_example(json!({ "orphan": true })));
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_content(&body, &mut schemas);

    assert_eq!(emitted["application/json"], json!({}));
    assert!(schemas.is_empty());
}

// ── Responses ───────────────────────────────────────────────────────────────

#[test]
fn responses_keyed_by_status() {
    let doc = route()
        .response()
        .add(with_status(200).with_description("OK"))
        .add(with_status("default").with_description("anything else"))
        .build()
        .build();
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_responses(doc.response(), &mut schemas);

    assert_eq!(emitted["200"]["description"], "OK");
    assert_eq!(emitted["default"]["description"], "anything else");
}

#[test]
fn duplicate_status_last_write_wins() {
    // The model retains both entries; the status-indexed emission keeps
    // only the later one.
    let doc = route()
        .response()
        .add(with_status(200).with_description("first"))
        .add(with_status(200).with_description("second"))
        .build()
        .build();
    assert_eq!(doc.response().entries().len(), 2);

    let mut schemas = SchemaRegistry::new();
    let emitted = emit_responses(doc.response(), &mut schemas);
    let responses = emitted.as_object().expect("map");
    assert_eq!(responses.len(), 1);
    assert_eq!(emitted["200"]["description"], "second");
}

#[test]
fn headers_never_set_emit_no_key() {
    let doc = route().response().add(with_status(204)).build().build();
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_responses(doc.response(), &mut schemas);
    assert!(emitted["204"].get("headers").is_none());
}

#[test]
fn headers_set_empty_emit_empty_object() {
    let doc = route()
        .response()
        .add(with_status(204).with_headers([]))
        .build()
        .build();
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_responses(doc.response(), &mut schemas);
    assert_eq!(emitted["204"]["headers"], json!({}));
}

#[test]
fn headers_keyed_by_name() {
    let doc = route()
        .response()
        .add(with_status(200).with_headers([
            Header::new("X-Rate-Limit").with_schema::<i32>(),
            Header::new("X-Request-Id").with_schema::<String>(),
        ]))
        .build()
        .build();
    let mut schemas = SchemaRegistry::new();
    let emitted = emit_responses(doc.response(), &mut schemas);

    assert_eq!(
        emitted["200"]["headers"]["X-Rate-Limit"]["schema"]["type"],
        "integer"
    );
    assert_eq!(
        emitted["200"]["headers"]["X-Request-Id"]["schema"]["type"],
        "string"
    );
}
