mod builder;
mod operation;
pub mod schema;

pub use builder::{build_spec, OpenApiConfig, RouteBinding};
pub use operation::{emit_content, emit_header, emit_operation, emit_parameter, emit_responses};
pub use schema::SchemaRegistry;
