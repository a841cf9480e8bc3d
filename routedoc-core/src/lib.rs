//! Routedoc core — a fluent builder API for describing the documentation
//! metadata of a single HTTP route.
//!
//! A route description is assembled through chained calls on a
//! [`RouteBuilder`] draft and frozen into an immutable [`Route`] by the
//! final [`build()`](RouteBuilder::build) call. Child builders returned by
//! [`request()`](RouteBuilder::request) and
//! [`response()`](RouteBuilder::response) close back to the draft with
//! their own `build()` terminator, so a whole description reads as one
//! expression:
//!
//! ```
//! use routedoc_core::{route, with_status, ParamLocation};
//!
//! let doc = route()
//!     .with_id("get_user")
//!     .response()
//!     .add(with_status(200).with_description("OK"))
//!     .build()
//!     .with_params(|params| {
//!         params
//!             .parameter("id", ParamLocation::Path)
//!             .with_required(true)
//!             .with_schema::<i32>();
//!     })
//!     .build();
//!
//! assert_eq!(doc.id(), Some("get_user"));
//! assert_eq!(doc.params().len(), 1);
//! ```
//!
//! No `build()` call validates anything: an incomplete description is
//! accepted as-is and surfaced (or not) by whatever consumes the model.

pub mod content;
pub mod format;
pub mod header;
pub mod param;
pub mod request;
pub mod response;
pub mod route;
pub mod security;

pub use content::{content, with_mime, with_mime_json, with_mimes, Content, ContentEntry, APPLICATION_JSON};
pub use format::{resolve, FormatMapper, FormatType};
pub use header::Header;
pub use param::{parameter, ParamLocation, ParamRef, Parameter, ParamsScope};
pub use request::{Request, RequestBuilder};
pub use response::{with_status, Response, ResponseBuilder, ResponseEntry};
pub use route::{route, Route, RouteBuilder};
pub use security::SecurityRequirement;

pub use schemars;
