//! Routedoc — a fluent DSL for documenting HTTP routes.
//!
//! This facade crate re-exports the routedoc sub-crates through a single
//! dependency with feature flags:
//!
//! | Feature   | Default | Crate              |
//! |-----------|---------|--------------------|
//! | `openapi` | **yes** | `routedoc-openapi` |
//!
//! ```
//! use routedoc::{route, with_status, ParamLocation};
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
//!             .with_schema::<i64>();
//!     })
//!     .build();
//!
//! assert_eq!(doc.params()[0].name(), "id");
//! ```

// Re-export everything from routedoc-core at the top level for
// convenience.
pub use routedoc_core::*;

#[cfg(feature = "openapi")]
pub use routedoc_openapi as openapi;
