use crate::content::Content;
use crate::response::ResponseBuilder;
use crate::route::RouteBuilder;

/// The documented request body of a route. Exactly one exists per route,
/// created with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub(crate) description: Option<String>,
    pub(crate) required: bool,
    pub(crate) content: Option<Content>,
}

impl Request {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }
}

/// Builder view over the owning route's request.
pub struct RequestBuilder {
    pub(crate) builder: RouteBuilder,
}

impl RequestBuilder {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.builder.route.request.description = Some(description.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.builder.route.request.required = required;
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.builder.route.request.content = Some(content);
        self
    }

    /// Jump to the sibling response builder of the same route.
    pub fn response(self) -> ResponseBuilder {
        self.builder.response()
    }

    /// Terminator: hand back the owning route builder.
    pub fn build(self) -> RouteBuilder {
        self.builder
    }
}
