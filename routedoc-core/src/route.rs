use crate::param::{Parameter, ParamsScope};
use crate::request::{Request, RequestBuilder};
use crate::response::{Response, ResponseBuilder};
use crate::security::SecurityRequirement;

/// Start describing a route.
pub fn route() -> RouteBuilder {
    RouteBuilder::new()
}

/// The immutable documentation of one route, produced by
/// [`RouteBuilder::build`].
///
/// A route always carries exactly one [`Request`] and one [`Response`],
/// created with it; parameters keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub(crate) id: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) tag: Option<String>,
    pub(crate) deprecated: bool,
    pub(crate) security: Vec<SecurityRequirement>,
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) request: Request,
    pub(crate) response: Response,
}

impl Route {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn security(&self) -> &[SecurityRequirement] {
        &self.security
    }

    pub fn params(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn response(&self) -> &Response {
        &self.response
    }
}

/// Mutable draft of a route description.
///
/// Every setter returns the builder (or a child builder) so a whole
/// description chains as one expression; the final [`build`](Self::build)
/// freezes the draft. Nothing validates anywhere along the way.
#[derive(Debug, Clone, Default)]
pub struct RouteBuilder {
    pub(crate) route: Route,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.route.id = Some(id.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.route.summary = Some(summary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.route.description = Some(description.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.route.tag = Some(tag.into());
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.route.deprecated = deprecated;
        self
    }

    /// Set the security requirements, replacing any previous set.
    pub fn with_security<I>(mut self, security: I) -> Self
    where
        I: IntoIterator<Item = SecurityRequirement>,
    {
        self.route.security = security.into_iter().collect();
        self
    }

    /// Append a parameter.
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.route.parameters.push(parameter);
        self
    }

    /// Declare parameters through a scope bound to this draft.
    ///
    /// Parameters created through the scope land on this route, in call
    /// order, with no route argument threaded by hand. A panic inside the
    /// closure propagates to the caller; the scope dies with the stack
    /// frame, so no state can leak into a later build.
    pub fn with_params<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ParamsScope),
    {
        let mut scope = ParamsScope::new(&mut self.route.parameters);
        f(&mut scope);
        self
    }

    /// Open the request-body builder for this route.
    pub fn request(self) -> RequestBuilder {
        RequestBuilder { builder: self }
    }

    /// Open the responses builder for this route.
    pub fn response(self) -> ResponseBuilder {
        ResponseBuilder { builder: self }
    }

    /// Freeze the draft into an immutable [`Route`].
    pub fn build(self) -> Route {
        self.route
    }
}
