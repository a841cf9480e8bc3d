use crate::content::Content;
use crate::header::Header;
use crate::route::RouteBuilder;

/// Create a response entry for the given status.
///
/// Accepts numeric statuses and wildcard strings alike:
/// `with_status(200)`, `with_status("default")`, `with_status("4XX")`.
pub fn with_status(status: impl ToString) -> ResponseEntry {
    ResponseEntry::new(status)
}

/// The documented responses of a route: an append-ordered list of
/// status-keyed entries. Duplicate statuses are allowed and retained;
/// what a status-indexed emitter does with them is its own business.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub(crate) entries: Vec<ResponseEntry>,
}

impl Response {
    pub fn entries(&self) -> &[ResponseEntry] {
        &self.entries
    }
}

/// One documented response: status, description, body, headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry {
    status: String,
    description: Option<String>,
    content: Option<Content>,
    headers: Option<Vec<Header>>,
}

impl ResponseEntry {
    pub fn new(status: impl ToString) -> Self {
        Self {
            status: status.to_string(),
            description: None,
            content: None,
            headers: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the header group, replacing any previous one.
    ///
    /// Setting an empty group is distinct from never setting one: see
    /// [`headers`](Self::headers).
    pub fn with_headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = Header>,
    {
        self.headers = Some(headers.into_iter().collect());
        self
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// `None` when headers were never set, `Some` (possibly empty) when
    /// they were.
    pub fn headers(&self) -> Option<&[Header]> {
        self.headers.as_deref()
    }
}

/// Builder view over the owning route's responses.
pub struct ResponseBuilder {
    pub(crate) builder: RouteBuilder,
}

impl ResponseBuilder {
    /// Append an entry.
    pub fn add(mut self, entry: ResponseEntry) -> Self {
        self.builder.route.response.entries.push(entry);
        self
    }

    /// Terminator: hand back the owning route builder.
    pub fn build(self) -> RouteBuilder {
        self.builder
    }
}
