use serde::Serialize;

use crate::format::{self, FormatType};

/// Where a parameter is located in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Query,
    Path,
    Header,
    Cookie,
}

impl ParamLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Path => "path",
            ParamLocation::Header => "header",
            ParamLocation::Cookie => "cookie",
        }
    }
}

/// Create a detached parameter.
///
/// The result is attached to nothing; hand it to
/// [`RouteBuilder::add`](crate::RouteBuilder::add) or
/// [`ParamsScope::add`] to land it on a route.
pub fn parameter(name: impl Into<String>, location: ParamLocation) -> Parameter {
    Parameter::new(name, location)
}

/// One documented input value of a route.
///
/// Name and location are fixed at construction; everything else is set
/// through chained `with_*` calls, each overwriting any previous value.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    location: ParamLocation,
    description: Option<String>,
    required: Option<bool>,
    schema_type: Option<FormatType>,
    format: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParamLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: None,
            schema_type: None,
            format: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Resolve `T` through the default format mapper and store the result.
    ///
    /// Resolution happens now, not at emission: the parameter keeps the
    /// [`FormatType`] it resolved to at this call. An unsupported `T`
    /// stores no schema at all.
    pub fn with_schema<T: 'static>(mut self) -> Self {
        self.schema_type = format::resolve::<T>();
        self
    }

    /// Store an explicit schema primitive, bypassing the mapper.
    pub fn with_schema_type(mut self, schema_type: FormatType) -> Self {
        self.schema_type = Some(schema_type);
        self
    }

    /// Override the format string the schema primitive would render with.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> ParamLocation {
        self.location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn required(&self) -> Option<bool> {
        self.required
    }

    pub fn schema_type(&self) -> Option<FormatType> {
        self.schema_type
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

/// Parameter declarations scoped to one route draft.
///
/// Obtained through [`RouteBuilder::with_params`](crate::RouteBuilder::with_params);
/// every parameter created through [`parameter`](Self::parameter) lands on
/// the enclosing route, in call order. The scope borrows the draft, so
/// nothing leaks past the closure and concurrent builds cannot observe
/// each other's declarations.
pub struct ParamsScope<'a> {
    params: &'a mut Vec<Parameter>,
}

impl<'a> ParamsScope<'a> {
    pub(crate) fn new(params: &'a mut Vec<Parameter>) -> Self {
        Self { params }
    }

    /// Construct a parameter and attach it to the enclosing route.
    ///
    /// The returned [`ParamRef`] edits the attached parameter in place,
    /// so setters chained on it need no re-attachment.
    pub fn parameter(&mut self, name: impl Into<String>, location: ParamLocation) -> ParamRef<'_> {
        self.params.push(Parameter::new(name, location));
        ParamRef {
            param: self.params.last_mut().expect("entry just pushed"),
        }
    }

    /// Attach an externally built parameter.
    pub fn add(&mut self, parameter: Parameter) -> &mut Self {
        self.params.push(parameter);
        self
    }
}

/// Chainable view of a parameter already attached to a route.
pub struct ParamRef<'a> {
    param: &'a mut Parameter,
}

impl ParamRef<'_> {
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.param.description = Some(description.into());
        self
    }

    pub fn with_required(self, required: bool) -> Self {
        self.param.required = Some(required);
        self
    }

    /// Resolve `T` through the default format mapper, as
    /// [`Parameter::with_schema`] does.
    pub fn with_schema<T: 'static>(self) -> Self {
        self.param.schema_type = format::resolve::<T>();
        self
    }

    pub fn with_schema_type(self, schema_type: FormatType) -> Self {
        self.param.schema_type = Some(schema_type);
        self
    }

    pub fn with_format(self, format: impl Into<String>) -> Self {
        self.param.format = Some(format.into());
        self
    }
}
