use crate::format::{self, FormatType};

/// A named response header with an optional schema primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    name: String,
    description: Option<String>,
    schema_type: Option<FormatType>,
}

impl Header {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            schema_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Resolve `T` through the default format mapper and store the result
    /// now; an unsupported `T` stores no schema.
    pub fn with_schema<T: 'static>(mut self) -> Self {
        self.schema_type = format::resolve::<T>();
        self
    }

    pub fn with_schema_type(mut self, schema_type: FormatType) -> Self {
        self.schema_type = Some(schema_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn schema_type(&self) -> Option<FormatType> {
        self.schema_type
    }
}
