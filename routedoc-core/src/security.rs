use serde::Serialize;
use serde_json::{json, Value};

/// An opaque security requirement, stored on a route verbatim and never
/// interpreted by the model layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SecurityRequirement(Value);

impl SecurityRequirement {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// A requirement for the `bearerAuth` scheme with the given scopes.
    pub fn bearer<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scopes: Vec<String> = scopes.into_iter().map(Into::into).collect();
        Self(json!({ "bearerAuth": scopes }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
