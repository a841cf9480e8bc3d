use serde::Serialize;
use std::any::TypeId;
use std::collections::HashMap;
use std::num::{NonZeroI32, NonZeroI64, NonZeroU8};
use std::sync::OnceLock;

use chrono::NaiveDate;

/// The closed set of schema primitives a native value type can map to.
///
/// Each member carries the OpenAPI `(type, format)` pair it renders as;
/// the association with native Rust types lives in [`FormatMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Int32,
    Int64,
    Float,
    Double,
    String,
    Byte,
    Boolean,
    Date,
    Enum,
}

impl FormatType {
    /// The OpenAPI `type` keyword for this member.
    pub fn schema_type(self) -> &'static str {
        match self {
            FormatType::Int32 | FormatType::Int64 => "integer",
            FormatType::Float | FormatType::Double => "number",
            FormatType::String | FormatType::Byte | FormatType::Date | FormatType::Enum => "string",
            FormatType::Boolean => "boolean",
        }
    }

    /// The OpenAPI `format` keyword for this member, if it has one.
    pub fn schema_format(self) -> Option<&'static str> {
        match self {
            FormatType::Int32 => Some("int32"),
            FormatType::Int64 => Some("int64"),
            FormatType::Float => Some("float"),
            FormatType::Double => Some("double"),
            FormatType::Byte => Some("byte"),
            FormatType::Date => Some("date"),
            FormatType::String | FormatType::Boolean | FormatType::Enum => None,
        }
    }
}

/// Internal table row that enumeration types resolve through.
struct EnumMarker;

/// Maps native value types to [`FormatType`] members.
///
/// Resolution is an exact `TypeId` match against the fixed table, then a
/// single level of declared fallback links. A link whose target is not a
/// table row resolves to nothing; links are never chained. Unsupported
/// types resolve to `None`; absence is a normal result, not an error.
///
/// Rust has no subtype relation to consult, so the fallback links play the
/// role a wrapper type's superclass plays elsewhere: the built-in links
/// cover the std wrapper types (`&'static str`, `Box<str>`, `NonZero*`),
/// and [`with_fallback`](Self::with_fallback) / [`with_enum`](Self::with_enum)
/// declare the relation for user types.
#[derive(Debug, Clone)]
pub struct FormatMapper {
    table: HashMap<TypeId, FormatType>,
    fallbacks: HashMap<TypeId, TypeId>,
}

impl FormatMapper {
    /// A mapper holding the fixed table and the built-in fallback links.
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert(TypeId::of::<i32>(), FormatType::Int32);
        table.insert(TypeId::of::<i64>(), FormatType::Int64);
        table.insert(TypeId::of::<f32>(), FormatType::Float);
        table.insert(TypeId::of::<f64>(), FormatType::Double);
        table.insert(TypeId::of::<String>(), FormatType::String);
        table.insert(TypeId::of::<u8>(), FormatType::Byte);
        table.insert(TypeId::of::<bool>(), FormatType::Boolean);
        table.insert(TypeId::of::<NaiveDate>(), FormatType::Date);
        table.insert(TypeId::of::<EnumMarker>(), FormatType::Enum);

        let mut fallbacks = HashMap::new();
        fallbacks.insert(TypeId::of::<&'static str>(), TypeId::of::<String>());
        fallbacks.insert(TypeId::of::<Box<str>>(), TypeId::of::<String>());
        fallbacks.insert(TypeId::of::<NonZeroI32>(), TypeId::of::<i32>());
        fallbacks.insert(TypeId::of::<NonZeroI64>(), TypeId::of::<i64>());
        fallbacks.insert(TypeId::of::<NonZeroU8>(), TypeId::of::<u8>());

        Self { table, fallbacks }
    }

    /// Declare that `S` resolves through table row `T`.
    ///
    /// Exactly one level deep: if `T` is itself only reachable through a
    /// fallback link, `S` will not resolve.
    pub fn with_fallback<S: 'static, T: 'static>(mut self) -> Self {
        self.fallbacks.insert(TypeId::of::<S>(), TypeId::of::<T>());
        self
    }

    /// Declare `T` an enumeration, resolving to [`FormatType::Enum`].
    pub fn with_enum<T: 'static>(mut self) -> Self {
        self.fallbacks.insert(TypeId::of::<T>(), TypeId::of::<EnumMarker>());
        self
    }

    /// Resolve a native type to its schema primitive, if any.
    pub fn resolve<T: 'static>(&self) -> Option<FormatType> {
        let id = TypeId::of::<T>();
        self.table.get(&id).copied().or_else(|| {
            self.fallbacks
                .get(&id)
                .and_then(|target| self.table.get(target))
                .copied()
        })
    }
}

impl Default for FormatMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a native type through the process-wide default mapper.
///
/// This backs [`Parameter::with_schema`](crate::Parameter::with_schema) and
/// [`Header::with_schema`](crate::Header::with_schema); the default mapper
/// carries only the fixed table and built-in links, so user types needing
/// declared fallbacks must go through an explicit [`FormatMapper`].
pub fn resolve<T: 'static>() -> Option<FormatType> {
    static DEFAULT: OnceLock<FormatMapper> = OnceLock::new();
    DEFAULT.get_or_init(FormatMapper::new).resolve::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_table_pairs() {
        let cases = [
            (resolve::<i32>(), "integer", Some("int32")),
            (resolve::<i64>(), "integer", Some("int64")),
            (resolve::<f32>(), "number", Some("float")),
            (resolve::<f64>(), "number", Some("double")),
            (resolve::<String>(), "string", None),
            (resolve::<u8>(), "string", Some("byte")),
            (resolve::<bool>(), "boolean", None),
            (resolve::<NaiveDate>(), "string", Some("date")),
        ];
        for (resolved, schema_type, schema_format) in cases {
            let format_type = resolved.expect("table row should resolve");
            assert_eq!(format_type.schema_type(), schema_type);
            assert_eq!(format_type.schema_format(), schema_format);
        }
    }

    #[test]
    fn builtin_fallbacks_resolve_like_their_targets() {
        assert_eq!(resolve::<&'static str>(), Some(FormatType::String));
        assert_eq!(resolve::<Box<str>>(), Some(FormatType::String));
        assert_eq!(resolve::<NonZeroI32>(), Some(FormatType::Int32));
        assert_eq!(resolve::<NonZeroI64>(), Some(FormatType::Int64));
        assert_eq!(resolve::<NonZeroU8>(), Some(FormatType::Byte));
    }

    #[test]
    fn unrelated_type_is_absent() {
        struct Unrelated;
        assert_eq!(resolve::<Unrelated>(), None);
        assert_eq!(resolve::<Vec<i32>>(), None);
    }

    #[test]
    fn declared_fallback_resolves_one_level() {
        struct UserId;
        let mapper = FormatMapper::new().with_fallback::<UserId, i64>();
        assert_eq!(mapper.resolve::<UserId>(), Some(FormatType::Int64));
    }

    #[test]
    fn fallback_links_do_not_chain() {
        struct UserId;
        struct WrappedUserId;
        // WrappedUserId -> UserId -> i64: the middle hop is not a table
        // row, so the outer link resolves to nothing.
        let mapper = FormatMapper::new()
            .with_fallback::<UserId, i64>()
            .with_fallback::<WrappedUserId, UserId>();
        assert_eq!(mapper.resolve::<UserId>(), Some(FormatType::Int64));
        assert_eq!(mapper.resolve::<WrappedUserId>(), None);
    }

    #[test]
    fn declared_enum_resolves_to_enum() {
        enum Color {}
        let mapper = FormatMapper::new().with_enum::<Color>();
        let format_type = mapper.resolve::<Color>().expect("declared enum");
        assert_eq!(format_type, FormatType::Enum);
        assert_eq!(format_type.schema_type(), "string");
        assert_eq!(format_type.schema_format(), None);
    }

    #[test]
    fn undeclared_enum_is_absent() {
        enum Color {}
        assert_eq!(FormatMapper::new().resolve::<Color>(), None);
    }
}
