use proc_macro2::Span;
use thiserror::Error;

use crate::lattice::MAX_REQUIRED_FIELDS;

/// Reasons a declaration cannot be turned into a builder.
///
/// Every variant carries the span of the offending declaration or field so the
/// derive can attribute the diagnostic precisely.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The derive was applied to an enum, union or tuple struct.
    #[error("FluentBuilder can only be applied to structs with named fields")]
    NotARecord { span: Span },

    #[error("FluentBuilder does not support generic structs")]
    Generic { span: Span },

    /// A field carries both role markers.
    #[error("field `{field}` is marked both `required` and `skip`")]
    ConflictingRoles { field: String, span: Span },

    #[error("duplicate field `{field}`")]
    DuplicateField { field: String, span: Span },

    #[error("field `{field}` uses the `__fb_` prefix reserved for builder internals")]
    ReservedName { field: String, span: Span },

    /// Two generated methods would share a name on the same state.
    #[error("builder method `{method}` for field `{field}` clashes with {other}")]
    AmbiguousMethod {
        method: String,
        field: String,
        other: String,
        span: Span,
    },

    #[error(
        "FluentBuilder supports at most {max} required fields, `{record}` declares {found}",
        max = MAX_REQUIRED_FIELDS
    )]
    TooManyRequired { record: String, found: usize, span: Span },

    #[error("deriving `{name}` on builder states is not supported")]
    UnsupportedDerive { name: String, span: Span },

    /// Malformed `#[builder(...)]` attribute.
    #[error(transparent)]
    Attribute(#[from] syn::Error),
}

impl SchemaError {
    pub fn span(&self) -> Span {
        match self {
            Self::NotARecord { span }
            | Self::Generic { span }
            | Self::ConflictingRoles { span, .. }
            | Self::DuplicateField { span, .. }
            | Self::ReservedName { span, .. }
            | Self::AmbiguousMethod { span, .. }
            | Self::TooManyRequired { span, .. }
            | Self::UnsupportedDerive { span, .. } => *span,
            Self::Attribute(err) => err.span(),
        }
    }
}

impl From<SchemaError> for syn::Error {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::Attribute(err) => err,
            other => syn::Error::new(other.span(), other.to_string()),
        }
    }
}
