//! Schema model and extraction from `#[derive(FluentBuilder)]` input.

use std::collections::HashSet;

use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Path, Type, Visibility};

use crate::error::SchemaError;
use crate::lattice::MAX_REQUIRED_FIELDS;

/// Name of the helper attribute carrying field markers and container options.
pub const HELPER_ATTRIBUTE: &str = "builder";

/// Derives that may be forwarded onto the emitted state types.
const FORWARDABLE_DERIVES: &[&str] = &["Clone", "Debug", "PartialEq", "Eq", "Hash"];

/// Prefix of the hidden items every builder state carries.
const RESERVED_PREFIX: &str = "__fb_";

/// Inherent method of the final state.
const FINISH_METHOD: &str = "build";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Must be supplied before `build` becomes reachable.
    Required,
    /// May be supplied at any state, defaults otherwise.
    Optional,
    /// Never settable; always defaulted at construction.
    Excluded,
}

#[derive(Clone, Debug)]
pub struct Field {
    pub ident: Ident,
    pub ty: Type,
    pub role: Role,
    /// Position in the record's declaration order.
    pub index: usize,
}

impl Field {
    /// Field name without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// How the target record is spelled when it is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape {
    /// `struct R { .. }`
    Named,
    /// `struct R;`
    Unit,
}

#[derive(Clone, Debug)]
pub struct Schema {
    pub name: Ident,
    pub vis: Visibility,
    pub shape: RecordShape,
    pub fields: Vec<Field>,
    /// Extra derives requested through `#[builder(derive(...))]`.
    pub derives: Vec<Path>,
}

/// The two independent role markers a field may carry.
#[derive(Default)]
struct RoleMarkers {
    required: Option<Span>,
    skip: Option<Span>,
}

impl RoleMarkers {
    fn resolve(self, field: &Ident) -> Result<Role, SchemaError> {
        match (self.required, self.skip) {
            (Some(_), Some(span)) => Err(SchemaError::ConflictingRoles {
                field: field.unraw().to_string(),
                span,
            }),
            (Some(_), None) => Ok(Role::Required),
            (None, Some(_)) => Ok(Role::Excluded),
            (None, None) => Ok(Role::Optional),
        }
    }
}

impl Schema {
    /// Build a schema by hand. Indices follow the iteration order.
    pub fn new(name: Ident, fields: impl IntoIterator<Item = (Ident, Type, Role)>) -> Self {
        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(index, (ident, ty, role))| Field { ident, ty, role, index })
            .collect();
        Self {
            name,
            vis: Visibility::Inherited,
            shape: RecordShape::Named,
            fields,
            derives: Vec::new(),
        }
    }

    pub fn from_derive_input(input: &DeriveInput) -> Result<Self, SchemaError> {
        let not_a_record = || SchemaError::NotARecord {
            span: input.ident.span(),
        };

        let (shape, raw_fields) = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => (RecordShape::Named, named.named.iter().collect::<Vec<_>>()),
                Fields::Unit => (RecordShape::Unit, Vec::new()),
                Fields::Unnamed(_) => return Err(not_a_record()),
            },
            Data::Enum(_) | Data::Union(_) => return Err(not_a_record()),
        };

        if !input.generics.params.is_empty() {
            return Err(SchemaError::Generic {
                span: input.generics.span(),
            });
        }

        let mut derives = Vec::new();
        for attr in &input.attrs {
            if attr.path().is_ident(HELPER_ATTRIBUTE) {
                parse_container_attr(attr, &mut derives)?;
            }
        }

        let mut fields = Vec::with_capacity(raw_fields.len());
        for (index, field) in raw_fields.into_iter().enumerate() {
            let ident = field.ident.clone().ok_or_else(not_a_record)?;
            let mut markers = RoleMarkers::default();
            for attr in &field.attrs {
                if attr.path().is_ident(HELPER_ATTRIBUTE) {
                    parse_field_attr(attr, &mut markers)?;
                }
            }
            let role = markers.resolve(&ident)?;
            let mut ty = field.ty.clone();
            ReplaceSelf { record: &input.ident }.visit_type_mut(&mut ty);
            fields.push(Field {
                ident,
                ty,
                role,
                index,
            });
        }

        let schema = Self {
            name: input.ident.clone(),
            vis: input.vis.clone(),
            shape,
            fields,
            derives,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Check the invariants the lattice relies on: unique names, contiguous indices,
    /// a bounded number of required fields and no two generated methods sharing a name.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (position, field) in self.fields.iter().enumerate() {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField {
                    field: field.name(),
                    span: field.ident.span(),
                });
            }
            if field.name().starts_with(RESERVED_PREFIX) {
                return Err(SchemaError::ReservedName {
                    field: field.name(),
                    span: field.ident.span(),
                });
            }
            debug_assert_eq!(field.index, position, "field indices must follow declaration order");
        }

        for field in self.fields.iter().filter(|f| f.role == Role::Optional) {
            if field.name() == FINISH_METHOD {
                return Err(SchemaError::AmbiguousMethod {
                    method: field.name(),
                    field: field.name(),
                    other: "the `build` method of the final state".to_string(),
                    span: field.ident.span(),
                });
            }
            let getter = format!("get_{}", field.name());
            if let Some(other) = self
                .fields
                .iter()
                .find(|other| other.role != Role::Excluded && other.name() == getter)
            {
                return Err(SchemaError::AmbiguousMethod {
                    method: getter,
                    field: field.name(),
                    other: format!("the setter of field `{}`", other.name()),
                    span: other.ident.span(),
                });
            }
        }

        let required = self.fields.iter().filter(|f| f.role == Role::Required).count();
        if required > MAX_REQUIRED_FIELDS {
            return Err(SchemaError::TooManyRequired {
                record: self.name.to_string(),
                found: required,
                span: self.name.span(),
            });
        }
        Ok(())
    }

    pub fn unit_name(&self) -> String {
        format!("{}Builder", self.name.unraw())
    }
}

/// Rewrites `Self` in a field type to the record name.
///
/// Field types are copied into the state types, where `Self` would name the state.
struct ReplaceSelf<'a> {
    record: &'a Ident,
}

impl VisitMut for ReplaceSelf<'_> {
    fn visit_path_mut(&mut self, path: &mut Path) {
        if let Some(first) = path.segments.first_mut()
            && first.ident == "Self"
        {
            let span = first.ident.span();
            first.ident = self.record.clone();
            first.ident.set_span(span);
        }
        visit_mut::visit_path_mut(self, path);
    }
}

fn parse_container_attr(attr: &Attribute, derives: &mut Vec<Path>) -> Result<(), SchemaError> {
    let mut rejected = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("derive") {
            meta.parse_nested_meta(|item| {
                let name = item
                    .path
                    .segments
                    .last()
                    .map(|segment| segment.ident.to_string())
                    .unwrap_or_default();
                if !FORWARDABLE_DERIVES.contains(&name.as_str()) {
                    rejected.get_or_insert(SchemaError::UnsupportedDerive {
                        name,
                        span: item.path.span(),
                    });
                }
                derives.push(item.path);
                Ok(())
            })
        } else if meta.path.is_ident("required") || meta.path.is_ident("skip") {
            Err(meta.error("`required` and `skip` belong on fields, not on the struct"))
        } else {
            Err(meta.error(format!(
                "unknown builder option `{}`, expected `derive(...)`",
                path_string(&meta.path)
            )))
        }
    })?;
    match rejected {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn parse_field_attr(attr: &Attribute, markers: &mut RoleMarkers) -> Result<(), SchemaError> {
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("required") {
            markers.required = Some(meta.path.span());
        } else if meta.path.is_ident("skip") {
            markers.skip = Some(meta.path.span());
        } else {
            return Err(meta.error(format!(
                "unknown builder field option `{}`, expected `required` or `skip`",
                path_string(&meta.path)
            )));
        }
        Ok(())
    })?;
    Ok(())
}

fn path_string(path: &Path) -> String {
    path.to_token_stream().to_string().replace(' ', "")
}
