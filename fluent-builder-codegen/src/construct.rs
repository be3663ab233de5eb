use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::schema::{Field, RecordShape, Role, Schema};

/// Expression rebuilding the record from a consumed terminal state.
///
/// Fields are emitted in declaration order. `value_of` supplies the stored value of
/// a required or optional field; excluded fields always get their type's default.
pub fn construction_expr<'a>(
    schema: &Schema,
    full_order: &[&'a Field],
    value_of: impl Fn(&'a Field) -> TokenStream,
) -> TokenStream {
    let record = &schema.name;
    if schema.shape == RecordShape::Unit {
        return quote! { super::#record };
    }

    let inits = full_order.iter().map(|field| {
        let ident = &field.ident;
        let value = match field.role {
            Role::Required | Role::Optional => value_of(*field),
            Role::Excluded => default_value(field),
        };
        quote! { #ident: #value }
    });

    quote! {
        super::#record {
            #(#inits,)*
        }
    }
}

/// `Default::default()` spanned on the field type so a missing impl points at the field.
fn default_value(field: &Field) -> TokenStream {
    let ty = &field.ty;
    quote_spanned! {ty.span()=> <#ty as ::core::default::Default>::default() }
}
