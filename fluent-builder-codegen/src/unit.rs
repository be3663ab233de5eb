//! Assembly of the `<Record>Builder` source unit.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::Path;

use crate::carrier::Carrier;
use crate::classify::Classified;
use crate::error::SchemaError;
use crate::lattice::{Lattice, Subset};
use crate::namer::state_ident;
use crate::schema::Schema;
use crate::synth::StateSynthesizer;

/// Name of the module holding the unit: the unit name in snake case.
pub fn module_name(schema: &Schema) -> String {
    to_snake_case(&schema.unit_name())
}

pub fn module_ident(schema: &Schema) -> Ident {
    Ident::new(&module_name(schema), Span::call_site())
}

/// Emit the builder module for `schema` plus the `Record::builder()` shortcut.
pub fn emit_unit(schema: &Schema) -> Result<TokenStream, SchemaError> {
    schema.validate()?;

    let classified = Classified::new(&schema.fields);
    let width = classified.width();
    let lattice = Lattice::enumerate(width);
    let derive_attr = derive_attr(&schema.derives);
    let carrier = Carrier::new(&schema.name, &classified.optional, &derive_attr);
    let synth = StateSynthesizer::new(schema, &classified, &carrier, &derive_attr);

    let carrier_decl = carrier.declaration();
    let states = lattice.nodes().iter().map(|node| synth.emit(*node));

    let record = &schema.name;
    let vis = &schema.vis;
    let module = module_ident(schema);
    let initial = state_ident(Subset::EMPTY, width);
    let module_doc = format!(
        "Type-state builder for [`{record}`]: {} states over {width} required field(s).",
        lattice.len()
    );
    let factory_doc = format!("Start building a `{record}`.");

    Ok(quote! {
        #[doc = #module_doc]
        #[allow(dead_code)]
        #vis mod #module {
            #[allow(unused_imports)]
            use super::*;

            #carrier_decl

            #(#states)*

            #[doc = #factory_doc]
            pub fn builder() -> #initial {
                #initial::__fb_new()
            }
        }

        #[automatically_derived]
        #[allow(dead_code)]
        impl #record {
            #[doc = #factory_doc]
            #vis fn builder() -> #module::#initial {
                #module::builder()
            }
        }
    })
}

fn derive_attr(derives: &[Path]) -> TokenStream {
    if derives.is_empty() {
        return TokenStream::new();
    }
    quote! { #[derive(#(#derives),*)] }
}

/// `PersonBuilder` -> `person_builder`, `HTTPRequestBuilder` -> `http_request_builder`.
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
