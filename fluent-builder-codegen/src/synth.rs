use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::carrier::Carrier;
use crate::classify::Classified;
use crate::construct::construction_expr;
use crate::lattice::{Node, Subset};
use crate::namer::state_ident;
use crate::schema::{Field, Role, Schema};

const CONSTRUCTOR: &str = "__fb_new";

/// Emits one state type per lattice node.
pub struct StateSynthesizer<'a> {
    schema: &'a Schema,
    classified: &'a Classified<'a>,
    carrier: &'a Carrier<'a>,
    derive_attr: &'a TokenStream,
}

impl<'a> StateSynthesizer<'a> {
    pub fn new(
        schema: &'a Schema,
        classified: &'a Classified<'a>,
        carrier: &'a Carrier<'a>,
        derive_attr: &'a TokenStream,
    ) -> Self {
        Self {
            schema,
            classified,
            carrier,
            derive_attr,
        }
    }

    fn width(&self) -> usize {
        self.classified.width()
    }

    fn constructor(&self) -> Ident {
        Ident::new(CONSTRUCTOR, proc_macro2::Span::call_site())
    }

    /// Required fields in `subset`, in declaration order.
    fn required_in(&self, subset: Subset) -> Vec<&'a Field> {
        subset.positions().map(|position| self.classified.required[position]).collect()
    }

    pub fn emit(&self, node: Node) -> TokenStream {
        let ident = state_ident(node.provided, self.width());
        let provided = self.required_in(node.provided);
        let derive_attr = self.derive_attr;
        let doc = self.state_doc(node);

        let mut fields: Vec<TokenStream> = provided
            .iter()
            .map(|field| {
                let name = &field.ident;
                let ty = &field.ty;
                quote! { #name: #ty }
            })
            .collect();
        fields.extend(self.carrier.state_field());

        let constructor = self.emit_constructor(node, &provided);
        let transitions = node.transitions().map(|(position, successor)| self.emit_transition(position, successor));
        let finish = node.is_final().then(|| self.emit_finish());
        let carrier_impl = self.carrier.implement_for(&ident);

        quote! {
            #[doc = #doc]
            #derive_attr
            #[must_use = "builder states do nothing until `build` is called"]
            pub struct #ident {
                #(#fields,)*
            }

            impl #ident {
                #constructor

                #(#transitions)*

                #finish
            }

            #carrier_impl
        }
    }

    /// Provided values in declaration order, then the predecessor's optional storage.
    fn emit_constructor(&self, node: Node, provided: &[&Field]) -> TokenStream {
        let constructor = self.constructor();
        if node.is_initial() {
            let fresh = self.carrier.fresh();
            return quote! {
                fn #constructor() -> Self {
                    Self { #fresh }
                }
            };
        }

        let mut params: Vec<TokenStream> = provided
            .iter()
            .map(|field| {
                let name = &field.ident;
                let ty = &field.ty;
                quote! { #name: #ty }
            })
            .collect();
        params.extend(self.carrier.state_field());

        let mut inits: Vec<TokenStream> = provided
            .iter()
            .map(|field| {
                let name = &field.ident;
                quote! { #name }
            })
            .collect();
        inits.extend(self.carrier.adopt());

        quote! {
            fn #constructor(#(#params),*) -> Self {
                Self { #(#inits),* }
            }
        }
    }

    fn emit_transition(&self, position: usize, successor: Subset) -> TokenStream {
        let field = self.classified.required[position];
        let name = &field.ident;
        let ty = &field.ty;
        let target = state_ident(successor, self.width());
        let constructor = self.constructor();
        let doc = format!("Supply the required field `{name}`.");

        let mut args: Vec<TokenStream> = successor
            .positions()
            .map(|supplied| {
                let arg = &self.classified.required[supplied].ident;
                if supplied == position {
                    quote! { #arg }
                } else {
                    quote! { self.#arg }
                }
            })
            .collect();
        args.extend(self.carrier.forward());

        quote! {
            #[doc = #doc]
            pub fn #name(self, #name: #ty) -> #target {
                #target::#constructor(#(#args),*)
            }
        }
    }

    fn emit_finish(&self) -> TokenStream {
        let record = &self.schema.name;
        let doc = format!("Construct the `{record}`. Skipped fields take their default value.");
        let expr = construction_expr(self.schema, &self.classified.full_order, |field| match field.role {
            Role::Optional => self.carrier.read(field),
            _ => {
                let name = &field.ident;
                quote! { self.#name }
            }
        });
        quote! {
            #[doc = #doc]
            pub fn build(self) -> super::#record {
                #expr
            }
        }
    }

    fn state_doc(&self, node: Node) -> String {
        let record = &self.schema.name;
        if node.is_final() {
            return format!("`{record}` builder with every required field supplied; call `build` to finish.");
        }
        let missing = field_list(&self.required_in(node.missing));
        if node.is_initial() {
            format!("Starting state of the `{record}` builder. Still needs {missing}.")
        } else {
            format!("`{record}` builder still waiting for {missing}.")
        }
    }
}

fn field_list(fields: &[&Field]) -> String {
    let names: Vec<String> = fields.iter().map(|field| format!("`{}`", field.ident)).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
