//! Optional-field plumbing shared by every builder state.
//!
//! All optional values live in one `Optionals` struct. Each state embeds it and
//! implements the `WithOptionals` trait, whose provided methods give the getters and
//! the `Self`-returning setters. A transition moves the struct into the successor,
//! so the lattice code never names individual optional fields.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::spanned::Spanned;

use crate::schema::Field;

pub const STORAGE_TYPE: &str = "Optionals";
pub const CAPABILITY_TRAIT: &str = "WithOptionals";
const STORAGE_FIELD: &str = "__fb_optionals";

pub struct Carrier<'a> {
    record: &'a Ident,
    optional: &'a [&'a Field],
    derive_attr: &'a TokenStream,
}

impl<'a> Carrier<'a> {
    pub fn new(record: &'a Ident, optional: &'a [&'a Field], derive_attr: &'a TokenStream) -> Self {
        Self {
            record,
            optional,
            derive_attr,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.optional.is_empty()
    }

    fn storage_type(&self) -> Ident {
        Ident::new(STORAGE_TYPE, Span::call_site())
    }

    fn capability(&self) -> Ident {
        Ident::new(CAPABILITY_TRAIT, Span::call_site())
    }

    fn storage_field(&self) -> Ident {
        Ident::new(STORAGE_FIELD, Span::call_site())
    }

    /// `Optionals` storage, its `Default` impl and the `WithOptionals` trait.
    pub fn declaration(&self) -> TokenStream {
        if self.is_empty() {
            return TokenStream::new();
        }
        let record = self.record;
        let storage = self.storage_type();
        let capability = self.capability();
        let derive_attr = self.derive_attr;

        let storage_doc = format!("Optional fields of `{record}`, moved forward on every transition.");
        let capability_doc = format!("Read and write the optional fields of `{record}` from any builder state.");

        let fields = self.optional.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            quote! { #ident: #ty }
        });
        let defaults = self.optional.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            quote_spanned! {ty.span()=> #ident: <#ty as ::core::default::Default>::default() }
        });
        let accessors = self.optional.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let getter = format_ident!("get_{}", ident);
            let getter_doc = format!("Current value of `{ident}`.");
            let setter_doc = format!("Set `{ident}` without leaving the current state. The last value set wins.");
            quote! {
                #[doc = #getter_doc]
                fn #getter(&self) -> &#ty {
                    &self.__fb_optionals().#ident
                }

                #[doc = #setter_doc]
                fn #ident(mut self, #ident: #ty) -> Self {
                    self.__fb_optionals_mut().#ident = #ident;
                    self
                }
            }
        });

        quote! {
            #[doc = #storage_doc]
            #derive_attr
            pub struct #storage {
                #(#fields,)*
            }

            impl ::core::default::Default for #storage {
                fn default() -> Self {
                    Self {
                        #(#defaults,)*
                    }
                }
            }

            #[doc = #capability_doc]
            pub trait #capability: Sized {
                #[doc(hidden)]
                fn __fb_optionals(&self) -> &#storage;

                #[doc(hidden)]
                fn __fb_optionals_mut(&mut self) -> &mut #storage;

                #(#accessors)*
            }
        }
    }

    /// Field declaration embedding the storage in a state.
    pub fn state_field(&self) -> Option<TokenStream> {
        if self.is_empty() {
            return None;
        }
        let field = self.storage_field();
        let storage = self.storage_type();
        Some(quote! { #field: #storage })
    }

    /// Field initializer for a state created without a predecessor.
    pub fn fresh(&self) -> Option<TokenStream> {
        if self.is_empty() {
            return None;
        }
        let field = self.storage_field();
        let storage = self.storage_type();
        Some(quote! { #field: <#storage as ::core::default::Default>::default() })
    }

    /// Field initializer taking the storage from a constructor parameter of the same name.
    pub fn adopt(&self) -> Option<TokenStream> {
        if self.is_empty() {
            return None;
        }
        let field = self.storage_field();
        Some(quote! { #field })
    }

    /// Argument handing the current state's storage to a successor.
    pub fn forward(&self) -> Option<TokenStream> {
        if self.is_empty() {
            return None;
        }
        let field = self.storage_field();
        Some(quote! { self.#field })
    }

    /// Expression reading an optional value out of a consumed state.
    pub fn read(&self, field: &Field) -> TokenStream {
        let storage = self.storage_field();
        let ident = &field.ident;
        quote! { self.#storage.#ident }
    }

    pub fn implement_for(&self, state: &Ident) -> TokenStream {
        if self.is_empty() {
            return TokenStream::new();
        }
        let capability = self.capability();
        let storage = self.storage_type();
        let field = self.storage_field();
        quote! {
            #[automatically_derived]
            impl #capability for #state {
                fn __fb_optionals(&self) -> &#storage {
                    &self.#field
                }

                fn __fb_optionals_mut(&mut self) -> &mut #storage {
                    &mut self.#field
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Role;
    use syn::parse_quote;

    fn optional(name: &str, index: usize) -> Field {
        Field {
            ident: Ident::new(name, Span::call_site()),
            ty: parse_quote!(String),
            role: Role::Optional,
            index,
        }
    }

    #[test]
    fn no_optional_fields_emit_nothing() {
        let record: Ident = parse_quote!(Point);
        let derive_attr = TokenStream::new();
        let carrier = Carrier::new(&record, &[], &derive_attr);
        assert!(carrier.declaration().is_empty());
        assert!(carrier.state_field().is_none());
        assert!(carrier.forward().is_none());
        assert!(carrier.implement_for(&parse_quote!(Initial)).is_empty());
    }

    #[test]
    fn trait_has_getter_and_setter_per_field() {
        let record: Ident = parse_quote!(Person);
        let email = optional("email", 1);
        let phone = optional("phone", 2);
        let fields = [&email, &phone];
        let derive_attr = TokenStream::new();
        let carrier = Carrier::new(&record, &fields, &derive_attr);

        let file: syn::File = syn::parse2(carrier.declaration()).unwrap();
        let capability = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Trait(item) if item.ident == CAPABILITY_TRAIT => Some(item),
                _ => None,
            })
            .expect("capability trait emitted");
        let methods: Vec<String> = capability
            .items
            .iter()
            .filter_map(|item| match item {
                syn::TraitItem::Fn(method) => Some(method.sig.ident.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(
            methods,
            vec!["__fb_optionals", "__fb_optionals_mut", "get_email", "email", "get_phone", "phone"]
        );
    }

    #[test]
    fn raw_identifiers_produce_plain_getter_names() {
        let record: Ident = parse_quote!(Token);
        let kind = Field {
            ident: parse_quote!(r#type),
            ty: parse_quote!(u8),
            role: Role::Optional,
            index: 0,
        };
        let fields = [&kind];
        let derive_attr = TokenStream::new();
        let carrier = Carrier::new(&record, &fields, &derive_attr);
        let rendered = carrier.declaration().to_string();
        assert!(rendered.contains("get_type"));
        assert!(rendered.contains("r#type"));
    }
}
