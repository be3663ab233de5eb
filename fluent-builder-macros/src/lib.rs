use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive a compile-time checked builder.
///
/// Fields marked `#[builder(required)]` must each be supplied once, in any order,
/// before `build` exists. Unmarked fields are optional setters available from every
/// state. Fields marked `#[builder(skip)]` cannot be set and take their default.
/// `#[builder(derive(Clone, Debug))]` on the struct forwards those derives onto the
/// generated state types.
///
/// The builder lives in a sibling module named after the record, `person_builder`
/// for `Person`, and starts from `Person::builder()`.
#[proc_macro_derive(FluentBuilder, attributes(builder))]
pub fn derive_fluent_builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match fluent_builder_codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
