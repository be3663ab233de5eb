//! Type-state builder generation.
//!
//! A record with N required fields gets 2^N state types, one per subset of
//! required fields already supplied. Each state exposes a consuming method per
//! missing required field that moves to the state with that field added, plus
//! setters for every optional field that keep the current state. Only the state
//! with every required field supplied has `build`.
//!
//! The same emitter backs the `FluentBuilder` derive and the build-time expander.

mod carrier;
mod classify;
mod construct;
mod error;
mod lattice;
mod namer;
mod plan;
mod schema;
mod synth;
mod unit;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub use carrier::{CAPABILITY_TRAIT, STORAGE_TYPE};
pub use error::SchemaError;
pub use lattice::{Lattice, MAX_REQUIRED_FIELDS, Node, Subset};
pub use namer::{FINAL_STATE, INITIAL_STATE, state_name};
pub use plan::{BuilderPlan, StatePlan, TransitionPlan, plan};
pub use schema::{Field, HELPER_ATTRIBUTE, RecordShape, Role, Schema};
pub use unit::{emit_unit, module_name};

/// Name of the derive this crate implements.
pub const DERIVE_NAME: &str = "FluentBuilder";

/// Extract the schema from a derive input and emit its builder unit.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let schema = Schema::from_derive_input(input)?;
    Ok(emit_unit(&schema)?)
}
