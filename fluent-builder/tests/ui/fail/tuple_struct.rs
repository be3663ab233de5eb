//! Tuple structs have no field names to derive setters from.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub struct Pair(u8, u8);

fn main() {}
