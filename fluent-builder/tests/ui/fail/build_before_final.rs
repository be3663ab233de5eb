//! `build` only exists once every required field is set.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub struct Pair {
    #[builder(required)]
    a: u8,
    #[builder(required)]
    b: u8,
}

fn main() { Pair::builder().a(1).build(); }
