//! Enums have no field list to build from.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub enum Shape {
    Circle,
    Square,
}

fn main() {}
