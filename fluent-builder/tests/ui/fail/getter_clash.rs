//! The getter of `name` would collide with the setter of `get_name`.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub struct Profile {
    name: String,
    get_name: bool,
}

fn main() {}
