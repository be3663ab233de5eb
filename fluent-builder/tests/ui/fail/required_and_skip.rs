//! A field cannot be both required and skipped.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub struct Account {
    #[builder(required, skip)]
    secret: String,
}

fn main() {}
