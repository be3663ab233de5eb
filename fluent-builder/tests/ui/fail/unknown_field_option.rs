//! Only `required` and `skip` are accepted on fields.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub struct Account {
    #[builder(mandatory)]
    id: u64,
}

fn main() {}
