//! Skipped fields get no setter.

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
pub struct Account {
    #[builder(skip)]
    secret: u64,
}

fn main() { Account::builder().secret(7); }
