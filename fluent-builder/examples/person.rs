//! Builds a `Person` through the generated states and prints each step.
//!
//! Run with `cargo run -p fluent-builder --example person`.

use fluent_builder::FluentBuilder;
use person_builder::WithOptionals;

#[derive(FluentBuilder, Debug)]
#[builder(derive(Debug))]
pub struct Person {
    #[builder(required)]
    first_name: String,
    #[builder(required)]
    last_name: String,
    #[builder(required)]
    age: u32,
    email: Option<String>,
    phone: Option<String>,
    #[builder(skip)]
    internal_id: u64,
}

fn main() {
    let start = Person::builder();
    println!("{start:?}");

    let named = start.first_name("John".to_string()).last_name("Doe".to_string());
    println!("{named:?}");

    let person = named.email(Some("john@example.com".to_string())).age(30).build();
    println!("{person:#?}");
    println!("internal id defaults to {}", person.internal_id);
}
