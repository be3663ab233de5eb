//! Example 01 – Person
//!
//! Three required fields, two optional ones and one field the builder never sets.

use anyhow::Result;

use crate::FluentBuilder;

#[derive(FluentBuilder, Debug, Clone, PartialEq)]
pub struct Person {
    #[builder(required)]
    pub first_name: String,
    #[builder(required)]
    pub last_name: String,
    #[builder(required)]
    pub age: u32,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[builder(skip)]
    pub internal_id: u64,
}

/// Example 01 – every required field in declaration order, optional ones in between.
pub fn run() -> Result<()> {
    use person_builder::WithOptionals;

    let person = Person::builder()
        .first_name("John".to_string())
        .email(Some("john@example.com".to_string()))
        .last_name("Doe".to_string())
        .age(30)
        .build();

    assert_eq!(
        person,
        Person {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: 30,
            email: Some("john@example.com".to_string()),
            phone: None,
            internal_id: 0,
        }
    );

    // The module-level factory starts from the same state as the shortcut.
    let initial: person_builder::Initial = person_builder::builder();
    let done: person_builder::Final = initial.age(41).last_name("Roe".to_string()).first_name("Jane".to_string());
    assert_eq!(done.get_phone(), &None);
    assert_eq!(done.build().age, 41);

    Ok(())
}
