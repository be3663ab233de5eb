//! Example 05 – Branching
//!
//! With `#[builder(derive(Clone))]` every state is `Clone`, so a partly filled builder
//! can be reused as a template. Each clone carries its own optional values.

use anyhow::Result;

use crate::FluentBuilder;

#[derive(FluentBuilder, Debug, Clone, PartialEq)]
#[builder(derive(Clone, Debug))]
pub struct Email {
    #[builder(required)]
    pub from: String,
    #[builder(required)]
    pub to: String,
    pub subject: String,
    pub cc: Vec<String>,
}

/// Example 05 – two messages from one template.
pub fn run() -> Result<()> {
    use email_builder::WithOptionals;

    let template = Email::builder()
        .from("noreply@example.com".to_string())
        .subject("Welcome".to_string());
    let rendered = format!("{template:?}");
    assert!(rendered.contains("Welcome"));

    let first = template.clone().to("ada@example.com".to_string()).build();
    let second = template
        .cc(vec!["audit@example.com".to_string()])
        .to("alan@example.com".to_string())
        .build();

    assert_eq!(first.from, second.from);
    assert_eq!(first.subject, "Welcome");
    assert!(first.cc.is_empty());
    assert_eq!(second.cc, vec!["audit@example.com".to_string()]);
    assert_ne!(first.to, second.to);

    Ok(())
}
