use std::collections::HashSet;

use fluent_builder::FluentBuilder;

#[derive(FluentBuilder)]
#[builder(derive(Clone, Debug, PartialEq, Eq, Hash))]
struct Key {
    #[builder(required)]
    namespace: String,
    #[builder(required)]
    name: String,
    version: u32,
}

fn main() {
    use key_builder::WithOptionals;

    let a = Key::builder().namespace("app".to_string()).version(2);
    let b = a.clone();
    let mut seen = HashSet::new();
    assert!(seen.insert(a));
    assert!(!seen.insert(b));

    let key = Key::builder().name("n".to_string()).namespace("ns".to_string()).build();
    assert_eq!(key.version, 0);
}
