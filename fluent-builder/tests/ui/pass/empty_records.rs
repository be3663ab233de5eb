use fluent_builder::FluentBuilder;

#[derive(FluentBuilder, Debug, PartialEq)]
struct Unit;

#[derive(FluentBuilder, Debug, PartialEq)]
struct Braces {}

#[derive(FluentBuilder, Debug, PartialEq)]
struct OnlySkipped {
    #[builder(skip)]
    hits: u64,
}

fn main() {
    assert_eq!(Unit::builder().build(), Unit);
    assert_eq!(Braces::builder().build(), Braces {});
    assert_eq!(OnlySkipped::builder().build(), OnlySkipped { hits: 0 });
}
