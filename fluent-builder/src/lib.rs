//! Compile-time checked builders.
//!
//! `#[derive(FluentBuilder)]` generates one state type for every combination of
//! required fields supplied so far. Required values are supplied through consuming
//! methods that move to the next state, optional values through setters that keep the
//! current state, and `build` only exists once every required field is in. A missing
//! required field is a compile error, not a runtime one.
//!
//! ```
//! use fluent_builder::FluentBuilder;
//! use person_builder::WithOptionals;
//!
//! #[derive(FluentBuilder, Debug)]
//! pub struct Person {
//!     #[builder(required)]
//!     first_name: String,
//!     #[builder(required)]
//!     last_name: String,
//!     email: Option<String>,
//!     #[builder(skip)]
//!     visits: u32,
//! }
//!
//! fn main() {
//!     let person = Person::builder()
//!         .email(Some("ada@example.com".to_string()))
//!         .last_name("Lovelace".to_string())
//!         .first_name("Ada".to_string())
//!         .build();
//!
//!     assert_eq!(person.first_name, "Ada");
//!     assert_eq!(person.visits, 0);
//! }
//! ```
//!
//! Leaving out a required field leaves the chain in a state without `build`:
//!
//! ```compile_fail
//! use fluent_builder::FluentBuilder;
//!
//! #[derive(FluentBuilder)]
//! pub struct Person {
//!     #[builder(required)]
//!     first_name: String,
//!     #[builder(required)]
//!     last_name: String,
//! }
//!
//! fn main() {
//!     let _person = Person::builder().first_name("Ada".to_string()).build();
//! }
//! ```
//!
//! Supplying a required field twice does not compile either:
//!
//! ```compile_fail
//! use fluent_builder::FluentBuilder;
//!
//! #[derive(FluentBuilder)]
//! pub struct Point {
//!     #[builder(required)]
//!     x: i32,
//!     #[builder(required)]
//!     y: i32,
//! }
//!
//! fn main() {
//!     let _point = Point::builder().x(1).x(2).y(3).build();
//! }
//! ```
//!
//! The builder lives in a module named after the record (`person_builder` above). Its
//! states are `Initial`, `Final` and `Missing<i>_<j>` for the positions of the required
//! fields still missing, so `Missing1` waits for the second required field. Optional
//! setters come from the module's `WithOptionals` trait, which has to be in scope.
//! Records must be declared at module level, not inside a function body.

pub use fluent_builder_macros::FluentBuilder;

#[doc(hidden)]
pub mod examples;
