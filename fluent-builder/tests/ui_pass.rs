//! Compile-pass tests for valid FluentBuilder declarations.
//!
//! Each file under `tests/ui/pass` is a standalone program exercising one shape of
//! record, including visibility and forwarded derives.

#[test]
fn compile_pass_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
