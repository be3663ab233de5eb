//! Compile-fail tests for misused FluentBuilder declarations.
//!
//! These tests verify that:
//! - non-records and malformed markers are rejected with the diagnostic on the offending token
//! - generated method names never collide
//! - skipped fields have no setter
//! - `build` is unreachable until every required field is set

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/fail/*.rs");
}
