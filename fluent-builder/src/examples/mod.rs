//! Runnable walkthroughs of the derive. Each `run` asserts what it demonstrates.

pub mod ex01_person;
pub mod ex02_any_order;
pub mod ex03_optional_fields;
pub mod ex04_no_required_fields;
pub mod ex05_branching;
